use crate::swipe::DEFAULT_SWIPE_THRESHOLD_PX;
use crate::visibility::DEFAULT_VISIBILITY_THRESHOLD;

pub const AUTO_ADVANCE_MS: u32 = 8_000;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "972500000000";
pub const DEFAULT_PHONE_NUMBER: &str = "03XXXXXXX";
pub const DEFAULT_PHONE_DISPLAY: &str = "03-XXXXXXX";
pub const DEFAULT_EMAIL: &str = "info@example.com";

pub const BUSINESS_NAME: &str = "אביב פתרונות חניה";
pub const LEGAL_LAST_UPDATED: &str = "23/12/2025";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub auto_advance_ms: u32,
    pub auto_advance: bool,
    pub swipe_threshold_px: f64,
    pub cta_scroll_threshold: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: AUTO_ADVANCE_MS,
            auto_advance: true,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            cta_scroll_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

impl MotionSettings {
    /// `motion=reduced` in the query string turns auto-advance off.
    pub fn with_motion_preference(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if value.trim().eq_ignore_ascii_case("reduced") {
                self.auto_advance = false;
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub whatsapp_number: String,
    pub phone_number: String,
    pub phone_display: String,
    pub email: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            phone_display: DEFAULT_PHONE_DISPLAY.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

impl ContactDetails {
    /// Builds details from optional overrides; blank values keep the defaults.
    pub fn from_overrides(
        whatsapp_number: Option<&str>,
        phone_number: Option<&str>,
        phone_display: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            whatsapp_number: pick(whatsapp_number, defaults.whatsapp_number),
            phone_number: pick(phone_number, defaults.phone_number),
            phone_display: pick(phone_display, defaults.phone_display),
            email: pick(email, defaults.email),
        }
    }

    /// International WhatsApp number shown in local form (`9725…` -> `05…`).
    pub fn whatsapp_display(&self) -> String {
        match self.whatsapp_number.strip_prefix("972") {
            Some(rest) if !rest.is_empty() => format!("0{rest}"),
            _ => self.whatsapp_number.clone(),
        }
    }
}

fn pick(value: Option<&str>, fallback: String) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overrides_keep_defaults() {
        let details = ContactDetails::from_overrides(Some("  "), None, Some("04-1234567"), None);
        assert_eq!(details.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(details.phone_display, "04-1234567");
        assert_eq!(details.email, DEFAULT_EMAIL);
    }

    #[test]
    fn whatsapp_display_uses_local_prefix() {
        let details = ContactDetails::default();
        assert_eq!(details.whatsapp_display(), "0500000000");
    }

    #[test]
    fn reduced_motion_disables_auto_advance() {
        let settings = MotionSettings::default().with_motion_preference(Some("Reduced"));
        assert!(!settings.auto_advance);
        let settings = MotionSettings::default().with_motion_preference(Some("full"));
        assert!(settings.auto_advance);
    }
}
