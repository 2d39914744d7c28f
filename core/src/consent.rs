use std::collections::BTreeMap;

use serde::Serialize;

use crate::route::LegalSection;

pub const CONSENT_COOKIE_NAME: &str = "cc_consent";
pub const CONSENT_LANGUAGE: &str = "he";

/// What the site needs from a consent manager. Anything else the library
/// exposes is ignored.
pub trait ConsentCapability {
    fn run(&self, config: &ConsentConfig);

    /// Returns `false` when the manager has no preferences dialog.
    fn show_preferences(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentInit {
    Ran,
    Unavailable,
    AlreadyInitialized,
}

/// One-shot guard for starting the consent manager.
#[derive(Debug, Default)]
pub struct ConsentBootstrap {
    started: bool,
}

impl ConsentBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// The guard trips on the first call even when no manager is present, so a
    /// late-loading library is never started twice.
    pub fn init(&mut self, api: Option<&dyn ConsentCapability>, config: &ConsentConfig) -> ConsentInit {
        if self.started {
            return ConsentInit::AlreadyInitialized;
        }
        self.started = true;
        let Some(api) = api else {
            return ConsentInit::Unavailable;
        };
        api.run(config);
        ConsentInit::Ran
    }
}

pub fn open_preferences(api: Option<&dyn ConsentCapability>) -> bool {
    api.map(|api| api.show_preferences()).unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentConfig {
    pub auto_show: bool,
    pub disable_page_interaction: bool,
    pub cookie: CookieOptions,
    pub gui_options: GuiOptions,
    pub categories: BTreeMap<String, CategoryOptions>,
    pub language: LanguageOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookieOptions {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiOptions {
    pub consent_modal: ModalPlacement,
    pub preferences_modal: ModalPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalPlacement {
    pub layout: String,
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOptions {
    pub default: String,
    pub translations: BTreeMap<String, Translation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub consent_modal: ConsentModalText,
    pub preferences_modal: PreferencesModalText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentModalText {
    pub title: String,
    pub description: String,
    pub accept_all_btn: String,
    pub accept_necessary_btn: String,
    pub show_preferences_btn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesModalText {
    pub title: String,
    pub accept_all_btn: String,
    pub accept_necessary_btn: String,
    pub save_preferences_btn: String,
    pub close_icon_label: String,
    pub sections: Vec<PreferencesSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesSection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_category: Option<String>,
}

impl PreferencesSection {
    fn new(title: &str, description: &str, linked_category: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            linked_category: linked_category.map(str::to_string),
        }
    }
}

impl Default for ConsentConfig {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            "necessary".to_string(),
            CategoryOptions {
                read_only: Some(true),
            },
        );
        categories.insert("analytics".to_string(), CategoryOptions::default());
        categories.insert("marketing".to_string(), CategoryOptions::default());

        let footer = [
            (LegalSection::Privacy, "מדיניות פרטיות"),
            (LegalSection::Cookies, "מדיניות קוקיז"),
            (LegalSection::Terms, "תנאי שימוש"),
        ]
        .iter()
        .map(|(section, label)| format!("<a href=\"{}\">{label}</a>", section.href()))
        .collect::<Vec<_>>()
        .join("<span style=\"padding:0 10px\">•</span>");

        let hebrew = Translation {
            consent_modal: ConsentModalText {
                title: "עוגיות באתר".to_string(),
                description: "אנחנו משתמשים בעוגיות הכרחיות לתפעול האתר. עוגיות אנליטיקס/שיווק (אם מופעלות) עוזרות למדידה ושיפור. תוכלו לבחור מה לאשר.".to_string(),
                accept_all_btn: "אישור הכל".to_string(),
                accept_necessary_btn: "רק הכרחיות".to_string(),
                show_preferences_btn: "הגדרות".to_string(),
                footer: Some(footer),
            },
            preferences_modal: PreferencesModalText {
                title: "העדפות עוגיות".to_string(),
                accept_all_btn: "אישור הכל".to_string(),
                accept_necessary_btn: "רק הכרחיות".to_string(),
                save_preferences_btn: "שמירה".to_string(),
                close_icon_label: "סגירה".to_string(),
                sections: vec![
                    PreferencesSection::new(
                        "במה לבחור?",
                        "הכרחיות נדרשות לתפעול. אנליטיקס ושיווק מופעלות רק אם תאשרו.",
                        None,
                    ),
                    PreferencesSection::new(
                        "הכרחיות",
                        "נדרשות לתפעול האתר ושמירת העדפות.",
                        Some("necessary"),
                    ),
                    PreferencesSection::new(
                        "אנליטיקס",
                        "מדידה ושיפור ביצועים (אם תאשרו).",
                        Some("analytics"),
                    ),
                    PreferencesSection::new("שיווק", "מדידה/פרסום (אם תאשרו).", Some("marketing")),
                ],
            },
        };
        let mut translations = BTreeMap::new();
        translations.insert(CONSENT_LANGUAGE.to_string(), hebrew);

        Self {
            auto_show: true,
            disable_page_interaction: false,
            cookie: CookieOptions {
                name: CONSENT_COOKIE_NAME.to_string(),
            },
            gui_options: GuiOptions {
                consent_modal: ModalPlacement {
                    layout: "cloud".to_string(),
                    position: "bottom center".to_string(),
                },
                preferences_modal: ModalPlacement {
                    layout: "box".to_string(),
                    position: "center".to_string(),
                },
            },
            categories,
            language: LanguageOptions {
                default: CONSENT_LANGUAGE.to_string(),
                translations,
            },
        }
    }
}
