pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "שלום, אשמח לקבל פרטים לגבי תחזוקה שוטפת או טיפול חד-פעמי למתקן החניה.";
pub const MAINTENANCE_PLAN_MESSAGE: &str =
    "שלום, אשמח לקבל פרטים על תוכנית תחזוקה שוטפת למתקני החניה.";
pub const SYSTEM_IDENTIFY_MESSAGE: &str =
    "שלום, אשמח לשלוח תמונות / תכנית חניה כדי לזהות את סוג המתקן ולבנות עבורו תוכנית תחזוקה.";
pub const CONTACT_FORM_GREETING: &str = "שלום, אשמח לקבל מענה לגבי מתקן חניה:";

const EMPTY_VALUE: &str = "—";
const STATUS_UNSET: &str = "לא צוין";

pub fn whatsapp_link(number: &str, message: &str) -> String {
    let number = number.trim();
    if message.is_empty() {
        return format!("https://wa.me/{number}");
    }
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Maintenance,
    Fault,
    NewProject,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [
        ContactStatus::Maintenance,
        ContactStatus::Fault,
        ContactStatus::NewProject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactStatus::Maintenance => "צריך תחזוקה שוטפת",
            ContactStatus::Fault => "תקלה במתקן קיים",
            ContactStatus::NewProject => "פרויקט חדש או תכנון חניה",
        }
    }

    /// Clicking the selected chip clears it; clicking another one selects it.
    pub fn toggle(current: Option<ContactStatus>, clicked: ContactStatus) -> Option<ContactStatus> {
        if current == Some(clicked) {
            None
        } else {
            Some(clicked)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemType {
    Multipliers,
    Embedded,
    Puzzle,
    Automatic,
    NotSure,
}

impl SystemType {
    pub const ALL: [SystemType; 5] = [
        SystemType::Multipliers,
        SystemType::Embedded,
        SystemType::Puzzle,
        SystemType::Automatic,
        SystemType::NotSure,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SystemType::Multipliers => "multipliers",
            SystemType::Embedded => "embedded",
            SystemType::Puzzle => "puzzle",
            SystemType::Automatic => "automatic",
            SystemType::NotSure => "notSure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SystemType::Multipliers => "מכפיל",
            SystemType::Embedded => "מתקן טמון",
            SystemType::Puzzle => "פאזל",
            SystemType::Automatic => "אוטומטי",
            SystemType::NotSure => "לא בטוח",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Phone,
    Email,
    Address,
    Message,
}

impl ContactField {
    pub fn id(self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Address => "address",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FullName => "שם מלא",
            ContactField::Phone => "טלפון",
            ContactField::Email => "אימייל",
            ContactField::Address => "כתובת/עיר",
            ContactField::Message => "הודעה",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::FullName => "לדוגמה: ישראל ישראלי",
            ContactField::Phone => "לדוגמה: 05XXXXXXXX",
            ContactField::Email => "לדוגמה: name@mail.com",
            ContactField::Address => "לדוגמה: תל אביב",
            ContactField::Message => "ספרו לנו בקצרה מה קורה בשטח או מה אתם מחפשים...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub system_type: Option<SystemType>,
    pub message: String,
    pub status: Option<ContactStatus>,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Address => &self.address,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Address => &mut self.address,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn toggle_status(&mut self, clicked: ContactStatus) {
        self.status = ContactStatus::toggle(self.status, clicked);
    }

    pub fn summary(&self) -> String {
        let lines = [
            format!("שם: {}", or_dash(&self.full_name)),
            format!("טלפון: {}", or_dash(&self.phone)),
            format!("אימייל: {}", or_dash(&self.email)),
            format!("כתובת/עיר: {}", or_dash(&self.address)),
            format!(
                "סוג מתקן: {}",
                self.system_type.map(SystemType::label).unwrap_or(EMPTY_VALUE)
            ),
            format!(
                "סטטוס: {}",
                self.status.map(ContactStatus::label).unwrap_or(STATUS_UNSET)
            ),
            format!("הודעה: {}", or_dash(&self.message)),
        ];
        lines.join("\n")
    }

    pub fn whatsapp_message(&self) -> String {
        format!("{CONTACT_FORM_GREETING}\n\n{}", self.summary())
    }

    pub fn whatsapp_link(&self, number: &str) -> String {
        whatsapp_link(number, &self.whatsapp_message())
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_VALUE
    } else {
        value
    }
}
