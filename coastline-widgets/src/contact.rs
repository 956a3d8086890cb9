use coastline_shared::Masked;

/// Notice shown once a message passes validation
pub const SENT_NOTICE: &str = "✅ Your message has been sent successfully!";

/// A contact form submission with every field present.
///
/// Nothing is transmitted; the form is a front-end stub that confirms and resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Masked<String>,
    pub email: Masked<String>,
    pub message: Masked<String>,
}

impl ContactSubmission {
    /// Trim the raw field values and require all three.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let fields = [("name", name.trim()), ("email", email.trim()), ("message", message.trim())];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        let [(_, name), (_, email), (_, message)] = fields;
        Ok(Self {
            name: Masked::new(name.to_string()),
            email: Masked::new(email.to_string()),
            message: Masked::new(message.to_string()),
        })
    }

    pub fn notice(&self) -> &'static str {
        SENT_NOTICE
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    /// Carries the names of the empty fields for logging; the visitor sees one fixed message.
    #[error("⚠️ Please fill out all required fields before sending.")]
    MissingFields(Vec<&'static str>),
}
