//! Contact form capture. Submission is simulated: nothing leaves the page.

/// Toast title shown after a submission.
pub const CONFIRMATION_TITLE: &str = "Message sent!";
/// Toast body shown after a submission.
pub const CONFIRMATION_MESSAGE: &str = "Thank you for your message. I'll get back to you soon.";

/// Form field names read on submit.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// Fields captured from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Collect fields through `lookup`; missing fields become empty strings.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let [name, email, subject, message] =
            FIELD_NAMES.map(|field| lookup(field).unwrap_or_default());
        Self {
            name,
            email,
            subject,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_fills_known_fields_and_defaults_missing() {
        let captured = ContactMessage::from_lookup(|field| match field {
            "name" => Some("A".to_string()),
            "email" => Some("a@b.com".to_string()),
            "message" => Some("M".to_string()),
            _ => None,
        });
        assert_eq!(
            captured,
            ContactMessage {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: String::new(),
                message: "M".to_string(),
            }
        );
    }
}
