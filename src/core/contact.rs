//! Contact form state and mail hand-off
//!
//! The form never talks to a server. Submitting it builds a `mailto:` URI
//! addressed to [`CONTACT_EMAIL`] and hands it to the visitor's mail client;
//! the form is cleared right away, whether or not a mail client picks it up.

use crate::core::content::CONTACT_EMAIL;

/// Input fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Current contents of the contact form
///
/// All three fields are always defined strings, empty until typed into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field with the latest input value
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Mail client URI for the current contents.
    ///
    /// Name and message are inserted verbatim; the mail client decides how
    /// to treat reserved characters. The email field is not included.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject=Contacto de {}&body={}",
            CONTACT_EMAIL, self.name, self.message
        )
    }

    /// Build the mail URI and clear every field
    pub fn submit(&mut self) -> String {
        let uri = self.mailto_uri();
        *self = Self::default();
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();

        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert!(form.is_empty());
    }

    #[test]
    fn test_fields_update_independently() {
        let mut form = ContactForm::new();

        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@");
        form.set(ContactField::Name, "Ad");
        form.set(ContactField::Message, "Hola");
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");

        assert_eq!(form.get(ContactField::Name), "Ada");
        assert_eq!(form.get(ContactField::Email), "ada@example.com");
        assert_eq!(form.get(ContactField::Message), "Hola");
    }

    #[test]
    fn test_clearing_a_field_keeps_others() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Message, "Hi");

        form.set(ContactField::Name, "");

        assert_eq!(form.name, "");
        assert_eq!(form.message, "Hi");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_submit_builds_mailto_and_resets() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "Hello there");

        let uri = form.submit();

        assert!(uri.starts_with("mailto:karen@alborvia.com?"));
        assert!(uri.contains("subject=Contacto de Ada"));
        assert!(uri.contains("body=Hello there"));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_mailto_leaves_special_characters_unencoded() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "José & Co");
        form.set(ContactField::Message, "50% off?\nyes");

        assert_eq!(
            form.mailto_uri(),
            "mailto:karen@alborvia.com?subject=Contacto de José & Co&body=50% off?\nyes"
        );
    }

    #[test]
    fn test_mailto_omits_sender_email() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "ada@example.com");

        assert!(!form.mailto_uri().contains("ada@example.com"));
    }

    #[test]
    fn test_submit_empty_form() {
        let mut form = ContactForm::new();

        assert_eq!(
            form.submit(),
            "mailto:karen@alborvia.com?subject=Contacto de &body="
        );
        assert!(form.is_empty());
    }
}
