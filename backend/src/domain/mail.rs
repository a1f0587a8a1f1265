//! Outbound plain-text notifications.

/// One labelled line of a notification body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailField {
    /// Human-readable label, e.g. `Email address`.
    pub label: &'static str,
    /// Submitted value, copied verbatim.
    pub value: String,
}

impl MailField {
    /// Pair a label with a value.
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A single notification handed to the mail relay.
///
/// # Examples
/// ```
/// use cafe_directory::domain::{MailField, MailMessage};
///
/// let message = MailMessage::new(
///     "New Message",
///     vec![MailField::new("Name", "Ada"), MailField::new("Message", "Hi")],
/// );
/// assert_eq!(message.body(), "Name: Ada\nMessage: Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    subject: String,
    fields: Vec<MailField>,
}

impl MailMessage {
    /// Build a message from a subject and its ordered body fields.
    pub fn new(subject: impl Into<String>, fields: Vec<MailField>) -> Self {
        Self {
            subject: subject.into(),
            fields,
        }
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Body fields in submission order.
    pub fn fields(&self) -> &[MailField] {
        &self.fields
    }

    /// Plain-text body: `label: value` lines joined by `\n`.
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
