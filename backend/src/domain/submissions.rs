//! Validated visitor submissions and their notification layout.
//!
//! Neither submission is persisted: each exists for one request and is
//! consumed by the mail relay.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{MailField, MailMessage};

/// A validated contact-form message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address, as typed.
    pub email: String,
    /// Free-text message.
    pub message: String,
}

impl ContactMessage {
    /// Subject line of contact notifications.
    pub const SUBJECT: &'static str = "New Message";

    /// Notification relayed to the site mailbox.
    pub fn to_mail(&self) -> MailMessage {
        MailMessage::new(
            Self::SUBJECT,
            vec![
                MailField::new("Name", self.name.as_str()),
                MailField::new("Email address", self.email.as_str()),
                MailField::new("Message", self.message.as_str()),
            ],
        )
    }
}

/// Answer to a yes/no amenity question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    /// The amenity is available.
    Yes,
    /// The amenity is not available.
    No,
}

impl Availability {
    /// Accepted form values, in display order.
    pub const CHOICES: [&'static str; 2] = ["Yes", "No"];

    /// Form value for this answer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a value is not one of [`Availability::CHOICES`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of Yes, No; got {0:?}")]
pub struct UnknownAvailability(pub String);

impl FromStr for Availability {
    type Err = UnknownAvailability;

    /// Exact, case-sensitive match.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(UnknownAvailability(other.to_owned())),
        }
    }
}

/// A validated "suggest a café" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeSuggestion {
    /// Venue name.
    pub name: String,
    /// Well-formed map link, as typed.
    pub map_url: String,
    /// Well-formed picture link, as typed.
    pub img_url: String,
    /// Neighbourhood or area.
    pub location: String,
    /// Free-text seat count.
    pub seats: String,
    /// Typical coffee price.
    pub coffee_price: String,
    /// Power sockets.
    pub has_sockets: Availability,
    /// Wi-Fi.
    pub has_wifi: Availability,
    /// Toilet.
    pub has_toilet: Availability,
    /// Phone calls acceptable.
    pub can_take_calls: Availability,
}

impl CafeSuggestion {
    /// Subject line of suggestion notifications.
    pub const SUBJECT: &'static str = "Cafe Suggestion";

    /// Notification relayed to the site mailbox.
    pub fn to_mail(&self) -> MailMessage {
        MailMessage::new(
            Self::SUBJECT,
            vec![
                MailField::new("Name", self.name.as_str()),
                MailField::new("Map", self.map_url.as_str()),
                MailField::new("Location", self.location.as_str()),
                MailField::new("Image", self.img_url.as_str()),
                MailField::new("Seats", self.seats.as_str()),
                MailField::new("Ave. Coffee Price", self.coffee_price.as_str()),
                MailField::new("Socket Availability", self.has_sockets.as_str()),
                MailField::new("Wi-Fi Availability", self.has_wifi.as_str()),
                MailField::new("Toilet Availability", self.has_toilet.as_str()),
                MailField::new("Calls Availability", self.can_take_calls.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Yes", Ok(Availability::Yes))]
    #[case("No", Ok(Availability::No))]
    #[case("yes", Err(UnknownAvailability("yes".to_owned())))]
    #[case("Maybe", Err(UnknownAvailability("Maybe".to_owned())))]
    #[case("", Err(UnknownAvailability(String::new())))]
    fn availability_parses_exact_choices(
        #[case] raw: &str,
        #[case] expected: Result<Availability, UnknownAvailability>,
    ) {
        assert_eq!(raw.parse::<Availability>(), expected);
    }

    #[rstest]
    fn contact_mail_lists_fields_in_order() {
        let message = ContactMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Love the list".to_owned(),
        };
        let mail = message.to_mail();
        assert_eq!(mail.subject(), "New Message");
        assert_eq!(
            mail.body(),
            "Name: Ada\nEmail address: ada@example.com\nMessage: Love the list"
        );
    }

    #[rstest]
    fn suggestion_mail_lists_all_ten_fields() {
        let suggestion = CafeSuggestion {
            name: "Sunny Spot".to_owned(),
            map_url: "https://maps.example.com/sunny".to_owned(),
            img_url: "https://img.example.com/sunny.jpg".to_owned(),
            location: "Hackney".to_owned(),
            seats: "10-20".to_owned(),
            coffee_price: "£2.80".to_owned(),
            has_sockets: Availability::Yes,
            has_wifi: Availability::No,
            has_toilet: Availability::Yes,
            can_take_calls: Availability::No,
        };
        let mail = suggestion.to_mail();
        assert_eq!(mail.subject(), "Cafe Suggestion");
        assert_eq!(mail.fields().len(), 10);
        let labels: Vec<_> = mail.fields().iter().map(|field| field.label).collect();
        assert_eq!(
            labels,
            [
                "Name",
                "Map",
                "Location",
                "Image",
                "Seats",
                "Ave. Coffee Price",
                "Socket Availability",
                "Wi-Fi Availability",
                "Toilet Availability",
                "Calls Availability",
            ]
        );
        assert!(mail.body().contains("Map: https://maps.example.com/sunny"));
        assert!(mail.body().contains("Wi-Fi Availability: No"));
    }
}
