//! Form bodies for the contact and suggestion pages.
//!
//! Every field defaults to an empty string so a missing key surfaces as a
//! field error rather than a `400` from the extractor. The raw form is kept
//! around after a failed validation so the page can be re-rendered with what
//! the visitor typed.

use serde::{Deserialize, Serialize};

use crate::domain::{CafeSuggestion, ContactMessage};

use super::validation::{FieldErrors, FieldName};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const MESSAGE: FieldName = FieldName::new("message");
const MAP_URL: FieldName = FieldName::new("map_url");
const IMG_URL: FieldName = FieldName::new("img_url");
const LOCATION: FieldName = FieldName::new("location");
const SEATS: FieldName = FieldName::new("seats");
const COFFEE_PRICE: FieldName = FieldName::new("coffee_price");
const HAS_SOCKETS: FieldName = FieldName::new("has_sockets");
const HAS_WIFI: FieldName = FieldName::new("has_wifi");
const HAS_TOILET: FieldName = FieldName::new("has_toilet");
const CAN_TAKE_CALLS: FieldName = FieldName::new("can_take_calls");

/// Raw contact form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field and build the message to relay.
    ///
    /// # Errors
    /// Returns every blank field.
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.require(NAME, &self.name);
        let email = errors.require(EMAIL, &self.email);
        let message = errors.require(MESSAGE, &self.message);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ContactMessage {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw "suggest a café" form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SuggestionForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub coffee_price: String,
    pub has_sockets: String,
    pub has_wifi: String,
    pub has_toilet: String,
    pub can_take_calls: String,
}

impl SuggestionForm {
    /// Check every field and build the suggestion to relay.
    ///
    /// # Errors
    /// Returns every blank field, malformed link and unknown choice.
    pub fn validate(&self) -> Result<CafeSuggestion, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.require(NAME, &self.name);
        let map_url = errors.require_url(MAP_URL, &self.map_url);
        let img_url = errors.require_url(IMG_URL, &self.img_url);
        let location = errors.require(LOCATION, &self.location);
        let seats = errors.require(SEATS, &self.seats);
        let coffee_price = errors.require(COFFEE_PRICE, &self.coffee_price);
        let has_sockets = errors.require_choice(HAS_SOCKETS, &self.has_sockets);
        let has_wifi = errors.require_choice(HAS_WIFI, &self.has_wifi);
        let has_toilet = errors.require_choice(HAS_TOILET, &self.has_toilet);
        let can_take_calls = errors.require_choice(CAN_TAKE_CALLS, &self.can_take_calls);

        let text = (name, map_url, img_url, location, seats, coffee_price);
        let choices = (has_sockets, has_wifi, has_toilet, can_take_calls);
        match (text, choices) {
            (
                (
                    Some(name),
                    Some(map_url),
                    Some(img_url),
                    Some(location),
                    Some(seats),
                    Some(coffee_price),
                ),
                (Some(has_sockets), Some(has_wifi), Some(has_toilet), Some(can_take_calls)),
            ) if errors.is_empty() => Ok(CafeSuggestion {
                name,
                map_url,
                img_url,
                location,
                seats,
                coffee_price,
                has_sockets,
                has_wifi,
                has_toilet,
                can_take_calls,
            }),
            _ => Err(errors),
        }
    }
}
