//! Shared validation helpers for form submissions.
//!
//! Validation never stops at the first failure: every field is checked and
//! failures accumulate in [`FieldErrors`], which templates read as
//! `errors.<field>.message`.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::domain::Availability;

/// Validation error codes for form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// Required value is empty or blank.
    MissingField,
    /// Value is not an absolute `http`/`https` URL with a host.
    InvalidUrl,
    /// Value is not one of the offered choices.
    InvalidChoice,
}

/// Newtype wrapper for form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Machine-readable reason.
    pub code: FieldErrorCode,
    /// Message shown next to the field.
    pub message: String,
}

/// Every rejected field of one submission, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    /// Whether no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Rejected field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FieldName, code: FieldErrorCode, message: String) {
        self.0
            .entry(field.as_str())
            .or_insert(FieldError { code, message });
    }

    /// Value of a required field exactly as submitted, or `None` after
    /// recording [`FieldErrorCode::MissingField`] for a blank one.
    pub(crate) fn require(&mut self, field: FieldName, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            self.insert(
                field,
                FieldErrorCode::MissingField,
                "This field is required.".to_owned(),
            );
            return None;
        }
        Some(value.to_owned())
    }

    /// Required absolute `http`/`https` URL, returned as typed.
    pub(crate) fn require_url(&mut self, field: FieldName, value: &str) -> Option<String> {
        let value = self.require(field, value)?;
        if is_http_url(&value) {
            Some(value)
        } else {
            self.insert(field, FieldErrorCode::InvalidUrl, "Invalid URL.".to_owned());
            None
        }
    }

    /// Required `Yes`/`No` answer; matching is exact.
    pub(crate) fn require_choice(&mut self, field: FieldName, value: &str) -> Option<Availability> {
        match value.parse::<Availability>() {
            Ok(choice) => Some(choice),
            Err(_) => {
                self.insert(
                    field,
                    FieldErrorCode::InvalidChoice,
                    format!("Choose one of: {}.", Availability::CHOICES.join(", ")),
                );
                None
            }
        }
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https")
            && url.host_str().is_some_and(|host| !host.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("map_url");

    #[rstest]
    #[case("https://maps.example.com/sunny", true)]
    #[case("http://example.com", true)]
    #[case("  https://example.com/padded  ", true)]
    #[case("not-a-url", false)]
    #[case("ftp://example.com/file", false)]
    #[case("mailto:owner@example.com", false)]
    #[case("https://", false)]
    #[case("/relative/path", false)]
    fn urls_must_be_absolute_http(#[case] raw: &str, #[case] accepted: bool) {
        let mut errors = FieldErrors::default();
        let parsed = errors.require_url(FIELD, raw);
        assert_eq!(parsed.is_some(), accepted);
        assert_eq!(errors.is_empty(), accepted);
        if !accepted && !raw.trim().is_empty() {
            let error = errors.get("map_url").expect("map_url flagged");
            assert_eq!(error.code, FieldErrorCode::InvalidUrl);
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_values_are_missing(#[case] raw: &str) {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.require(FieldName::new("name"), raw), None);
        assert_eq!(
            errors.get("name").map(|error| error.code),
            Some(FieldErrorCode::MissingField)
        );
    }

    #[rstest]
    #[case("  Ada  ")]
    #[case("line one\nline two\n")]
    fn required_values_keep_surrounding_whitespace(#[case] raw: &str) {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.require(FieldName::new("name"), raw).as_deref(), Some(raw));
        assert!(errors.is_empty());
    }

    #[rstest]
    fn padded_url_is_accepted_verbatim() {
        let mut errors = FieldErrors::default();
        let raw = "  https://example.com/padded  ";
        assert_eq!(errors.require_url(FIELD, raw).as_deref(), Some(raw));
    }

    #[rstest]
    fn blank_url_reports_missing_not_invalid() {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.require_url(FIELD, ""), None);
        assert_eq!(
            errors.get("map_url").map(|error| error.code),
            Some(FieldErrorCode::MissingField)
        );
    }

    #[rstest]
    #[case("Yes", Some(Availability::Yes))]
    #[case("No", Some(Availability::No))]
    #[case("Maybe", None)]
    #[case("yes", None)]
    #[case("", None)]
    fn choices_match_exactly(#[case] raw: &str, #[case] expected: Option<Availability>) {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.require_choice(FieldName::new("has_wifi"), raw), expected);
        assert_eq!(errors.is_empty(), expected.is_some());
    }

    #[rstest]
    fn errors_serialise_as_field_map() {
        let mut errors = FieldErrors::default();
        errors.require(FieldName::new("email"), "");
        let value = serde_json::to_value(&errors).expect("serialise");
        assert_eq!(value["email"]["code"], "missing_field");
        assert_eq!(value["email"]["message"], "This field is required.");
    }
}
