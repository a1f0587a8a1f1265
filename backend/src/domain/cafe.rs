//! Café directory entries.
//!
//! A [`Cafe`] is a plain value: it carries no persistence behaviour. Rows are
//! loaded through [`crate::domain::ports::CafeRepository`] and served from the
//! in-memory [`crate::domain::CafeDirectory`].

use serde::Serialize;

/// Store-assigned café identifier.
///
/// Identifiers are immutable once assigned and never reused.
pub type CafeId = i32;

/// One venue in the directory together with its amenities.
///
/// Serialises with snake_case keys matching the `cafes` table columns, which
/// is also the shape page templates consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cafe {
    /// Unique identifier assigned by the store.
    pub id: CafeId,
    /// Unique venue name.
    pub name: String,
    /// Link to the venue on a map service.
    pub map_url: String,
    /// Link to a picture of the venue.
    pub img_url: String,
    /// Neighbourhood or area.
    pub location: String,
    /// Free-text seat count, e.g. `20-30`.
    pub seats: String,
    /// Whether customers can use a toilet.
    pub has_toilet: bool,
    /// Whether Wi-Fi is available.
    pub has_wifi: bool,
    /// Whether power sockets are available.
    pub has_sockets: bool,
    /// Whether phone calls are acceptable.
    pub can_take_calls: bool,
    /// Typical price of a coffee, when known.
    pub coffee_price: Option<String>,
}
