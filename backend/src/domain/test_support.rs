//! Builders shared by unit tests across the crate.

use crate::domain::{Cafe, CafeId};

/// A fully populated café with predictable field values.
pub(crate) fn cafe(id: CafeId, name: &str) -> Cafe {
    Cafe {
        id,
        name: name.to_owned(),
        map_url: format!("https://maps.example.com/?q={id}"),
        img_url: format!("https://img.example.com/{id}.jpg"),
        location: "Shoreditch".to_owned(),
        seats: "20-30".to_owned(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: false,
        coffee_price: Some("£2.40".to_owned()),
    }
}
