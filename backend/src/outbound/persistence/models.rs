//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain.

use diesel::prelude::*;

use crate::domain::Cafe;

use super::schema::cafes;

/// Row struct for reading from the cafes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cafes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CafeRow {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<CafeRow> for Cafe {
    fn from(row: CafeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            map_url: row.map_url,
            img_url: row.img_url,
            location: row.location,
            seats: row.seats,
            has_toilet: row.has_toilet,
            has_wifi: row.has_wifi,
            has_sockets: row.has_sockets,
            can_take_calls: row.can_take_calls,
            coffee_price: row.coffee_price,
        }
    }
}
