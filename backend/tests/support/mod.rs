//! Shared fixtures for integration tests: a migrated SQLite file seeded with
//! cafés.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Nullable, Text};
use tempfile::TempDir;

use cafe_directory::outbound::persistence::run_pending_migrations;

const INSERT_CAFE: &str = "INSERT INTO cafes \
    (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Row inserted by [`seeded_database`]; unlisted columns get fixed values.
#[derive(Debug, Clone, Copy)]
pub struct SeedCafe {
    pub name: &'static str,
    pub location: &'static str,
    pub has_wifi: bool,
    pub coffee_price: Option<&'static str>,
}

impl SeedCafe {
    pub const fn new(name: &'static str, location: &'static str) -> Self {
        Self {
            name,
            location,
            has_wifi: true,
            coffee_price: Some("£2.50"),
        }
    }
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Temporary database file removed on drop.
pub struct SeededDatabase {
    _dir: TempDir,
    path: String,
}

impl SeededDatabase {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rows currently stored, read through a fresh connection.
    pub fn row_count(&self) -> i64 {
        let mut conn = SqliteConnection::establish(&self.path).expect("open database");
        diesel::sql_query("SELECT COUNT(*) AS count FROM cafes")
            .get_result::<CountRow>(&mut conn)
            .expect("count rows")
            .count
    }
}

/// Create, migrate and seed a database; ids follow slice order from 1.
pub async fn seeded_database(cafes: &[SeedCafe]) -> SeededDatabase {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cafes.db").to_string_lossy().into_owned();
    run_pending_migrations(&path).await.expect("migrations apply");

    let mut conn = SqliteConnection::establish(&path).expect("open seeded database");
    for cafe in cafes {
        diesel::sql_query(INSERT_CAFE)
            .bind::<Text, _>(cafe.name)
            .bind::<Text, _>(format!("https://maps.example.com/?q={}", cafe.name))
            .bind::<Text, _>("https://img.example.com/cafe.jpg")
            .bind::<Text, _>(cafe.location)
            .bind::<Text, _>("20-30")
            .bind::<Bool, _>(true)
            .bind::<Bool, _>(cafe.has_wifi)
            .bind::<Bool, _>(true)
            .bind::<Bool, _>(false)
            .bind::<Nullable<Text>, _>(cafe.coffee_price)
            .execute(&mut conn)
            .expect("insert café");
    }
    SeededDatabase { _dir: dir, path }
}
