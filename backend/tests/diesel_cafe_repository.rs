//! Integration tests for `DieselCafeRepository` against a temporary SQLite
//! file.
//!
//! Each test migrates a fresh database, seeds it through plain SQL and then
//! talks to it only through the `CafeRepository` port. Curated files that
//! already hold the table are covered as well, since rows arrive out-of-band.

use std::sync::Arc;

use cafe_directory::domain::CafeDirectory;
use cafe_directory::domain::ports::CafeRepository;
use cafe_directory::outbound::persistence::{
    DbPool, DieselCafeRepository, PoolConfig, run_pending_migrations,
};
use diesel::prelude::*;
use rstest::{fixture, rstest};

mod support;

use support::{SeedCafe, SeededDatabase, seeded_database};

#[fixture]
fn seeds() -> [SeedCafe; 3] {
    [
        SeedCafe::new("Sunny Spot", "Hackney"),
        SeedCafe {
            has_wifi: false,
            coffee_price: None,
            ..SeedCafe::new("Bean There", "Peckham")
        },
        SeedCafe::new("Grind", "Soho"),
    ]
}

async fn repository(database: &SeededDatabase) -> DieselCafeRepository {
    let pool = DbPool::new(PoolConfig::new(database.path()))
        .await
        .expect("pool builds");
    DieselCafeRepository::new(pool)
}

#[rstest]
#[tokio::test]
async fn load_all_returns_rows_in_id_order(seeds: [SeedCafe; 3]) {
    let database = seeded_database(&seeds).await;
    let repo = repository(&database).await;

    let cafes = repo.load_all().await.expect("load succeeds");
    let summary: Vec<_> = cafes
        .iter()
        .map(|cafe| (cafe.id, cafe.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        [(1, "Sunny Spot"), (2, "Bean There"), (3, "Grind")]
    );

    let bean_there = cafes.get(1).expect("second café");
    assert_eq!(bean_there.location, "Peckham");
    assert!(!bean_there.has_wifi);
    assert!(bean_there.has_toilet);
    assert!(!bean_there.can_take_calls);
    assert_eq!(bean_there.coffee_price, None);
}

#[tokio::test]
async fn empty_table_loads_no_cafes() {
    let database = seeded_database(&[]).await;
    let repo = repository(&database).await;
    assert!(repo.load_all().await.expect("load succeeds").is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_reports_whether_a_row_went(seeds: [SeedCafe; 3]) {
    let database = seeded_database(&seeds).await;
    let repo = repository(&database).await;

    assert!(repo.delete(2).await.expect("first delete"));
    assert!(!repo.delete(2).await.expect("repeat delete"));
    assert!(!repo.delete(99).await.expect("unknown id"));
    assert_eq!(database.row_count(), 2);

    let names: Vec<_> = repo
        .load_all()
        .await
        .expect("reload")
        .into_iter()
        .map(|cafe| cafe.name)
        .collect();
    assert_eq!(names, ["Sunny Spot", "Grind"]);
}

#[rstest]
#[tokio::test]
async fn directory_removal_reaches_storage(seeds: [SeedCafe; 3]) {
    let database = seeded_database(&seeds).await;
    let directory = CafeDirectory::load(Arc::new(repository(&database).await))
        .await
        .expect("snapshot loads");

    assert!(directory.remove(1).await.expect("remove"));
    assert!(directory.find_by_id(1).is_none());
    assert_eq!(directory.all().len(), 2);
    assert_eq!(database.row_count(), 2);
}

#[rstest]
#[tokio::test]
async fn migrations_are_idempotent(seeds: [SeedCafe; 3]) {
    let database = seeded_database(&seeds).await;
    run_pending_migrations(database.path())
        .await
        .expect("second run is a no-op");
    assert_eq!(database.row_count(), 3);
}

#[tokio::test]
async fn migrations_adopt_a_curated_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cafes.db").to_string_lossy().into_owned();
    {
        let mut conn = SqliteConnection::establish(&path).expect("open curated file");
        diesel::sql_query(
            "CREATE TABLE cafes (\
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, \
                name VARCHAR(250) NOT NULL UNIQUE, \
                map_url VARCHAR(500) NOT NULL, \
                img_url VARCHAR(500) NOT NULL, \
                location VARCHAR(250) NOT NULL, \
                seats VARCHAR(250) NOT NULL, \
                has_toilet BOOLEAN NOT NULL, \
                has_wifi BOOLEAN NOT NULL, \
                has_sockets BOOLEAN NOT NULL, \
                can_take_calls BOOLEAN NOT NULL, \
                coffee_price VARCHAR(250))",
        )
        .execute(&mut conn)
        .expect("create table by hand");
        diesel::sql_query(
            "INSERT INTO cafes \
                (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
                VALUES ('Curated Corner', 'https://maps.example.com/?q=cc', 'https://img.example.com/cc.jpg', \
                'Bermondsey', '10-20', 1, 1, 0, 1, '£3.00')",
        )
        .execute(&mut conn)
        .expect("insert curated row");
    }

    run_pending_migrations(&path)
        .await
        .expect("existing table is adopted");

    let pool = DbPool::new(PoolConfig::new(path.as_str()))
        .await
        .expect("pool builds");
    let cafes = DieselCafeRepository::new(pool)
        .load_all()
        .await
        .expect("load succeeds");
    let summary: Vec<_> = cafes
        .iter()
        .map(|cafe| (cafe.id, cafe.name.as_str(), cafe.coffee_price.as_deref()))
        .collect();
    assert_eq!(summary, [(1, "Curated Corner", Some("£3.00"))]);
}
