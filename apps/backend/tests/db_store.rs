//! Postgres word store tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running with `--ignored`.

mod common;

use palavras_backend::db::Database;
use palavras_backend::store::WordStore;
use palavras_core::{NewWord, WordPatch};

use common::fixtures;

async fn connect() -> Database {
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    db.run_migrations().await.expect("Failed to run migrations");
    db
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_crud_round_trip() {
    let db = connect().await;

    let word = db
        .create(NewWord {
            portuguese: "casa".to_string(),
            french: "maison".to_string(),
            examples: vec!["A casa é grande.".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(db.get(&word.id).await.unwrap(), Some(word.clone()));

    let examples: Vec<String> = sqlx::query_scalar("SELECT examples FROM words WHERE id = $1")
        .bind(&word.id)
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(examples, vec!["A casa é grande."]);

    let patch = WordPatch {
        french: Some("la maison".to_string()),
        ..Default::default()
    };
    let updated = db.update(&word.id, patch).await.unwrap();
    assert_eq!(updated.french, "la maison");
    assert!(updated.updated_at >= word.updated_at);
    assert!(db
        .feed()
        .snapshot()
        .words
        .iter()
        .any(|w| w.french == "la maison"));

    db.delete(&word.id).await.unwrap();
    assert_eq!(db.get(&word.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_replace_all() {
    let db = connect().await;
    let words = fixtures::vocabulary();

    db.replace_all(words.clone()).await.unwrap();

    let mut expected = words;
    expected.reverse();
    let listed: Vec<_> = db
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|w| w.id.starts_with('w'))
        .collect();
    assert_eq!(listed, expected);
}
