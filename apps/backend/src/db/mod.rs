//! PostgreSQL word store

use async_trait::async_trait;
use palavras_core::{NewWord, Word, WordPatch};
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};

use crate::error::{ApiError, Result};
use crate::models::DbWord;
use crate::store::{new_word_id, next_updated_at, now_ms, WordFeed, WordStore};

/// Database wrapper with connection pool
pub struct Database {
    pool: PgPool,
    feed: WordFeed,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self {
            pool,
            feed: WordFeed::new(),
        })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Reload the list and push it to subscribers.
    ///
    /// A failed reload leaves subscribers with the last list and an error.
    pub async fn refresh(&self) {
        match self.list().await {
            Ok(words) => self.feed.publish(words),
            Err(e) => self.feed.fail(e.to_string()),
        }
    }

    async fn fetch_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: &str,
    ) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, portuguese, french, examples, created_at, updated_at
            FROM words
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(word)
    }

    async fn insert(tx: &mut Transaction<'_, Postgres>, word: &Word) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO words (id, portuguese, french, examples, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&word.id)
        .bind(&word.portuguese)
        .bind(&word.french)
        .bind(&word.examples)
        .bind(word.created_at)
        .bind(word.updated_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl WordStore for Database {
    async fn list(&self) -> Result<Vec<Word>> {
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, portuguese, french, examples, created_at, updated_at
            FROM words
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(words.into_iter().map(DbWord::into_word).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Word>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, portuguese, french, examples, created_at, updated_at
            FROM words
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word.map(DbWord::into_word))
    }

    async fn create(&self, word: NewWord) -> Result<Word> {
        word.validate()?;
        let word = word.into_word(new_word_id(), now_ms());

        let mut tx = self.pool.begin().await?;
        Self::insert(&mut tx, &word).await?;
        tx.commit().await?;

        self.refresh().await;
        Ok(word)
    }

    async fn update(&self, id: &str, patch: WordPatch) -> Result<Word> {
        patch.validate()?;

        let mut tx = self.pool.begin().await?;
        let mut word = Self::fetch_for_update(&mut tx, id)
            .await?
            .map(DbWord::into_word)
            .ok_or_else(|| ApiError::NotFound(format!("Word {id}")))?;
        word.apply(patch);
        word.updated_at = next_updated_at(word.updated_at);

        sqlx::query(
            r#"
            UPDATE words
            SET portuguese = $2, french = $3, examples = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(&word.id)
        .bind(&word.portuguese)
        .bind(&word.french)
        .bind(&word.examples)
        .bind(word.updated_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        self.refresh().await;
        Ok(word)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Word {id}")));
        }

        self.refresh().await;
        Ok(())
    }

    async fn replace_all(&self, words: Vec<Word>) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM words").execute(&mut *tx).await?;
        for word in &words {
            Self::insert(&mut tx, word).await?;
        }
        tx.commit().await?;

        tracing::info!(count = words.len(), "Replaced word list");
        self.refresh().await;
        Ok(())
    }

    fn feed(&self) -> &WordFeed {
        &self.feed
    }
}
