// Postgres persistence for claims.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fakeorfact_common::Claim;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::store::{check_lengths, ClaimStore, StoredClaim, PAGE_LIMIT};

/// A row from the claim table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClaimRow {
    id: Uuid,
    title: String,
    publisher_name: String,
    url: String,
    is_fact: bool,
    reviewed_at: DateTime<Utc>,
}

impl ClaimRow {
    fn into_stored(self) -> Result<StoredClaim> {
        let claim = Claim::new(
            self.title,
            self.publisher_name,
            self.url,
            self.is_fact,
            Some(self.reviewed_at),
        )?;
        Ok(StoredClaim { id: self.id, claim })
    }
}

#[derive(Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded SQL migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn find_by_url(&self, url: &str) -> Result<ClaimRow> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, title, publisher_name, url, is_fact, reviewed_at
            FROM claim
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    /// Compare-and-insert on the unique url column, so concurrent passes
    /// can't both store the same claim.
    async fn save(&self, claim: &Claim) -> Result<StoredClaim> {
        check_lengths(claim)?;

        let inserted = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claim (id, title, publisher_name, url, is_fact, reviewed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (url) DO NOTHING
            RETURNING id, title, publisher_name, url, is_fact, reviewed_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(claim.title())
        .bind(claim.publisher_name())
        .bind(claim.url())
        .bind(claim.is_fact())
        .bind(claim.reviewed_at())
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(row) => {
                debug!(id = %row.id, url = %row.url, "Stored claim");
                row.into_stored()
            }
            None => {
                let existing = self.find_by_url(claim.url()).await?.into_stored()?;
                Err(StoreError::DuplicateUrl(Box::new(existing)))
            }
        }
    }

    async fn get(&self, is_fact: bool, reviewed_before: DateTime<Utc>) -> Result<Vec<Claim>> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, title, publisher_name, url, is_fact, reviewed_at
            FROM claim
            WHERE is_fact = $1
              AND reviewed_at < $2
            ORDER BY reviewed_at DESC
            LIMIT $3
            "#,
        )
        .bind(is_fact)
        .bind(reviewed_before)
        .bind(PAGE_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_stored().map(|stored| stored.claim))
            .collect()
    }
}
