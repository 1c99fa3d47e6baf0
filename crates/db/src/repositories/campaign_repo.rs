//! Repository for the `campaigns` table.

use campaign_core::campaign::{default_budget, DEFAULT_PLATFORM, DEFAULT_STATUS};
use campaign_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{
    supplied, Campaign, CampaignFilter, CreateCampaign, Nullable, UpdateCampaign,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, platform, status, budget, target_audience, \
                       content, scheduled_date, tags, created_at, updated_at";

/// Provides CRUD operations for campaigns.
///
/// Inputs are expected to have passed `CreateCampaign::validate` /
/// `UpdateCampaign::validate`; the table's CHECK constraints reject anything
/// that slips through.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign, returning the created row.
    ///
    /// Omitted fields take their defaults: platform `instagram`, status
    /// `draft`, budget `0.00`, empty text, no scheduled date.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (title, description, platform, status, budget,
                 target_audience, content, scheduled_date, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(text_or(&input.title, ""))
            .bind(text_or(&input.description, ""))
            .bind(text_or(&input.platform, DEFAULT_PLATFORM))
            .bind(text_or(&input.status, DEFAULT_STATUS))
            .bind(supplied(&input.budget).copied().unwrap_or_else(default_budget))
            .bind(text_or(&input.target_audience, ""))
            .bind(text_or(&input.content, ""))
            .bind(input.scheduled_date)
            .bind(text_or(&input.tags, ""))
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List campaigns matching every supplied filter, newest first.
    pub async fn list(pool: &PgPool, filter: &CampaignFilter) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns
             WHERE ($1::TEXT IS NULL OR platform = $1)
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(filter.platform())
            .bind(filter.status())
            .fetch_all(pool)
            .await
    }

    /// Update a campaign. Only supplied, non-null fields in `input` are
    /// applied; `scheduled_date: Some(None)` clears the date.
    ///
    /// `updated_at` always moves forward, even for two updates inside the
    /// same clock tick. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                platform = COALESCE($4, platform),
                status = COALESCE($5, status),
                budget = COALESCE($6, budget),
                target_audience = COALESCE($7, target_audience),
                content = COALESCE($8, content),
                scheduled_date = CASE WHEN $9 THEN $10 ELSE scheduled_date END,
                tags = COALESCE($11, tags),
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(text(&input.title))
            .bind(text(&input.description))
            .bind(text(&input.platform))
            .bind(text(&input.status))
            .bind(supplied(&input.budget).copied())
            .bind(text(&input.target_audience))
            .bind(text(&input.content))
            .bind(input.scheduled_date.is_some())
            .bind(input.scheduled_date.flatten())
            .bind(text(&input.tags))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a campaign by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn text(field: &Nullable<String>) -> Option<&str> {
    supplied(field).map(String::as_str)
}

fn text_or<'a>(field: &'a Nullable<String>, default: &'a str) -> &'a str {
    text(field).unwrap_or(default)
}
