//! Read-only aggregate queries over `campaigns` for the dashboard.

use sqlx::PgPool;

use crate::models::dashboard::{
    CampaignTotals, MonthCount, PlatformBudget, PlatformCount, StatusCount,
};

/// Provides the dashboard statistics queries. None of them filter; every
/// query covers the whole table.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count, budget sum and budget average. Sum and average are `0` when
    /// the table is empty.
    pub async fn totals(pool: &PgPool) -> Result<CampaignTotals, sqlx::Error> {
        sqlx::query_as::<_, CampaignTotals>(
            "SELECT COUNT(*) AS total_campaigns,
                    COALESCE(SUM(budget), 0)::DOUBLE PRECISION AS total_budget,
                    COALESCE(AVG(budget), 0)::DOUBLE PRECISION AS avg_budget
             FROM campaigns",
        )
        .fetch_one(pool)
        .await
    }

    /// Campaign count per status, ordered by status name.
    pub async fn status_breakdown(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM campaigns
             GROUP BY status
             ORDER BY status ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Campaign count per platform, most used first.
    pub async fn platform_breakdown(pool: &PgPool) -> Result<Vec<PlatformCount>, sqlx::Error> {
        sqlx::query_as::<_, PlatformCount>(
            "SELECT platform, COUNT(*) AS count
             FROM campaigns
             GROUP BY platform
             ORDER BY count DESC, platform ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Summed budget per platform, largest first.
    pub async fn budget_by_platform(pool: &PgPool) -> Result<Vec<PlatformBudget>, sqlx::Error> {
        sqlx::query_as::<_, PlatformBudget>(
            "SELECT platform, SUM(budget)::DOUBLE PRECISION AS total_budget
             FROM campaigns
             GROUP BY platform
             ORDER BY SUM(budget) DESC, platform ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Campaigns created per calendar month (UTC), oldest month first.
    pub async fn monthly_trend(pool: &PgPool) -> Result<Vec<MonthCount>, sqlx::Error> {
        sqlx::query_as::<_, MonthCount>(
            "SELECT date_trunc('month', created_at AT TIME ZONE 'UTC')::DATE AS month,
                    COUNT(*) AS count
             FROM campaigns
             GROUP BY 1
             ORDER BY 1 ASC",
        )
        .fetch_all(pool)
        .await
    }
}
