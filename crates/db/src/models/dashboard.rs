//! Row types for the dashboard aggregate queries.
//!
//! Monetary aggregates are cast to `DOUBLE PRECISION` in SQL so they
//! serialize as plain JSON numbers.

use campaign_core::types::Date;
use serde::Serialize;
use sqlx::FromRow;

/// Whole-table totals. All zero on an empty table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignTotals {
    pub total_campaigns: i64,
    pub total_budget: f64,
    pub avg_budget: f64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlatformBudget {
    pub platform: String,
    pub total_budget: f64,
}

/// Campaigns created in one calendar month (UTC). `month` is the first day.
#[derive(Debug, Clone, FromRow)]
pub struct MonthCount {
    pub month: Date,
    pub count: i64,
}
