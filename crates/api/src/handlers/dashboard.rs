//! Handler for the campaign dashboard statistics.

use axum::extract::State;
use axum::Json;
use campaign_core::dashboard::month_label;
use campaign_db::models::dashboard::{PlatformBudget, PlatformCount, StatusCount};
use campaign_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// One point of the monthly creation trend, e.g. `{"month": "Jan 2025", "count": 3}`.
#[derive(Debug, Serialize)]
pub struct MonthlyTrendItem {
    pub month: String,
    pub count: i64,
}

/// Response body of `GET /api/dashboard/`.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_campaigns: i64,
    pub total_budget: f64,
    pub avg_budget: f64,
    pub status_breakdown: Vec<StatusCount>,
    pub platform_breakdown: Vec<PlatformCount>,
    pub budget_by_platform: Vec<PlatformBudget>,
    pub monthly_trend: Vec<MonthlyTrendItem>,
}

/// GET /api/dashboard/
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let pool = &state.pool;
    let totals = DashboardRepo::totals(pool).await?;
    let status_breakdown = DashboardRepo::status_breakdown(pool).await?;
    let platform_breakdown = DashboardRepo::platform_breakdown(pool).await?;
    let budget_by_platform = DashboardRepo::budget_by_platform(pool).await?;

    let monthly_trend = DashboardRepo::monthly_trend(pool)
        .await?
        .into_iter()
        .map(|m| MonthlyTrendItem {
            month: month_label(m.month),
            count: m.count,
        })
        .collect();

    Ok(Json(DashboardStats {
        total_campaigns: totals.total_campaigns,
        total_budget: totals.total_budget,
        avg_budget: totals.avg_budget,
        status_breakdown,
        platform_breakdown,
        budget_by_platform,
        monthly_trend,
    }))
}
