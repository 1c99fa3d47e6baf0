//! Handlers for the `/campaigns` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campaign_core::campaign::{CampaignStatus, Platform};
use campaign_core::error::CoreError;
use campaign_core::types::DbId;
use campaign_db::models::campaign::{Campaign, CampaignFilter, CreateCampaign, UpdateCampaign};
use campaign_db::repositories::CampaignRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams, QueryParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campaign",
        id,
    })
}

/// A selectable value with its display label.
#[derive(Debug, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Response body of `GET /api/campaigns/choices/`.
#[derive(Debug, Serialize)]
pub struct CampaignChoices {
    pub platforms: Vec<Choice>,
    pub statuses: Vec<Choice>,
}

/// GET /api/campaigns/choices/
pub async fn choices() -> Json<CampaignChoices> {
    Json(CampaignChoices {
        platforms: Platform::ALL
            .iter()
            .map(|p| Choice {
                value: p.as_str(),
                label: p.label(),
            })
            .collect(),
        statuses: CampaignStatus::ALL
            .iter()
            .map(|s| Choice {
                value: s.as_str(),
                label: s.label(),
            })
            .collect(),
    })
}

/// POST /api/campaigns/
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCampaign>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    input.validate()?;
    let campaign = CampaignRepo::create(&state.pool, &input).await?;
    tracing::info!(campaign_id = campaign.id, platform = %campaign.platform, "Campaign created");
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /api/campaigns/?platform=&status=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<CampaignFilter>,
) -> AppResult<Json<Vec<Campaign>>> {
    let campaigns = CampaignRepo::list(&state.pool, &filter).await?;
    Ok(Json(campaigns))
}

/// GET /api/campaigns/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(campaign))
}

/// PUT /api/campaigns/{id}/
///
/// `title` is required; other omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<UpdateCampaign>,
) -> AppResult<Json<Campaign>> {
    apply_update(&state, id, &input, false).await.map(Json)
}

/// PATCH /api/campaigns/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<UpdateCampaign>,
) -> AppResult<Json<Campaign>> {
    apply_update(&state, id, &input, true).await.map(Json)
}

/// DELETE /api/campaigns/{id}/
pub async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    if CampaignRepo::delete(&state.pool, id).await? {
        tracing::info!(campaign_id = id, "Campaign deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

async fn apply_update(
    state: &AppState,
    id: DbId,
    input: &UpdateCampaign,
    partial: bool,
) -> AppResult<Campaign> {
    input.validate(partial)?;
    let campaign = CampaignRepo::update(&state.pool, id, input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(campaign_id = id, partial, "Campaign updated");
    Ok(campaign)
}
