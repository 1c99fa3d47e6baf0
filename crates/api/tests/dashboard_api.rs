//! HTTP-level integration tests for `GET /api/dashboard/`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_campaign, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_store_returns_zeros(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "total_campaigns": 0,
            "total_budget": 0.0,
            "avg_budget": 0.0,
            "status_breakdown": [],
            "platform_breakdown": [],
            "budget_by_platform": [],
            "monthly_trend": []
        })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_aggregate_every_campaign(pool: PgPool) {
    for (platform, status, budget) in [
        ("tiktok", "active", "100.00"),
        ("tiktok", "draft", "50.00"),
        ("instagram", "active", "400.00"),
        ("youtube", "completed", "25.50"),
    ] {
        create_campaign(
            &pool,
            json!({"title": "Seed", "platform": platform, "status": status, "budget": budget}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/dashboard").await).await;

    assert_eq!(json["total_campaigns"], 4);
    assert_eq!(json["total_budget"], 575.5);
    assert_eq!(json["avg_budget"], 143.875);

    assert_eq!(
        json["status_breakdown"],
        json!([
            {"status": "active", "count": 2},
            {"status": "completed", "count": 1},
            {"status": "draft", "count": 1}
        ])
    );
    assert_eq!(
        json["platform_breakdown"],
        json!([
            {"platform": "tiktok", "count": 2},
            {"platform": "instagram", "count": 1},
            {"platform": "youtube", "count": 1}
        ])
    );
    assert_eq!(
        json["budget_by_platform"],
        json!([
            {"platform": "instagram", "total_budget": 400.0},
            {"platform": "tiktok", "total_budget": 150.0},
            {"platform": "youtube", "total_budget": 25.5}
        ])
    );

    let trend = json["monthly_trend"].as_array().unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0]["count"], 4);
    let expected_label = chrono::Utc::now().format("%b %Y").to_string();
    assert_eq!(trend[0]["month"], expected_label);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn monthly_trend_is_chronological_with_labels(pool: PgPool) {
    let ids = [
        create_campaign(&pool, json!({"title": "Mar"})).await["id"].as_i64().unwrap(),
        create_campaign(&pool, json!({"title": "Dec"})).await["id"].as_i64().unwrap(),
        create_campaign(&pool, json!({"title": "Dec again"})).await["id"].as_i64().unwrap(),
    ];
    for (id, created_at) in ids.iter().zip([
        "2025-03-10T09:00:00Z",
        "2024-12-01T00:00:00Z",
        "2024-12-31T23:00:00Z",
    ]) {
        sqlx::query("UPDATE campaigns SET created_at = $2::TIMESTAMPTZ WHERE id = $1")
            .bind(id)
            .bind(created_at)
            .execute(&pool)
            .await
            .unwrap();
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/dashboard/").await).await;
    assert_eq!(
        json["monthly_trend"],
        json!([
            {"month": "Dec 2024", "count": 2},
            {"month": "Mar 2025", "count": 1}
        ])
    );
}
