mod common;

use axum::http::{header, StatusCode};
use sqlx::PgPool;

use common::{body_json, build_test_app, get, patch_json, post_json};

fn maintenance_payload(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "The gate hinge is rusted through and the gate no longer closes.",
        "category": category,
        "scheduled_date": "2030-06-15T09:00:00Z",
    })
}

async fn create_maintenance(pool: &PgPool, title: &str, category: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/maintenances",
        maintenance_payload(title, category),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn create_scheduled(pool: &PgPool, title: &str, scheduled_date: &str) -> serde_json::Value {
    let mut payload = maintenance_payload(title, "OTHERS");
    payload["scheduled_date"] = serde_json::json!(scheduled_date);
    let response = post_json(build_test_app(pool.clone()), "/api/v1/maintenances", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn set_status(pool: &PgPool, id: &str, status: &str) {
    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
        serde_json::json!({ "status": status }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn list_total(pool: &PgPool, query: &str) -> (serde_json::Value, i64) {
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances{query}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let total = body["total"].as_i64().unwrap();
    (body, total)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_created_with_location(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/maintenances",
        maintenance_payload("Fix the broken gate", "BUILDING"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap();

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["title"], "Fix the broken gate");
    assert_eq!(data["category"], "BUILDING");
    assert_eq!(data["status"], "OPEN");
    assert!(data["id"].is_string());
    assert!(data["created_at"].is_string());
    assert_eq!(
        location,
        format!("/api/v1/maintenances/{}", data["id"].as_str().unwrap())
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_aggregates_validation_failures(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/maintenances",
        serde_json::json!({
            "title": "abc",
            "description": "   ",
            "category": "ELECTRICAL",
            "scheduled_date": "2030-06-15T09:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(message.contains("description"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_and_unknown_id(pool: PgPool) {
    let created = create_maintenance(&pool, "Leaky kitchen faucet", "PLUMBING").await;
    let id = created["id"].as_str().unwrap();

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], "Leaky kitchen faucet");

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/maintenances/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_applies_field_rules(pool: PgPool) {
    let created = create_maintenance(&pool, "Hallway light flickers", "ELECTRICAL").await;
    let id = created["id"].as_str().unwrap();

    // Whitespace-only title is ignored; whitespace-only description is
    // written through; category is replaced.
    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
        serde_json::json!({
            "title": "      ",
            "description": "   ",
            "category": "SECURITY",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["title"], "Hallway light flickers");
    assert_eq!(data["description"], "   ");
    assert_eq!(data["category"], "SECURITY");
    assert_eq!(data["status"], "OPEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_without_status_leaves_status_untouched(pool: PgPool) {
    let created = create_maintenance(&pool, "Repaint the benches", "OTHERS").await;
    let id = created["id"].as_str().unwrap();
    set_status(&pool, id, "IN_PROGRESS").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
        serde_json::json!({ "title": "Repaint all the benches" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "IN_PROGRESS");
    assert_eq!(body["data"]["title"], "Repaint all the benches");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_cannot_revert_from_in_progress_to_open(pool: PgPool) {
    let created = create_maintenance(&pool, "Unclog storm drain", "PLUMBING").await;
    let id = created["id"].as_str().unwrap();
    set_status(&pool, id, "IN_PROGRESS").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
        serde_json::json!({ "status": "OPEN" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_TRANSITION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn terminal_maintenance_rejects_any_status_request(pool: PgPool) {
    let created = create_maintenance(&pool, "Replace window pane", "BUILDING").await;
    let id = created["id"].as_str().unwrap();
    set_status(&pool, id, "COMPLETED").await;

    // Even re-asserting the current terminal status is rejected.
    for requested in ["OPEN", "IN_PROGRESS", "COMPLETED"] {
        let response = patch_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/maintenances/{id}"),
            serde_json::json!({ "status": requested }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT, "requested {requested}");
    }

    // A detail-only patch with no status request still goes through.
    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/maintenances/{id}"),
        serde_json::json!({ "description": "Pane replaced with tempered glass." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "COMPLETED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_filter_variants(pool: PgPool) {
    let open = create_maintenance(&pool, "Open gate repair", "BUILDING").await;
    let in_progress = create_maintenance(&pool, "Wiring inspection", "ELECTRICAL").await;
    let completed = create_maintenance(&pool, "Sprinkler overhaul", "GARDENING").await;
    let canceled = create_maintenance(&pool, "Lobby camera swap", "SECURITY").await;
    set_status(&pool, in_progress["id"].as_str().unwrap(), "IN_PROGRESS").await;
    set_status(&pool, completed["id"].as_str().unwrap(), "COMPLETED").await;
    set_status(&pool, canceled["id"].as_str().unwrap(), "CANCELED").await;
    let open_id = open["id"].as_str().unwrap();

    // Absent, "all", empty, and unrecognised values do not filter at all.
    for query in ["", "?status=all", "?status=", "?status=bogus"] {
        let (_, total) = list_total(&pool, query).await;
        assert_eq!(total, 4, "query {query:?}");
    }

    let (_, total) = list_total(&pool, "?status=active").await;
    assert_eq!(total, 2);
    let (_, total) = list_total(&pool, "?status=inactive").await;
    assert_eq!(total, 2);

    // Exact match is case-insensitive.
    let (body, total) = list_total(&pool, "?status=open").await;
    assert_eq!(total, 1);
    assert_eq!(body["data"][0]["id"], open_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_filter_is_case_insensitive(pool: PgPool) {
    create_maintenance(&pool, "Wiring inspection", "ELECTRICAL").await;
    create_maintenance(&pool, "Repaint the benches", "OTHERS").await;

    for query in ["?category=ELECTRICAL", "?category=electrical"] {
        let (body, total) = list_total(&pool, query).await;
        assert_eq!(total, 1, "query {query:?}");
        assert_eq!(body["data"][0]["category"], "ELECTRICAL");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_title_description_and_category(pool: PgPool) {
    create_maintenance(&pool, "Broken Window on second floor", "BUILDING").await;
    create_maintenance(&pool, "Repaint the benches", "OTHERS").await;

    let (_, total) = list_total(&pool, "?search=window").await;
    assert_eq!(total, 1);

    // Description text matches too (shared by both seeded rows).
    let (_, total) = list_total(&pool, "?search=HINGE").await;
    assert_eq!(total, 2);

    let (_, total) = list_total(&pool, "?search=nothing-matches-this").await;
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scheduled_date_bounds_filter_the_listing(pool: PgPool) {
    create_scheduled(&pool, "Early request", "2030-01-10T09:00:00Z").await;
    create_scheduled(&pool, "Middle request", "2030-06-15T09:00:00Z").await;
    create_scheduled(&pool, "Late request", "2030-12-01T09:00:00Z").await;

    let (_, total) = list_total(&pool, "?scheduled_from=2030-03-01T00:00:00Z").await;
    assert_eq!(total, 2);

    let (body, total) = list_total(&pool, "?scheduled_to=2030-03-01T00:00:00Z").await;
    assert_eq!(total, 1);
    assert_eq!(body["data"][0]["title"], "Early request");

    let (body, total) = list_total(
        &pool,
        "?scheduled_from=2030-03-01T00:00:00Z&scheduled_to=2030-09-01T00:00:00Z",
    )
    .await;
    assert_eq!(total, 1);
    assert_eq!(body["data"][0]["title"], "Middle request");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_after_is_a_strict_bound(pool: PgPool) {
    let first = create_maintenance(&pool, "First request", "OTHERS").await;
    let second = create_maintenance(&pool, "Second request", "OTHERS").await;

    // Pin the creation times so the bound can sit exactly on the first row.
    for (row, created_at) in [
        (&first, "2030-01-01T00:00:00Z"),
        (&second, "2030-01-02T00:00:00Z"),
    ] {
        sqlx::query("UPDATE maintenance SET created_at = $1::timestamptz WHERE public_id = $2")
            .bind(created_at)
            .bind(uuid::Uuid::parse_str(row["id"].as_str().unwrap()).unwrap())
            .execute(&pool)
            .await
            .unwrap();
    }

    // A row created exactly at the bound is excluded.
    let (body, total) = list_total(&pool, "?created_after=2030-01-01T00:00:00Z").await;
    assert_eq!(total, 1);
    assert_eq!(body["data"][0]["title"], "Second request");

    let (_, total) = list_total(&pool, "?created_after=2029-12-31T00:00:00Z").await;
    assert_eq!(total, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_is_paginated_newest_first(pool: PgPool) {
    for title in ["First request", "Second request", "Third request"] {
        create_maintenance(&pool, title, "OTHERS").await;
    }

    let (body, total) = list_total(&pool, "?limit=2&offset=0").await;
    assert_eq!(total, 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["data"][0]["title"], "Third request");

    let (body, _) = list_total(&pool, "?limit=2&offset=2").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "First request");
}
