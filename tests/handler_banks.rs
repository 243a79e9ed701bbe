mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── GET ONE ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_bank(pool: PgPool) {
    let id = common::create_test_bank(&pool, "Alpha").await;
    let server = common::make_server(pool).await;

    let response = server.get(&format!("/api/v1/banks/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "bank": { "id": id, "name": "Alpha" } }));
}

#[sqlx::test]
async fn test_get_bank_not_found(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.get("/api/v1/banks/999999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "bank does not exist");
}

#[sqlx::test]
async fn test_get_bank_non_integer_id(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.get("/api/v1/banks/abc").await;

    response.assert_status_not_found();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_bank(pool: PgPool) {
    let server = common::make_server(pool.clone()).await;

    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "name": "Acme" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["msg"], "bank created");
    assert_eq!(body["bank"]["name"], "Acme");

    let id = body["bank"]["id"].as_i64().unwrap();
    let stored: String = sqlx::query_scalar("SELECT name FROM banks WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "Acme");
}

#[sqlx::test]
async fn test_create_bank_duplicate_name(pool: PgPool) {
    common::create_test_bank(&pool, "Acme").await;
    let server = common::make_server(pool.clone()).await;

    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "name": "Acme" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "name": ["Bank with this name already exists."] }));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_create_bank_missing_name(pool: PgPool) {
    let server = common::make_server(pool.clone()).await;

    let response = server.post("/api/v1/banks").json(&json!({})).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "name": ["Missing data for required field."] }));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_create_bank_rejects_id(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "id": 7, "name": "Acme" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "id": ["Unknown field."] }));
}

#[sqlx::test]
async fn test_create_bank_wrong_type(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "name": 42 }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "name": ["Not a valid string."] }));
}

#[sqlx::test]
async fn test_create_bank_name_too_long(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "name": "x".repeat(81) }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert!(body.get("name").is_some());
}

#[sqlx::test]
async fn test_create_bank_non_object_body(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.post("/api/v1/banks").json(&json!(["Acme"])).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "_schema": ["Invalid input type."] }));
}

#[sqlx::test]
async fn test_create_bank_malformed_json(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server
        .post("/api/v1/banks")
        .bytes(Bytes::from_static(b"{\"name\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "bad_request");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_bank(pool: PgPool) {
    let id = common::create_test_bank(&pool, "Old").await;
    let server = common::make_server(pool).await;

    let response = server
        .put(&format!("/api/v1/banks/{id}"))
        .json(&json!({ "name": "New" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "msg": "bank updated",
        "bank": { "id": id, "name": "New" }
    }));
}

#[sqlx::test]
async fn test_update_bank_empty_body_is_noop(pool: PgPool) {
    let id = common::create_test_bank(&pool, "Same").await;
    let server = common::make_server(pool).await;

    let response = server
        .put(&format!("/api/v1/banks/{id}"))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["bank"]["name"], "Same");
}

#[sqlx::test]
async fn test_update_bank_not_found(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server
        .put("/api/v1/banks/999999")
        .json(&json!({ "name": "X" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_bank_duplicate_name_keeps_row(pool: PgPool) {
    common::create_test_bank(&pool, "Taken").await;
    let id = common::create_test_bank(&pool, "Mine").await;
    let server = common::make_server(pool.clone()).await;

    let response = server
        .put(&format!("/api/v1/banks/{id}"))
        .json(&json!({ "name": "Taken" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "name": ["Bank with this name already exists."] }));

    let name: String = sqlx::query_scalar("SELECT name FROM banks WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Mine");
}

#[sqlx::test]
async fn test_update_bank_null_name(pool: PgPool) {
    let id = common::create_test_bank(&pool, "Keep").await;
    let server = common::make_server(pool).await;

    let response = server
        .put(&format!("/api/v1/banks/{id}"))
        .json(&json!({ "name": null }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "name": ["Field may not be null."] }));
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_bank(pool: PgPool) {
    let id = common::create_test_bank(&pool, "Doomed").await;
    let server = common::make_server(pool).await;

    let response = server.delete(&format!("/api/v1/banks/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "msg": "bank deleted" }));

    server
        .get(&format!("/api/v1/banks/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_bank_not_found(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.delete("/api/v1/banks/999999").await;

    response.assert_status_not_found();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_banks_empty(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.get("/api/v1/banks").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total"], 0);
    assert_eq!(body["pages"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 50);
    assert_eq!(body["results"], json!([]));
    assert!(body["next"].is_null());
    assert!(body["prev"].is_null());
}

#[sqlx::test]
async fn test_list_banks_pagination(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(common::create_test_bank(&pool, name).await);
    }
    let server = common::make_server(pool).await;

    let response = server
        .get("/api/v1/banks")
        .add_query_param("page", 2)
        .add_query_param("per_page", 2)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total"], 5);
    assert_eq!(body["pages"], 3);
    assert_eq!(
        body["results"],
        json!([
            { "id": ids[2], "name": "C" },
            { "id": ids[3], "name": "D" }
        ])
    );
    assert_eq!(body["next"], "/api/v1/banks?page=3&per_page=2");
    assert_eq!(body["prev"], "/api/v1/banks?page=1&per_page=2");
}

#[sqlx::test]
async fn test_list_banks_pages_cover_collection_once(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(common::create_test_bank(&pool, name).await);
    }
    let server = common::make_server(pool).await;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = server
            .get("/api/v1/banks")
            .add_query_param("page", page)
            .add_query_param("per_page", 2)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        for bank in body["results"].as_array().unwrap() {
            seen.push(bank["id"].as_i64().unwrap());
        }
        assert_eq!(body["next"].is_null(), page == 3);
    }

    ids.sort_unstable();
    assert_eq!(seen, ids);
}

#[sqlx::test]
async fn test_list_banks_huge_page(pool: PgPool) {
    common::create_test_bank(&pool, "Only").await;
    let server = common::make_server(pool).await;

    let response = server
        .get("/api/v1/banks")
        .add_query_param("page", i64::MAX)
        .add_query_param("per_page", 2)
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>().get("page").is_some());

    let response = server
        .get("/api/v1/banks")
        .add_query_param("page", i64::MAX)
        .add_query_param("per_page", 1)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_list_banks_last_page(pool: PgPool) {
    for name in ["A", "B", "C"] {
        common::create_test_bank(&pool, name).await;
    }
    let server = common::make_server(pool).await;

    let response = server
        .get("/api/v1/banks")
        .add_query_param("page", 2)
        .add_query_param("per_page", 2)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert!(body["next"].is_null());
}

#[sqlx::test]
async fn test_list_banks_page_past_end(pool: PgPool) {
    common::create_test_bank(&pool, "Only").await;
    let server = common::make_server(pool).await;

    let response = server
        .get("/api/v1/banks")
        .add_query_param("page", 5)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_list_banks_invalid_paging(pool: PgPool) {
    let server = common::make_server(pool).await;

    for (param, value) in [
        ("page", "0"),
        ("page", "-1"),
        ("page", "abc"),
        ("per_page", "0"),
        ("per_page", "101"),
        ("per_page", "ten"),
    ] {
        let response = server
            .get("/api/v1/banks")
            .add_query_param(param, value)
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert!(
            body.get(param).is_some(),
            "expected error on {param}={value}, got {body}"
        );
    }
}
