use std::time::Duration;

use serde_json::json;
use tailor_api::infrastructure::supabase::{SupabaseClient, SupabaseConfig, SupabaseRestClient};
use tailor_api::prelude::*;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "service-role-key";

fn client(server: &MockServer) -> SupabaseRestClient {
    let config = SupabaseConfig {
        url: format!("{}/", server.uri()),
        api_key: KEY.into(),
        timeout: Duration::from_secs(2),
    };
    SupabaseClient::new(&config).unwrap().rest()
}

#[tokio::test]
async fn test_insert_requests_representation() {
    let server = MockServer::start().await;
    let row = json!({"id": "t1", "name": "Ada"});

    Mock::given(method("POST"))
        .and(path("/rest/v1/tailors"))
        .and(query_param("select", "*"))
        .and(header("apikey", KEY))
        .and(bearer_token(KEY))
        .and(header("Prefer", "return=representation"))
        .and(body_json(json!([row.clone()])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([row.clone()])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client(&server)
        .insert(Collection::Tailors, row.clone())
        .await
        .unwrap();

    assert_eq!(rows, vec![row]);
}

#[tokio::test]
async fn test_select_translates_filters_and_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/measurements"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", "eq.c1"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 2}, {"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client(&server)
        .select(
            Collection::Measurements,
            &Query::all().eq("user_id", "c1").newest_first(),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 2);
}

#[tokio::test]
async fn test_update_sends_patch_only() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", "eq.c1"))
        .and(header("Prefer", "return=representation"))
        .and(body_json(json!({"email": "bola@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client(&server)
        .update(
            Collection::Users,
            &Query::by_id("c1"),
            json!({"email": "bola@example.com"}),
        )
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/measurements"))
        .and(query_param("id", "eq.17"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete(Collection::Measurements, &Query::by_id("17"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rejection_carries_store_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/tailors"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "details": "Key (id)=(t1) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"tailors_pkey\""
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .insert(Collection::Tailors, json!({"id": "t1"}))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Rejected {
            status: 409,
            message: "duplicate key value violates unique constraint \"tailors_pkey\"".into(),
        }
    );
}

#[tokio::test]
async fn test_non_array_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .select(Collection::Users, &Query::all())
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_store_is_transport_error() {
    let server = MockServer::start().await;
    let store = client(&server);
    drop(server);

    let err = store
        .select(Collection::Users, &Query::all())
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Transport(_)));
    assert!(!store.health_check().await);
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(client(&server).health_check().await);
}
