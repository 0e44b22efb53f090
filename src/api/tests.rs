//! Gateway tests: full route table over in-memory stores.

use super::*;
use crate::api::metrics::{error_count, request_count};
use crate::middleware::RequestMetrics;
use crate::models::{News, Reminder, UserProfile};
use crate::services::{CrudService, Services};
use crate::store::{Store, StoreError};
use actix_web::{http::StatusCode, test as actix_test, App};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! test_app {
    ($services:expr) => {{
        let services = $services;
        actix_test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure),
        )
        .await
    }};
}

#[actix_rt::test]
async fn test_reminder_lifecycle_status_contract() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/reminder")
        .set_json(json!({ "reminderId": 1, "text": "call" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/reminder")
        .set_json(json!({ "reminderId": 1, "text": "x" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder/1").to_request();
    let stored: Reminder = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.text, "call");

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/reminder/1")
        .set_json(json!({ "reminderId": 1, "text": "email" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder/1").to_request();
    let stored: Reminder = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.text, "email");

    let req = actix_test::TestRequest::delete().uri("/api/v1/reminder/1").to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder/1").to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = actix_test::TestRequest::delete().uri("/api/v1/reminder/1").to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_read_all_returns_created_news() {
    let app = test_app!(Services::in_memory());

    for (id, title) in [(2, "markets"), (1, "weather"), (3, "sports")] {
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/news")
            .set_json(json!({ "newsId": id, "title": title, "author": "desk" }))
            .to_request();
        let created: News = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.news_id, id);
    }

    let req = actix_test::TestRequest::get().uri("/api/v1/news").to_request();
    let all: Vec<News> = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 3);

    for news in all {
        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/news/{}", news.news_id))
            .to_request();
        let fetched: News = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, news);
    }
}

#[actix_rt::test]
async fn test_update_uses_path_identifier_and_caller_payload() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/user")
        .set_json(json!({ "userId": "ana", "firstName": "Ana", "email": "ana@example.com" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Body carries a different id; the path decides which profile changes.
    let req = actix_test::TestRequest::put()
        .uri("/api/v1/user/ana")
        .set_json(json!({ "userId": "someone-else", "firstName": "Ana Maria", "email": "am@example.com" }))
        .to_request();
    let updated: UserProfile = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.user_id, "ana");
    assert_eq!(updated.first_name, "Ana Maria");

    let req = actix_test::TestRequest::get().uri("/api/v1/user/ana").to_request();
    let stored: UserProfile = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.email, "am@example.com");

    let req = actix_test::TestRequest::get().uri("/api/v1/user/someone-else").to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::news_get("GET", "/api/v1/news/404", None)]
#[case::news_put("PUT", "/api/v1/news/404", Some(json!({ "newsId": 404, "title": "t" })))]
#[case::news_delete("DELETE", "/api/v1/news/404", None)]
#[case::reminder_get("GET", "/api/v1/reminder/404", None)]
#[case::reminder_put("PUT", "/api/v1/reminder/404", Some(json!({ "reminderId": 404, "text": "t" })))]
#[case::reminder_delete("DELETE", "/api/v1/reminder/404", None)]
#[case::user_get("GET", "/api/v1/user/nobody", None)]
#[case::user_put("PUT", "/api/v1/user/nobody", Some(json!({ "userId": "nobody" })))]
#[case::user_delete("DELETE", "/api/v1/user/nobody", None)]
#[case::unparsable_id("GET", "/api/v1/news/not-a-number", None)]
#[actix_rt::test]
async fn test_absent_identifier_is_404_without_body(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    let app = test_app!(Services::in_memory());

    let req = match method {
        "GET" => actix_test::TestRequest::get(),
        "PUT" => actix_test::TestRequest::put(),
        _ => actix_test::TestRequest::delete(),
    }
    .uri(uri);
    let req = match body {
        Some(body) => req.set_json(body),
        None => req,
    };

    let res = actix_test::call_service(&app, req.to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(actix_test::read_body(res).await.is_empty());
}

#[actix_rt::test]
async fn test_empty_collections_list_as_empty_arrays() {
    let app = test_app!(Services::in_memory());

    for uri in ["/api/v1/news", "/api/v1/reminder", "/api/v1/user"] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[actix_rt::test]
async fn test_malformed_payload_is_rejected() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/news")
        .set_json(json!({ "title": "no id" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(actix_test::read_body(res).await.is_empty());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/reminder")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"reminderId\": ")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(actix_test::read_body(res).await.is_empty());

    let req = actix_test::TestRequest::get().uri("/api/v1/news").to_request();
    let all: Vec<News> = actix_test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());
}

/// Store whose backend is always down.
struct UnavailableStore;

#[async_trait]
impl Store<Reminder> for UnavailableStore {
    async fn find_by_id(&self, _id: &i32) -> Result<Option<Reminder>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn find_all(&self) -> Result<Vec<Reminder>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn insert(&self, _entity: &Reminder) -> Result<bool, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn replace(&self, _entity: &Reminder) -> Result<bool, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn delete_by_id(&self, _id: &i32) -> Result<bool, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

#[actix_rt::test]
async fn test_store_fault_is_500_without_body() {
    let mut services = Services::in_memory();
    services.reminders = CrudService::new(Arc::new(UnavailableStore));
    let app = test_app!(services);

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(actix_test::read_body(res).await.is_empty());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/reminder")
        .set_json(json!({ "reminderId": 1, "text": "call" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn test_health_and_metrics_are_served() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let health: health::HealthResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "newz-service");

    let req = actix_test::TestRequest::get().uri("/metrics").to_request();
    let body = actix_test::call_and_read_body(&app, req).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("http_errors_total"));
}

#[actix_rt::test]
async fn test_put_takes_identifier_from_path_only() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/reminder")
        .set_json(json!({ "reminderId": 1, "text": "call" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/reminder/1")
        .set_json(json!({ "text": "email" }))
        .to_request();
    let updated: Reminder = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.reminder_id, 1);
    assert_eq!(updated.text, "email");

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder/1").to_request();
    let stored: Reminder = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.text, "email");

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/user/nobody")
        .set_json(json!({ "firstName": "x" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(actix_test::read_body(res).await.is_empty());

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/news/8")
        .set_json(json!({ "title": "never created" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_empty_user_id_is_not_registered() {
    let app = test_app!(Services::in_memory());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/user")
        .set_json(json!({ "userId": "", "firstName": "Nameless" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(actix_test::read_body(res).await.is_empty());

    let req = actix_test::TestRequest::get().uri("/api/v1/user").to_request();
    let all: Vec<UserProfile> = actix_test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());
}

#[actix_rt::test]
async fn test_request_metrics_count_requests_and_server_errors() {
    let mut services = Services::in_memory();
    services.reminders = CrudService::new(Arc::new(UnavailableStore));
    let app = actix_test::init_service(
        App::new()
            .configure(|cfg| services.configure(cfg))
            .configure(configure)
            .wrap(RequestMetrics),
    )
    .await;

    // Only this test wraps the middleware, so the counters move only here.
    let (requests_before, errors_before) = (request_count(), error_count());

    let req = actix_test::TestRequest::get().uri("/api/v1/news/404").to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(request_count() - requests_before, 1);
    assert_eq!(error_count() - errors_before, 0);

    let req = actix_test::TestRequest::get().uri("/api/v1/reminder").to_request();
    assert_eq!(
        actix_test::call_service(&app, req).await.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(request_count() - requests_before, 2);
    assert_eq!(error_count() - errors_before, 1);
}
