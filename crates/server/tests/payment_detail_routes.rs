use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use server::{di::DependenciesInject, handler::payment_detail_routes, state::AppState};
use shared::{
    abstract_trait::payment_detail::{
        repository::{
            command::DynPaymentDetailCommandRepository, query::DynPaymentDetailQueryRepository,
        },
        service::{command::DynPaymentDetailCommandService, query::DynPaymentDetailQueryService},
    },
    service::payment_detail::{PaymentDetailCommandService, PaymentDetailQueryService},
    testing::InMemoryPaymentDetailRepository,
};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let repo = Arc::new(InMemoryPaymentDetailRepository::new());

    let payment_detail_query = Arc::new(PaymentDetailQueryService::new(
        repo.clone() as DynPaymentDetailQueryRepository,
    )) as DynPaymentDetailQueryService;
    let payment_detail_command = Arc::new(PaymentDetailCommandService::new(
        repo as DynPaymentDetailCommandRepository,
    )) as DynPaymentDetailCommandService;

    let state = AppState {
        di_container: DependenciesInject {
            payment_detail_query,
            payment_detail_command,
        },
    };

    let (router, _api) = payment_detail_routes(Arc::new(state)).split_for_parts();
    router
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn valid_body() -> Value {
    json!({
        "cardOwnerName": "Ada Lovelace",
        "cardNumber": "4111111111111111",
        "expirationDate": "12/30",
        "cvc": "123"
    })
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_creates_record_with_location_and_masked_number() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/payment-detail", valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/payment-detail/1");

    let body = response_json(response).await;
    assert_eq!(body["paymentDetailsID"], 1);
    assert_eq!(body["cardOwnerName"], "Ada Lovelace");
    assert_eq!(body["cardNumber"], "************1111");
    assert_eq!(body["expirationDate"], "12/30");
    assert_eq!(body["cvc"], "123");
}

#[tokio::test]
async fn post_with_invalid_fields_is_400_with_field_errors() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/payment-detail",
            json!({
                "cardOwnerName": "Ada Lovelace",
                "cardNumber": "4111",
                "expirationDate": "13/25",
                "cvc": "12"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["cardNumber"][0], "Card number must be 16 digits");
    assert_eq!(
        body["expirationDate"][0],
        "Expiration date must be in MM/YY format"
    );
    assert_eq!(body["cvc"][0], "CVC must be 3 digits");
    assert!(body.get("cardOwnerName").is_none());
}

#[tokio::test]
async fn get_returns_all_records() {
    let app = test_app();

    for (owner, number) in [("Ada", "4111111111111111"), ("Grace", "4000000000002222")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/payment-detail",
                json!({
                    "cardOwnerName": owner,
                    "cardNumber": number,
                    "expirationDate": "12/30",
                    "cvc": "123"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/payment-detail")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["cardOwnerName"], "Ada");
    assert_eq!(records[1]["cardNumber"], "************2222");
}

#[tokio::test]
async fn get_missing_record_is_404_with_empty_body() {
    let app = test_app();

    let response = app
        .oneshot(get_request("/payment-detail/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn put_updates_and_remasks_the_card_number() {
    let app = test_app();

    app.clone()
        .oneshot(json_request("POST", "/payment-detail", valid_body()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/payment-detail/1",
            json!({
                "cardOwnerName": "Ada King",
                "cardNumber": "4000000000002222",
                "expirationDate": "01/31",
                "cvc": "456"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["paymentDetailsID"], 1);
    assert_eq!(body["cardNumber"], "************2222");

    let fetched = app.oneshot(get_request("/payment-detail/1")).await.unwrap();
    let fetched_body = response_json(fetched).await;
    assert_eq!(fetched_body["cardOwnerName"], "Ada King");
    assert_eq!(fetched_body["cardNumber"], "************2222");
}

#[tokio::test]
async fn put_missing_record_is_404() {
    let app = test_app();

    let response = app
        .oneshot(json_request("PUT", "/payment-detail/41", valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let app = test_app();

    app.clone()
        .oneshot(json_request("POST", "/payment-detail", valid_body()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/payment-detail/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let after = app.oneshot(get_request("/payment-detail/1")).await.unwrap();
    assert_eq!(after.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_record_is_404() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/payment-detail/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
