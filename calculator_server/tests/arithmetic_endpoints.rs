mod support;

use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(path: &str, payload: Value) -> (StatusCode, String) {
    let base_url = support::ensure_server();
    let res = reqwest::Client::new()
        .post(format!("{base_url}{path}"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    let status = res.status();
    let body = res.text().await.expect("body should be readable");
    (status, body)
}

#[tokio::test]
async fn test_add_returns_integer_sum() {
    let (status, body) = post("/post/add", json!({"a": 10, "b": 5})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":15}"#);
}

#[tokio::test]
async fn test_subtract_with_floats() {
    let (status, body) = post("/post/subtract", json!({"a": 1.5, "b": 4})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":-2.5}"#);
}

#[tokio::test]
async fn test_multiply_returns_product() {
    let (status, body) = post("/post/multiply", json!({"a": -3, "b": 7})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":-21}"#);
}

#[tokio::test]
async fn test_divide_returns_float() {
    let (status, body) = post("/post/divide", json!({"a": 10, "b": 5})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":2.0}"#);
}

#[tokio::test]
async fn test_divide_by_zero_is_rejected() {
    for a in [json!(10), json!(-10), json!(0), json!(1e300)] {
        let (status, body) = post("/post/divide", json!({"a": a, "b": 0})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"detail":"Division by zero is not allowed"}"#);
    }
}

#[tokio::test]
async fn test_numeric_strings_are_coerced() {
    let (status, body) = post("/post/add", json!({"a": "25", "b": "0.5"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":25.5}"#);
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let payload = json!({"a": 7, "b": 3});

    let first = post("/post/divide", payload.clone()).await;
    let second = post("/post/divide", payload).await;

    assert_eq!(first, second);
}
