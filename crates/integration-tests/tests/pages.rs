//! Integration tests for the public marketplace pages.
//!
//! These tests require the marketplace server running
//! (cargo run -p xeinst-web).
//!
//! Run with: cargo test -p xeinst-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

/// Base URL for the marketplace (configurable via environment).
fn base_url() -> String {
    std::env::var("XEINST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_health_check() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_landing_page_renders() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("Failed to get landing page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("The AI Agents"));
    assert!(body.contains("Why Choose Xeinst?"));
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_explore_page_lists_agents() {
    let resp = client()
        .get(format!("{}/explore", base_url()))
        .send()
        .await
        .expect("Failed to get explore page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Explore AI Agents"));
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_explore_page_honors_filters() {
    let resp = client()
        .get(format!("{}/explore", base_url()))
        .query(&[("category", "Customer Support"), ("q", "customer")])
        .send()
        .await
        .expect("Failed to get filtered explore page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Customer Support Bot"));
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_explore_page_shows_empty_state_when_nothing_matches() {
    // Category and search combine with AND; "customer" appears in no
    // E-commerce listing.
    let resp = client()
        .get(format!("{}/explore", base_url()))
        .query(&[("category", "E-commerce"), ("q", "customer")])
        .send()
        .await
        .expect("Failed to get filtered explore page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("No agents match your search"));
    assert!(!body.contains("Customer Support Bot"));
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_payment_outcome_pages_render() {
    let base_url = base_url();
    let client = client();

    for (path, heading) in [
        ("/success", "Payment successful"),
        ("/cancel", "Payment cancelled"),
    ] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to get payment outcome page");

        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.expect("Failed to read body");
        assert!(body.contains(heading));
    }
}

#[tokio::test]
#[ignore = "Requires running marketplace server"]
async fn test_verify_request_page_renders() {
    let resp = client()
        .get(format!("{}/auth/verify-request", base_url()))
        .send()
        .await
        .expect("Failed to get verify-request page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Check your email"));
}
