//! # Server Endpoint Tests
//!
//! Integration tests for the operational endpoints, method filtering, and
//! malformed-payload handling.

mod common;

use anyhow::Result;
use common::TestApp;

#[tokio::test]
async fn test_root_and_health_check_endpoints() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    // --- Test Root Endpoint ---
    let root_response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request to /");

    // Assert
    assert!(root_response.status().is_success());
    assert_eq!(
        "snaptext server is running.",
        root_response.text().await.unwrap()
    );

    // --- Test Health Check Endpoint ---
    let health_response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request to /health");

    // Assert
    assert!(health_response.status().is_success());
    assert_eq!("OK", health_response.text().await.unwrap());

    Ok(())
}

#[tokio::test]
async fn test_non_post_methods_are_rejected_with_structured_body() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    for path in ["/api/ocr", "/api/summarize", "/api/calendar-event"] {
        let url = format!("{}{path}", app.address);

        // Act: one representative non-POST method per verb class.
        for response in [
            app.client.get(&url).send().await?,
            app.client.put(&url).send().await?,
            app.client.delete(&url).send().await?,
        ] {
            // Assert
            assert_eq!(405, response.status().as_u16(), "path: {path}");
            let body: serde_json::Value = response.json().await?;
            assert_eq!(body["error"], "Method not allowed", "path: {path}");
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_rejected() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    // This JSON is syntactically invalid (missing closing brace).
    let malformed_body = r#"{"text": "Hello world""#;

    // Act
    let response = app
        .client
        .post(format!("{}/api/summarize", app.address))
        .header("Content-Type", "application/json")
        .body(malformed_body)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    // Axum's `Json` extractor rejects malformed JSON with a 400 Bad Request.
    assert_eq!(400, response.status().as_u16());

    Ok(())
}
