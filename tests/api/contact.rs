use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

use crate::helpers::{assert_is_redirect_to, spawn_app};

/// Returns the mock builder used for mocking the notification endpoint
fn when_notifying_the_owner() -> MockBuilder {
    Mock::given(path("/notify-owner")).and(method("POST"))
}

fn jane() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Smith",
        "email": "jane@example.com",
        "company": "Tech Startup",
        "message": "I am interested in learning more about your AI systems architecture services.",
    })
}

#[tokio::test]
async fn a_valid_lead_notifies_the_owner_and_redirects_to_an_empty_form() {
    // arrange
    let app = spawn_app().await;
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.notification_server)
        .await;

    // act 1: submit the form
    let response = app.post_contact(&jane()).await;

    // assert
    assert_is_redirect_to(&response, "/contact");

    // act 2: follow the redirect
    let html_page = app.get_html("/contact").await;
    assert!(html_page.contains("Thank you! We'll be in touch soon."));
    assert!(!html_page.contains("Jane Smith"));

    // act 3: reload; the toast is gone
    let html_page = app.get_html("/contact").await;
    assert!(!html_page.contains("Thank you! We'll be in touch soon."));
}

#[tokio::test]
async fn the_notification_carries_every_field() {
    // arrange
    let app = spawn_app().await;
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.notification_server)
        .await;

    // act
    app.post_contact(&jane()).await;

    // assert
    let request = &app.notification_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["title"], "New Lead from Zinara Website");
    assert_eq!(
        body["content"],
        "Name: Jane Smith\nEmail: jane@example.com\nCompany: Tech Startup\n\nMessage:\n\
         I am interested in learning more about your AI systems architecture services."
    );
}

#[tokio::test]
async fn a_missing_or_blank_company_is_sent_as_not_provided() {
    // arrange
    let app = spawn_app().await;
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.notification_server)
        .await;
    let without_company = serde_json::json!({
        "name": "John Doe",
        "email": "test@example.com",
        "message": "This is a valid message",
    });
    let blank_company = serde_json::json!({
        "name": "John Doe",
        "email": "test@example.com",
        "company": "",
        "message": "This is a valid message",
    });

    // act
    app.post_contact(&without_company).await;
    app.post_contact(&blank_company).await;

    // assert
    for request in app.notification_server.received_requests().await.unwrap() {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert!(body["content"]
            .as_str()
            .unwrap()
            .contains("Company: Not provided"));
    }
}

#[tokio::test]
async fn invalid_leads_return_400_and_are_never_delivered() {
    // arrange
    let app = spawn_app().await;
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.notification_server)
        .await;
    let test_cases = vec![
        (
            serde_json::json!({"name": "A", "email": "test@example.com", "message": "This is a valid message"}),
            "Name must be at least 2 characters",
            "short name",
        ),
        (
            serde_json::json!({"name": "John Doe", "email": "invalid-email", "message": "This is a valid message"}),
            "Invalid email address",
            "invalid email",
        ),
        (
            serde_json::json!({"name": "John Doe", "email": "test@example.com", "message": "Short"}),
            "Message must be at least 10 characters",
            "short message",
        ),
        (
            serde_json::json!({"name": "John Doe", "email": "test@example.com"}),
            "Message must be at least 10 characters",
            "missing message and company",
        ),
    ];

    for (invalid_body, expected_error, description) in test_cases {
        // act
        let response = app.post_contact(&invalid_body).await;

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was {}",
            description
        );
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains(expected_error),
            "Missing inline error for {}",
            description
        );
    }
}

#[tokio::test]
async fn every_invalid_field_is_reported_together() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .post_contact(&serde_json::json!({"name": "", "email": "", "message": ""}))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 400);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Name must be at least 2 characters"));
    assert!(html_page.contains("Invalid email address"));
    assert!(html_page.contains("Message must be at least 10 characters"));
}

#[tokio::test]
async fn an_invalid_lead_keeps_what_the_visitor_typed() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .post_contact(&serde_json::json!({
            "name": "John Doe",
            "email": "invalid-email",
            "company": "Acme Corp",
            "message": "This is a valid message",
        }))
        .await;

    // assert
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"value="John Doe""#));
    assert!(html_page.contains(r#"value="invalid-email""#));
    assert!(html_page.contains(r#"value="Acme Corp""#));
    assert!(html_page.contains("This is a valid message</textarea>"));
}

#[tokio::test]
async fn a_failed_delivery_keeps_the_form_and_can_be_retried() {
    // arrange
    let app = spawn_app().await;

    // act 1: the notification endpoint is failing
    {
        let _mock_guard = when_notifying_the_owner()
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount_as_scoped(&app.notification_server)
            .await;

        let response = app.post_contact(&jane()).await;

        // assert
        assert_eq!(response.status().as_u16(), 500);
        let html_page = response.text().await.unwrap();
        assert!(html_page.contains("Failed to submit form. Please try again."));
        assert!(html_page.contains(r#"value="Jane Smith""#));
        assert!(html_page.contains(r#"value="jane@example.com""#));
    }

    // act 2: resubmit the unchanged data once the endpoint recovers
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.notification_server)
        .await;
    let response = app.post_contact(&jane()).await;

    // assert
    assert_is_redirect_to(&response, "/contact");
}

#[tokio::test]
async fn a_slow_endpoint_is_reported_as_a_failure() {
    // arrange
    let app = spawn_app().await;
    when_notifying_the_owner()
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&app.notification_server)
        .await;

    // act
    let response = app.post_contact(&jane()).await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Failed to submit form. Please try again."));
}
