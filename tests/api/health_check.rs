use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_responds_200() {
    // arrange
    let test_app = spawn_app().await;

    // act
    let response = test_app.get("/health_check").await;

    // assert
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
