use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn home_page_carries_its_seo_tags() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get("/").await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page
        .contains("<title>Zinara Digital - AI Systems Architecture &amp; Digital Strategy</title>"));
    assert!(html_page.contains(r#"<link rel="canonical" href="https://zinara.digital">"#));
    assert!(html_page.contains(r#"<meta property="og:type" content="website">"#));
    assert!(html_page.contains(r#"<script type="application/ld+json">"#));
}

#[tokio::test]
async fn contact_page_renders_an_empty_form() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get("/contact").await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<form action="/contact" method="post""#));
    assert!(html_page.contains(r#"<link rel="canonical" href="https://zinara.digital/contact">"#));
    assert!(!html_page.contains(r#"class="field-error""#));
}

#[tokio::test]
async fn unknown_paths_render_the_not_found_page() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get("/does-not-exist").await;

    // assert
    assert_eq!(response.status().as_u16(), 404);
    assert!(response.text().await.unwrap().contains("Go Home"));
}

#[tokio::test]
async fn third_party_tags_are_absent_without_ids() {
    // arrange
    let app = spawn_app().await;

    // act
    let html_page = app.get_html("/").await;

    // assert
    assert!(!html_page.contains("googletagmanager"));
    assert!(!html_page.contains("tidio"));
}

#[tokio::test]
async fn configured_integrations_are_injected_once_per_page() {
    // arrange
    let app = spawn_app_with(|c| {
        c.integrations.gtm_id = Some("GTM-TEST".into());
        c.integrations.ga4_id = Some("G-TEST".into());
        c.integrations.tidio_project_id = Some("project-test".into());
    })
    .await;

    for path in ["/", "/contact"] {
        // act
        let html_page = app.get_html(path).await;

        // assert
        assert_eq!(
            html_page
                .matches("https://www.googletagmanager.com/gtag/js?id=G-TEST")
                .count(),
            1
        );
        assert!(html_page.contains("https://www.googletagmanager.com/ns.html?id=GTM-TEST"));
        assert_eq!(html_page.matches("https://cdn.tidio.co/js/embed.js").count(), 1);
        assert!(html_page.contains(r#"projectId: "project-test""#));
    }
}
