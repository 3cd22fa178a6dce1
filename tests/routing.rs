mod common;

use std::sync::Arc;

use actix_web::{App, test};
use luxe_rose_server::app;
use luxe_rose_server::common::env_config::Config;
use tempfile::TempDir;

use common::{INDEX_BODY, base_config, write_index};

macro_rules! init_app {
    ($config:expr) => {
        test::init_service(App::new().configure(app::configure(Arc::new($config)))).await
    };
}

fn api_marker(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
    res.headers().get("X-Luxe-API").and_then(|v| v.to_str().ok())
}

#[actix_web::test]
async fn health_is_always_ok_and_marked_api_origin() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), 200);
    assert_eq!(api_marker(&res), Some("true"));

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "online");
    assert_eq!(body["identity"], "Luxe-Rose-System-v2");
    assert_eq!(body["stripe_mode"], "test");
    // server_time must be a well-formed ISO-8601 instant
    let server_time = body["server_time"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(server_time).unwrap();
}

#[actix_web::test]
async fn health_reports_live_mode_for_live_key() {
    let root = TempDir::new().unwrap();
    let mut config = base_config(root.path());
    config.stripe_secret_key = "sk_live_0000000000".to_string();
    let app = init_app!(config);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["stripe_mode"], "live");
}

#[actix_web::test]
async fn api_route_wins_over_colliding_static_file() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    // a file whose path collides with the API route must never be served
    std::fs::create_dir(root.path().join("api")).unwrap();
    std::fs::write(root.path().join("api/health"), "STATIC SHADOW").unwrap();
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), 200);
    assert_eq!(api_marker(&res), Some("true"));
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "online");
}

#[actix_web::test]
async fn unknown_api_path_gets_structured_404() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/does-not-exist").to_request(),
    )
    .await;
    assert_eq!(res.status(), 404);
    assert_eq!(api_marker(&res), Some("true"));

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "API not found");
    assert_eq!(body["path"], "/api/does-not-exist");
}

#[actix_web::test]
async fn static_file_is_served_without_api_marker() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    std::fs::write(root.path().join("styles.css"), "body { color: pink }").unwrap();
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/styles.css").to_request()).await;
    assert_eq!(res.status(), 200);
    assert_eq!(api_marker(&res), None);
    let body = test::read_body(res).await;
    assert_eq!(body, "body { color: pink }");
}

#[actix_web::test]
async fn root_serves_index_document() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), 200);
    let body = test::read_body(res).await;
    assert_eq!(body, INDEX_BODY);
}

#[actix_web::test]
async fn deep_link_gets_spa_document_not_404() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/pricing/gold").to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);
    assert_eq!(api_marker(&res), None);
    let body = test::read_body(res).await;
    assert_eq!(body, INDEX_BODY);
}

#[actix_web::test]
async fn post_to_unknown_path_still_reaches_fallback() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let app = init_app!(base_config(root.path()));

    // non-GET/HEAD bypasses the asset service and lands in the catch-all
    let res = test::call_service(&app, test::TestRequest::post().uri("/pricing").to_request()).await;
    assert_eq!(res.status(), 200);
    let body = test::read_body(res).await;
    assert_eq!(body, INDEX_BODY);
}

#[actix_web::test]
async fn missing_spa_document_is_plain_text_404() {
    let root = TempDir::new().unwrap(); // no index.html on disk
    let app = init_app!(base_config(root.path()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/pricing").to_request()).await;
    assert_eq!(res.status(), 404);
    assert_eq!(api_marker(&res), None);
    assert!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .starts_with("text/plain")
    );
    let body = test::read_body(res).await;
    assert_eq!(body, "System Error: Web assets missing.");
}

#[actix_web::test]
async fn assets_disabled_variant_still_serves_api() {
    let root = TempDir::new().unwrap();
    write_index(root.path());
    let mut config = base_config(root.path());
    config.web_assets_enabled = false;
    let app = init_app!(config);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), 200);

    // with asset serving off, the SPA step declines and the chain terminates
    let res = test::call_service(&app, test::TestRequest::get().uri("/pricing").to_request()).await;
    assert_eq!(res.status(), 404);
    let body = test::read_body(res).await;
    assert_eq!(body, "System Error: Web assets missing.");
}

#[actix_web::test]
async fn health_check_passes_config_not_environment() {
    // two apps over different configs must answer independently, proving
    // handlers read the injected Config rather than ambient state
    let root = TempDir::new().unwrap();
    let live = {
        let mut c = base_config(root.path());
        c.stripe_secret_key = "sk_live_a".to_string();
        c
    };
    let test_mode = base_config(root.path());

    let live_app = init_app!(live);
    let test_app = init_app!(test_mode);

    let res = test::call_service(
        &live_app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["stripe_mode"], "live");

    let res = test::call_service(
        &test_app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["stripe_mode"], "test");
}
