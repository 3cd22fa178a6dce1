use std::path::Path;

use luxe_rose_server::common::env_config::Config;

/// Baseline test configuration over a throwaway static root. Tests tweak
/// fields before wrapping it in an `Arc`.
pub fn base_config(static_root: &Path) -> Config {
    Config {
        stripe_secret_key: "sk_test_stub".to_string(),
        using_test_key_fallback: false,
        stripe_currency: "jpy".parse().unwrap(),
        stripe_api_base: None,
        environment: "test".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        num_workers: 1,
        cors_allowed_origin: None,
        console_logging_enabled: false,
        static_root: static_root.to_path_buf(),
        web_assets_enabled: true,
        legacy_payment_route_enabled: false,
    }
}

pub const INDEX_BODY: &str = "<!doctype html><title>Luxe Rose</title>";

/// Writes the SPA entry document into the static root.
pub fn write_index(static_root: &Path) {
    std::fs::write(static_root.join("index.html"), INDEX_BODY).unwrap();
}
