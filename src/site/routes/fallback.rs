use std::sync::Arc;

use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, web};
use log::warn;

use crate::common::env_config::Config;
use crate::common::http::API_MARKER;

/// Terminal body when even the SPA entry document is missing from disk.
/// A deployment/packaging fault, not a request error.
const MISSING_ASSETS_BODY: &str = "System Error: Web assets missing.";

/// The fallback route group: an explicit ordered chain of steps, each
/// returning either a response or `None` ("not handled"), driven in order
/// by [`Fallback::dispatch`]. Guarantees every request that reaches it
/// gets exactly one response.
#[derive(Clone)]
pub struct Fallback {
    config: Arc<Config>,
}

impl Fallback {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Tries each chain step in order; the last step always responds.
    pub async fn dispatch(&self, req: &HttpRequest) -> HttpResponse {
        if let Some(res) = self.api_not_found(req) {
            return res;
        }
        if let Some(res) = self.spa_document(req).await {
            return res;
        }
        self.missing_assets()
    }

    /// An API-prefixed path that fell through every API route: a structured
    /// 404, machine-distinguishable from the SPA's content-not-found case.
    fn api_not_found(&self, req: &HttpRequest) -> Option<HttpResponse> {
        let path = req.path();
        if !path.starts_with("/api/") {
            return None;
        }
        warn!("[API 404 fallback] {}", path);
        Some(
            HttpResponse::NotFound()
                .insert_header(API_MARKER)
                .json(serde_json::json!({"error": "API not found", "path": path})),
        )
    }

    /// Serves the SPA entry document for any other path, so deep links and
    /// browser reloads land in client-side routing. Declines when asset
    /// serving is disabled or the document is not on disk.
    async fn spa_document(&self, req: &HttpRequest) -> Option<HttpResponse> {
        if !self.config.web_assets_enabled {
            return None;
        }
        let index = self.config.static_root.join("index.html");
        match NamedFile::open_async(&index).await {
            Ok(file) => Some(file.into_response(req)),
            Err(_) => None,
        }
    }

    fn missing_assets(&self) -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(MISSING_ASSETS_BODY)
    }
}

/// App-level default service: hands every otherwise-unmatched request to
/// the fallback chain.
pub async fn catch_all(req: HttpRequest, fallback: web::Data<Fallback>) -> HttpResponse {
    fallback.dispatch(&req).await
}
