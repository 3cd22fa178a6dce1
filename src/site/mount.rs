use actix_files::Files;
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::guard;

use crate::common::env_config::Config;
use crate::site::routes::fallback::Fallback;

/// The static-asset route group: maps request paths onto files under the
/// configured root and streams them back with their content type.
///
/// The registration guard limits the group to GET/HEAD; other methods skip
/// it entirely and land in the app-level fallback. A file miss invokes the
/// same fallback chain through the service's default handler.
pub fn mount_assets(config: &Config, fallback: Fallback) -> Files {
    Files::new("/", &config.static_root)
        .index_file("index.html")
        .guard(guard::Any(guard::Get()).or(guard::Head()))
        .default_handler(fn_service(move |req: ServiceRequest| {
            let fallback = fallback.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = fallback.dispatch(&req).await;
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
