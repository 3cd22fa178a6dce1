use std::sync::Arc;

use actix_web::{Responder, get, web};

use crate::api::dtos::health::HealthResponse;
use crate::common::{env_config::Config, error::Res, http::Success};

/// Reports service health. Always succeeds.
///
/// # Output
/// 200 JSON with `status`, `identity`, `stripe_mode` (`"live"` iff the
/// configured key is a live-mode key) and `server_time` (ISO-8601 UTC).
#[get("/health")]
pub async fn get_health(config: web::Data<Arc<Config>>) -> Res<impl Responder> {
    Success::ok(HealthResponse::now(&config))
}
