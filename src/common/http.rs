use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use super::error::Res;

/// Name of the response header marking API-origin responses. Combined with
/// the route-registration order, its presence proves an API path was never
/// served by the static/fallback layer.
pub const API_MARKER_NAME: &str = "X-Luxe-API";

/// Ready-to-insert header pair for API-origin responses.
pub const API_MARKER: (&str, &str) = (API_MARKER_NAME, "true");

pub struct Success;
impl Success {
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().insert_header(API_MARKER).json(body))
    }
}
