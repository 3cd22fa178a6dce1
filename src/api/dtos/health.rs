use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::common::env_config::Config;

/// Fixed service label reported by the health endpoint.
pub const IDENTITY: &str = "Luxe-Rose-System-v2";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub identity: &'static str,
    pub stripe_mode: &'static str,
    pub server_time: String,
}

impl HealthResponse {
    pub fn now(config: &Config) -> Self {
        HealthResponse {
            status: "online",
            identity: IDENTITY,
            stripe_mode: config.stripe_mode(),
            server_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
