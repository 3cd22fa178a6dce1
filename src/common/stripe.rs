use stripe::Client;

use super::env_config::Config;

/// Builds a Stripe client for the configured key, honoring the API base
/// override so tests can point the service at a stub server.
pub fn create_client(config: &Config) -> Client {
    match &config.stripe_api_base {
        Some(base) => Client::from_url(base.as_str(), config.stripe_secret_key.as_str()),
        None => Client::new(config.stripe_secret_key.as_str()),
    }
}
