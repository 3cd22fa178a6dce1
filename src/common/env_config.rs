use std::{env, path::PathBuf, sync::Arc};

use stripe::Currency;

/// Stripe's public documentation test key. Only ever used when
/// `ALLOW_TEST_KEY_FALLBACK=true` and no real key is configured.
const DOCS_TEST_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the server: Stripe credentials and
/// currency, server host and port, number of worker threads, CORS
/// settings, logging preferences, and the web-asset serving options.
/// It is constructed once at startup and passed by reference into the
/// router constructors; handlers never read the environment.
pub struct Config {
    /// Stripe secret key used for all payment-intent calls.
    pub stripe_secret_key: String,
    /// True when the key above is the built-in docs test key fallback.
    pub using_test_key_fallback: bool,
    /// Fixed currency submitted with every payment intent.
    pub stripe_currency: Currency,
    /// Override of the Stripe API base URL (stub/mock servers).
    pub stripe_api_base: Option<String>,
    pub environment: String, // development or production
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS; `None` keeps the permissive policy.
    pub cors_allowed_origin: Option<String>,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Root directory the static asset service and the SPA document are read from.
    pub static_root: PathBuf,
    /// Whether the static-asset and SPA route groups are mounted at all.
    pub web_assets_enabled: bool,
    /// Whether the unprefixed `/create-payment-intent` alias is mounted.
    pub legacy_payment_route_enabled: bool,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `STRIPE_SECRET_KEY`: Stripe secret key. May only be omitted when
    ///   `ALLOW_TEST_KEY_FALLBACK=true`, in which case Stripe's public docs
    ///   test key is substituted and a warning is logged at startup.
    ///
    /// Optional (with defaults):
    /// - `STRIPE_CURRENCY`: Currency for all intents (default: "jpy")
    /// - `STRIPE_API_BASE`: Stripe API base URL override (default: unset)
    /// - `IP`: Server host (default: "0.0.0.0")
    /// - `PORT`: Server port (default: 3001)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `ENVIRONMENT`: Environment label for the startup banner (default: "development")
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: unset, permissive)
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `STATIC_ROOT`: Web asset root directory (default: ".")
    /// - `ENABLE_WEB_ASSETS`: Mount the static/SPA route groups (default: true)
    /// - `ENABLE_LEGACY_PAYMENT_ROUTE`: Mount the unprefixed payment alias (default: false)
    ///
    /// # Panics
    ///
    /// This function will panic if the Stripe key is missing without the
    /// fallback opt-in, or if `STRIPE_CURRENCY` is not a valid ISO code.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        let fallback_allowed = bool_var("ALLOW_TEST_KEY_FALLBACK", false);
        let (stripe_secret_key, using_test_key_fallback) = match env::var("STRIPE_SECRET_KEY") {
            Ok(key) if !key.is_empty() => (key, false),
            _ if fallback_allowed => (DOCS_TEST_KEY.to_string(), true),
            _ => panic!(
                "STRIPE_SECRET_KEY must be set (or ALLOW_TEST_KEY_FALLBACK=true to use the built-in test key)"
            ),
        };

        Arc::new(Config {
            stripe_secret_key,
            using_test_key_fallback,
            stripe_currency: env::var("STRIPE_CURRENCY")
                .unwrap_or_else(|_| "jpy".to_string())
                .parse()
                .expect("STRIPE_CURRENCY must be a valid ISO currency code"),
            stripe_api_base: env::var("STRIPE_API_BASE").ok(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            server_host: env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            console_logging_enabled: bool_var("ENABLE_CONSOLE_LOGGING", true),
            static_root: env::var("STATIC_ROOT")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            web_assets_enabled: bool_var("ENABLE_WEB_ASSETS", true),
            legacy_payment_route_enabled: bool_var("ENABLE_LEGACY_PAYMENT_ROUTE", false),
        })
    }

    /// `"live"` iff the configured key is a live-mode secret key.
    pub fn stripe_mode(&self) -> &'static str {
        if self.stripe_secret_key.starts_with("sk_live") {
            "live"
        } else {
            "test"
        }
    }
}

fn bool_var(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(default)
}
