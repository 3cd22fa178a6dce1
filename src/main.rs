mod cors;

use actix_web::{App, HttpServer};
use log::{info, warn};
use luxe_rose_server::{app, common::env_config::Config, logger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let logger_enabled = config.console_logging_enabled;
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if logger_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    if config.using_test_key_fallback {
        warn!(
            "STRIPE_SECRET_KEY is not set; using the built-in Stripe docs test key \
             (ALLOW_TEST_KEY_FALLBACK=true). Never run this configuration in production."
        );
    }

    info!("==========================================");
    info!("LUXE & ROSE SERVER IS LIVE");
    info!("Port: {}", config.server_port);
    info!("Environment: {}", config.environment);
    info!("==========================================");

    HttpServer::new(move || {
        App::new()
            .wrap(logger::middleware(logger_enabled))
            .wrap(cors::default(origin.as_deref()))
            .configure(app::configure(config_data.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
