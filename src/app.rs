use std::sync::Arc;

use actix_web::web;

use crate::api;
use crate::common::env_config::Config;
use crate::site;
use crate::site::routes::fallback::Fallback;

/// Assembles the three route groups in their required order: API first,
/// then static assets, then the catch-all fallback. Used by `main` and by
/// the integration tests, so both exercise the same routing policy.
pub fn configure(config: Arc<Config>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |app| {
        let fallback = Fallback::new(config.clone());

        app.app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(fallback.clone()))
            .service(api::mount::mount_api());

        if config.legacy_payment_route_enabled {
            app.service(api::mount::mount_legacy_pay());
        }

        if config.web_assets_enabled {
            app.service(site::mount::mount_assets(&config, fallback));
        }

        app.default_service(web::route().to(site::routes::fallback::catch_all));
    }
}
