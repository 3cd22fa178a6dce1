use actix_web::dev::HttpServiceFactory;
use actix_web::web::{self};

use crate::api::routes;

/// The `/api` route group. Registered before the static and fallback groups
/// so API paths can never be shadowed by asset serving.
pub fn mount_api() -> actix_web::Scope {
    web::scope("/api")
        .service(routes::health::get_health)
        .service(routes::pay::post_create_payment_intent)
}

/// Unprefixed `/create-payment-intent` alias onto the same handler, kept for
/// callers of the pre-SPA deployment. Mounted only when
/// `ENABLE_LEGACY_PAYMENT_ROUTE` is set. An exact-match resource, not a
/// scope, so it cannot swallow paths meant for the asset service.
pub fn mount_legacy_pay() -> impl HttpServiceFactory {
    routes::pay::post_create_payment_intent
}
