use std::sync::Arc;

use actix_web::{Responder, post, web};

use crate::api::dtos::pay::{PaymentIntentRequest, PaymentIntentResponse};
use crate::api::services;
use crate::common::stripe;
use crate::common::{
    env_config::Config,
    error::{AppError, Res},
    http::Success,
};

/// Creates a Stripe payment intent for a plan purchase.
///
/// # Input
/// - JSON body `{planId, amount}`. `planId` is opaque and forwarded
///   unvalidated; `amount` is rounded to the nearest currency subunit and
///   otherwise left for Stripe to validate.
///
/// # Output
/// - Success: 200 `{"clientSecret": ...}` — the opaque token the caller
///   uses to complete payment through Stripe's client-side flow.
/// - Error: 400 `{"error": ...}` for a body that does not parse, 500
///   `{"error": <Stripe's message>}` for any Stripe failure. No retry.
#[post("/create-payment-intent")]
pub async fn post_create_payment_intent(
    payload: String,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let req = PaymentIntentRequest::from_json(&payload)?;

    let client = stripe::create_client(&config);
    let intent = services::pay::create_payment_intent(&client, config.stripe_currency, &req).await?;

    let client_secret = intent.client_secret.ok_or_else(|| {
        AppError::Internal("Stripe returned a payment intent without a client secret".to_string())
    })?;

    Success::ok(PaymentIntentResponse { client_secret })
}
