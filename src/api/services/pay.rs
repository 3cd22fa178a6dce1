use std::collections::HashMap;

use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent,
};

use crate::api::dtos::pay::PaymentIntentRequest;
use crate::common::error::{AppError, Res};

/// Submits a payment-intent creation request to Stripe.
///
/// The request is a pass-through: amount rounded to the nearest subunit,
/// currency fixed by configuration, `planId` forwarded in the metadata, and
/// automatic payment-method selection enabled. Stripe owns all further
/// validation (currency rules, minimum amount, idempotency); any rejection
/// surfaces as an `AppError::Stripe`.
pub async fn create_payment_intent(
    client: &Client,
    currency: Currency,
    req: &PaymentIntentRequest,
) -> Res<PaymentIntent> {
    let mut params = CreatePaymentIntent::new(req.amount_minor(), currency);
    params.metadata = Some(HashMap::from([("planId".to_string(), req.plan_id.clone())]));
    params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
        enabled: true,
        allow_redirects: None,
    });

    PaymentIntent::create(client, params)
        .await
        .map_err(AppError::from)
}
