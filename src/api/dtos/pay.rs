use serde::{Deserialize, Serialize};

use crate::common::error::{AppError, Res};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub plan_id: String, // opaque, passed through to Stripe metadata unvalidated
    pub amount: f64,
}

impl PaymentIntentRequest {
    /// Explicit parse step, decoupled from the framework's request object.
    pub fn from_json(payload: &str) -> Res<Self> {
        serde_json::from_str(payload)
            .map_err(|e| AppError::BadRequest(format!("Invalid payment request: {}", e)))
    }

    /// Amount in currency subunits, rounded to the nearest integer. The only
    /// numeric processing applied before submission; Stripe owns validation.
    pub fn amount_minor(&self) -> i64 {
        self.amount.round() as i64
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
