use actix_web::HttpResponse;
use log::error;
use thiserror::Error;

use super::http::API_MARKER;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Stripe error: {0}")]
    Stripe(#[from] stripe::StripeError),

    // === APPLICATION ERRORS ===
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// The message Stripe itself gives for a failed request, verbatim.
    /// Transport-level failures fall back to the error's display form.
    fn stripe_message(error: &stripe::StripeError) -> String {
        match error {
            stripe::StripeError::Stripe(request_error) => request_error
                .message
                .clone()
                .unwrap_or_else(|| error.to_string()),
            _ => error.to_string(),
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        match self {
            // === CONVERSION ERRORS ===
            AppError::Stripe(err) => {
                error!("Stripe error: {}", err);
                HttpResponse::InternalServerError()
                    .insert_header(API_MARKER)
                    .json(serde_json::json!({"error": Self::stripe_message(err)}))
            }

            // === APPLICATION ERRORS ===
            AppError::BadRequest(_) => HttpResponse::BadRequest()
                .insert_header(API_MARKER)
                .json(serde_json::json!({"error": self.to_string()})),

            AppError::Internal(err) => {
                error!("Internal error: {}", err);
                HttpResponse::InternalServerError()
                    .insert_header(API_MARKER)
                    .json(serde_json::json!({"error": "Internal server error"}))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
