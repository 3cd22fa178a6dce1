//! # Logger Middleware Module
//!
//! Middleware that logs one line per HTTP request: status code, method,
//! path and elapsed time, color-coded for the console.
//!
//! ## Usage
//! ```ignore
//! // In main.rs or app configuration
//! App::new()
//!     .wrap(logger::middleware(logger_enabled))
//!     .service(/* routes */)
//! ```

use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use colored::Colorize;
use futures::future::{LocalBoxFuture, Ready, ready};
use log::info;

/// Logger middleware for logging HTTP requests and responses.
///
/// # Fields
/// * `console_logging_enabled` - Whether to log to the console
pub struct LoggerMiddleware {
    console_logging_enabled: bool,
}

impl LoggerMiddleware {
    pub fn new(console_logging_enabled: bool) -> Self {
        Self {
            console_logging_enabled,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggerMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddlewareService {
            service,
            console_logging_enabled: self.console_logging_enabled,
        }))
    }
}

pub struct LoggerMiddlewareService<S> {
    service: S,
    console_logging_enabled: bool,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    // Forward the ready state of the wrapped service
    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let console_logging_enabled = self.console_logging_enabled;
        let started = Instant::now();

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            if console_logging_enabled {
                let status_code = res.status().as_u16();

                // Color-code status codes
                let colored_status = match status_code {
                    200..=299 => status_code.to_string().green(),
                    300..=399 => status_code.to_string().yellow(),
                    400..=499 => status_code.to_string().bright_red(),
                    _ => status_code.to_string().red(),
                };

                // Color-code HTTP methods
                let colored_method = match method.as_str() {
                    "GET" => method.blue(),
                    "POST" => method.yellow(),
                    "PUT" => method.purple(),
                    "DELETE" => method.red(),
                    _ => method.normal(),
                };

                info!(
                    "[{}] {} {} {}",
                    colored_status,
                    colored_method,
                    path.bright_white(),
                    format!("({}ms)", started.elapsed().as_millis()).bright_black(),
                );
            }

            Ok(res)
        })
    }
}
