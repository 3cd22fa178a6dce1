use actix_cors::Cors;
use actix_web::http::header;

/// Open policy when no origin is configured; a restricted policy when one
/// is set via `CORS_ALLOWED_ORIGIN`.
pub fn default(origin: Option<&str>) -> Cors {
    match origin {
        Some(origin) => Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
            ])
            .allowed_origin(origin)
            .max_age(3600),
        None => Cors::permissive(),
    }
}
