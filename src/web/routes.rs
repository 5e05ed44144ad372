use actix_web::{error, web, HttpResponse};

use crate::web::handlers;
use crate::web::models::ErrorResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::scope("/api").route("/answer", web::post().to(handlers::answer)))
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check));
}

// Rejected JSON bodies answer with the same `{ "detail" }` shape as other failures
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse { detail }),
        )
        .into()
    })
}
