use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::web::models::{ErrorResponse, QueryRequest};
use crate::web::{AppState, MODES};

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("modes", MODES);
    context.insert("provider", data.advisor.provider().as_str());
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "provider": data.advisor.provider().as_str()
    }))
}

// Answer API endpoint
pub async fn answer(data: web::Data<AppState>, req: web::Json<QueryRequest>) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!(
        "Answer request {} ({} chars, mode: {})",
        request_id,
        req.question.len(),
        req.mode.as_deref().unwrap_or("-")
    );
    debug!("Question {}: {}", request_id, req.question);

    match data.advisor.generate_answer(&req).await {
        Ok(response) => {
            info!(
                "Answer request {} served by {} provider",
                request_id, response.provider
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            error!("Answer request {} failed: {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                detail: e.to_string(),
            })
        }
    }
}
