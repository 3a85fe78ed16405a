use actix_web::{web, HttpResponse, Responder};

use crate::server::AppContext;

pub async fn health_check_route(ctx: web::Data<AppContext>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "name": ctx.config.name,
        "version": ctx.config.version,
    }))
}
