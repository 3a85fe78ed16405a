//! Access log handler.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

fn header_or_unknown<'a>(req: &'a HttpRequest, name: &str) -> &'a str {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("Unknown")
}

pub(crate) async fn log_visit(req: HttpRequest) -> ActixResult<HttpResponse> {
    let ip = req
        .headers()
        .get("x-forwarded-for")
        .or_else(|| req.headers().get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .unwrap_or("Unknown");
    let user_agent = header_or_unknown(&req, "user-agent");

    info!(ip, user_agent, message = "API /api/log visited");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Log saved successfully"
    })))
}
