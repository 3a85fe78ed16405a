//! Feedback handler.

use actix_web::{web, HttpResponse, Result as ActixResult};
use contribuzz_core::use_cases::feedback::SendFeedbackInterface;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::error;

use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct SendFeedbackJson {
    email: String,
    feedback: String,
}

#[tracing::instrument(skip_all)]
pub(crate) async fn send_feedback(
    ctx: web::Data<AppContext>,
    data: web::Json<SendFeedbackJson>,
) -> ActixResult<HttpResponse> {
    let send_feedback: &dyn SendFeedbackInterface = ctx.core_module.resolve_ref();
    match send_feedback
        .run(&ctx.as_core_context(), &data.email, &data.feedback)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Feedback sent successfully"
        }))),
        Err(err) => {
            error!(error = %err, message = "Error sending feedback");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "An error occurred. Please try again."
            })))
        }
    }
}
