//! Subscriber handler.

use actix_web::{web, HttpResponse, Result as ActixResult};
use contribuzz_core::use_cases::subscribers::{AddSubscriberInterface, AddSubscriberOutcome};
use serde::Deserialize;
use shaku::HasComponent;
use tracing::error;

use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct AddSubscriberJson {
    email: String,
}

#[tracing::instrument(skip_all)]
pub(crate) async fn add_subscriber(
    ctx: web::Data<AppContext>,
    data: web::Json<AddSubscriberJson>,
) -> ActixResult<HttpResponse> {
    let add_subscriber: &dyn AddSubscriberInterface = ctx.core_module.resolve_ref();
    match add_subscriber.run(&ctx.as_core_context(), &data.email).await {
        Ok(AddSubscriberOutcome::Added) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Thank you for subscribing!"
        }))),
        // A duplicate is a rejected submission, not a failure.
        Ok(AddSubscriberOutcome::AlreadySubscribed) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Email already exists in the notification list."
            })))
        }
        Err(err) => {
            error!(error = %err, message = "Error adding subscriber");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "An error occurred. Please try again."
            })))
        }
    }
}
