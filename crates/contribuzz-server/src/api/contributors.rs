//! Contributor list handler.

use actix_web::{http::StatusCode, web, HttpResponse, Result as ActixResult};
use contribuzz_core::{use_cases::contributors::FetchContributorsInterface, DomainError};
use contribuzz_ghapi_interface::ApiError;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::error;

use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct FetchContributorsJson {
    #[serde(rename = "repoUrl")]
    repo_url: Option<String>,
}

#[tracing::instrument(skip_all, fields(repo_url = ?data.repo_url))]
pub(crate) async fn fetch_contributors(
    ctx: web::Data<AppContext>,
    data: web::Json<FetchContributorsJson>,
) -> ActixResult<HttpResponse> {
    let repo_url = match data.repo_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Repository URL not provided"
            })))
        }
    };

    let fetch_contributors: &dyn FetchContributorsInterface = ctx.core_module.resolve_ref();
    match fetch_contributors.run(&ctx.as_core_context(), repo_url).await {
        Ok(contributors) => Ok(HttpResponse::Ok().json(contributors)),
        Err(DomainError::InvalidRepositoryPath { .. }) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Invalid repository URL format. Use \"owner/repoName\"."
            })))
        }
        Err(DomainError::ApiError {
            source: ApiError::GitHubResponse { status, message },
        }) => {
            // Forward the upstream status and message.
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(serde_json::json!({
                "message": format!("Error {}: {}", status.as_u16(), message)
            })))
        }
        Err(err) => {
            error!(error = %err, message = "Error fetching contributors");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Failed to fetch contributors"
            })))
        }
    }
}
