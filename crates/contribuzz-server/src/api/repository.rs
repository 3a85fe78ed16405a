//! Repository metadata handler.

use std::str::FromStr;

use actix_web::{http::StatusCode, web, HttpResponse, Result as ActixResult};
use contribuzz_core::{use_cases::repositories::GetRepositoryInfoInterface, DomainError};
use contribuzz_ghapi_interface::ApiError;
use contribuzz_models::RepositoryPath;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::error;

use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct GithubRepoJson {
    repo: Option<String>,
}

#[tracing::instrument(skip_all, fields(repo = ?data.repo))]
pub(crate) async fn github_repo(
    ctx: web::Data<AppContext>,
    data: web::Json<GithubRepoJson>,
) -> ActixResult<HttpResponse> {
    let repo = match data.repo.as_deref().filter(|repo| !repo.is_empty()) {
        Some(repo) => repo,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Repository not specified"
            })))
        }
    };

    let repository_path = match RepositoryPath::from_str(repo) {
        Ok(path) => path,
        Err(error) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": error.to_string()
            })))
        }
    };

    let get_repository_info: &dyn GetRepositoryInfoInterface = ctx.core_module.resolve_ref();
    match get_repository_info
        .run(&ctx.as_core_context(), &repository_path)
        .await
    {
        Ok(info) => Ok(HttpResponse::Ok().json(info)),
        Err(DomainError::ApiError {
            source: ApiError::GitHubResponse { status, message },
        }) => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(serde_json::json!({ "message": message })))
        }
        Err(err) => {
            error!(error = %err, message = "Error fetching repository");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "An unexpected error occurred"
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use contribuzz_ghapi_interface::{types::GhRepositoryInfo, ApiError, MockApiService};
    use contribuzz_mailer_interface::MockMailerService;
    use pretty_assertions::assert_eq;

    use crate::testutils::test_app;

    #[actix_web::test]
    async fn returns_repository_metadata() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repository_get()
            .once()
            .withf(|owner, name| owner == "foo" && name == "bar")
            .return_once(|_, _| {
                Ok(GhRepositoryInfo {
                    name: "bar".into(),
                    full_name: "foo/bar".into(),
                    stargazers_count: 7,
                    ..GhRepositoryInfo::default()
                })
            });

        let app = test_app(api_service, MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/githubRepo")
            .set_json(serde_json::json!({"repo": "foo/bar"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["full_name"], "foo/bar");
        assert_eq!(body["stargazers_count"], 7);
    }

    #[actix_web::test]
    async fn missing_repo_is_a_bad_request() {
        let app = test_app(MockApiService::new(), MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/githubRepo")
            .set_json(serde_json::json!({}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn propagates_upstream_status() {
        let mut api_service = MockApiService::new();
        api_service.expect_repository_get().once().return_once(|_, _| {
            Err(ApiError::GitHubResponse {
                status: 404,
                message: "Not Found".into(),
            })
        });

        let app = test_app(api_service, MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/githubRepo")
            .set_json(serde_json::json!({"repo": "foo/bar"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
