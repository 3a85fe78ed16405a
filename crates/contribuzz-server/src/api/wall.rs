//! Wall redirect handler.

use std::str::FromStr;

use actix_web::{http::header, web, HttpResponse, Result as ActixResult};
use contribuzz_core::use_cases::walls::ResolveWallUrlInterface;
use contribuzz_models::{RepositoryPath, WallKind};
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct WallQuery {
    repo: Option<String>,
    #[serde(rename = "onlyAvatars")]
    only_avatars: Option<String>,
}

#[tracing::instrument(skip_all, fields(repo = ?query.repo, only_avatars = ?query.only_avatars))]
pub(crate) async fn resolve_wall(
    ctx: web::Data<AppContext>,
    query: web::Query<WallQuery>,
) -> ActixResult<HttpResponse> {
    let repo = match query.repo.as_deref().filter(|repo| !repo.is_empty()) {
        Some(repo) => repo,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Repo parameter is missing"
            })))
        }
    };

    let repository_path = match RepositoryPath::from_str(repo) {
        Ok(path) => path,
        Err(error) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": error.to_string()
            })))
        }
    };

    let kind = WallKind::from_only_avatars(query.only_avatars.as_deref() == Some("true"));

    let resolve_wall_url: &dyn ResolveWallUrlInterface = ctx.core_module.resolve_ref();
    let url = resolve_wall_url
        .run(&ctx.as_core_context(), &repository_path, kind)
        .await
        .map_err(|e| ServerError::DomainError { source: e })?;

    match url {
        Some(url) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish()),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Image not found"
        }))),
    }
}
