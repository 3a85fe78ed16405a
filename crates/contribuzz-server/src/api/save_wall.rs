//! Wall image save handlers.

use actix_web::{web, HttpResponse, Result as ActixResult};
use contribuzz_core::use_cases::walls::PublishWallImageInterface;
use contribuzz_models::WallKind;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::error;

use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct SaveWallJson {
    #[serde(rename = "fileName")]
    file_name: String,
    #[serde(rename = "imageDataUrl")]
    image_data_url: String,
}

#[tracing::instrument(skip_all, fields(file_name = data.file_name))]
pub(crate) async fn save_full_wall(
    ctx: web::Data<AppContext>,
    data: web::Json<SaveWallJson>,
) -> ActixResult<HttpResponse> {
    save_wall(
        ctx,
        data.into_inner(),
        WallKind::Full,
        "Full wall image saved successfully",
    )
    .await
}

#[tracing::instrument(skip_all, fields(file_name = data.file_name))]
pub(crate) async fn save_avatar_wall(
    ctx: web::Data<AppContext>,
    data: web::Json<SaveWallJson>,
) -> ActixResult<HttpResponse> {
    save_wall(
        ctx,
        data.into_inner(),
        WallKind::AvatarOnly,
        "Avatar wall image saved successfully",
    )
    .await
}

/// Any failure comes back as a 500 with an `error` body; validation
/// failures included, matching the historical route behavior.
async fn save_wall(
    ctx: web::Data<AppContext>,
    data: SaveWallJson,
    kind: WallKind,
    success_message: &str,
) -> ActixResult<HttpResponse> {
    let publish_wall_image: &dyn PublishWallImageInterface = ctx.core_module.resolve_ref();
    match publish_wall_image
        .run(
            &ctx.as_core_context(),
            kind,
            &data.file_name,
            &data.image_data_url,
        )
        .await
    {
        Ok(published) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "url": published.html_url,
            "message": success_message,
        }))),
        Err(err) => {
            error!(error = %err, message = "Error saving wall image");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": err.to_string()
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use contribuzz_ghapi_interface::{types::GhContentFile, MockApiService};
    use contribuzz_mailer_interface::MockMailerService;
    use pretty_assertions::assert_eq;

    use crate::testutils::test_app;

    const JPEG_DATA_URL: &str = "data:image/jpeg;base64,aGVsbG8=";

    #[actix_web::test]
    async fn saves_full_wall() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_contents_get()
            .once()
            .return_once(|_, _, _| Ok(None));
        api_service
            .expect_contents_create_or_update()
            .once()
            .withf(|_, _, path, message, _, sha| {
                path == "public/walls/foo-bar.jpg"
                    && message == "Upload foo-bar.jpg"
                    && sha.is_none()
            })
            .return_once(|_, _, path, _, _, _| {
                Ok(GhContentFile {
                    name: "foo-bar.jpg".into(),
                    path: path.into(),
                    sha: "abc".into(),
                    html_url: Some("https://github.test/walls/storage/foo-bar.jpg".into()),
                    download_url: None,
                })
            });

        let app = test_app(api_service, MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/save-full-wall")
            .set_json(serde_json::json!({
                "fileName": "foo-bar.jpg",
                "imageDataUrl": JPEG_DATA_URL,
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["message"], "Full wall image saved successfully");
        assert_eq!(body["url"], "https://github.test/walls/storage/foo-bar.jpg");
    }

    #[actix_web::test]
    async fn wrong_extension_fails() {
        let app = test_app(MockApiService::new(), MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/save-full-wall")
            .set_json(serde_json::json!({
                "fileName": "foo-bar.png",
                "imageDataUrl": JPEG_DATA_URL,
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains(".jpg"));
    }

    #[actix_web::test]
    async fn avatar_wall_requires_png_payload() {
        let app = test_app(MockApiService::new(), MockMailerService::new()).await;

        let request = test::TestRequest::post()
            .uri("/api/save-avatar-wall")
            .set_json(serde_json::json!({
                "fileName": "foo-bar(avatars).png",
                "imageDataUrl": JPEG_DATA_URL,
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
