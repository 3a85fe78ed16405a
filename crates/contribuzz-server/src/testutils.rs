//! Test helpers.

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test,
    web::Data,
};
use contribuzz_config::Config;
use contribuzz_core::CoreModule;
use contribuzz_ghapi_interface::MockApiService;
use contribuzz_mailer_interface::MockMailerService;

use crate::server::{build_actix_app, AppContext};

pub(crate) fn test_config() -> Config {
    let mut config = Config::from_env_no_version();
    config.wall.publish_owner = "walls".into();
    config.wall.publish_repo = "storage".into();
    config.subscribers.gist_id = "gist123".into();
    config
}

pub(crate) async fn test_app(
    api_service: MockApiService,
    mailer_service: MockMailerService,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let context = AppContext::new_with_adapters(
        test_config(),
        CoreModule::builder().build(),
        Box::new(api_service),
        Box::new(mailer_service),
    );

    test::init_service(build_actix_app(Data::new(context))).await
}
