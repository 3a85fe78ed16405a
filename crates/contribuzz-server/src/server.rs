//! Server module.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use contribuzz_config::Config;
use contribuzz_core::{CoreContext, CoreModule};
use contribuzz_ghapi_github::GithubApiService;
use contribuzz_ghapi_interface::ApiService;
use contribuzz_mailer_interface::MailerService;
use contribuzz_mailer_smtp::SmtpMailerService;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    api::configure_api_handlers, health::health_check_route, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
    /// Mailer adapter
    pub mailer_service: Box<dyn MailerService>,
}

impl AppContext {
    /// Create new app context with the default drivers.
    pub fn new(config: Config, core_module: CoreModule) -> Result<Self> {
        let mailer_service = SmtpMailerService::new(&config)
            .map_err(|e| ServerError::MailerError { source: e })?;

        Ok(Self {
            config: config.clone(),
            core_module,
            api_service: Box::new(GithubApiService::new(config)),
            mailer_service: Box::new(mailer_service),
        })
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService + Send + Sync>,
        mailer_service: Box<dyn MailerService + Send + Sync>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
            mailer_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            mailer_service: self.mailer_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(
            web::scope("/api")
                .wrap(Cors::permissive())
                .configure(configure_api_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on contribuzz!" }))
            }),
        )
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
