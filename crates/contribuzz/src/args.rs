use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use contribuzz_config::{ApiDriver, Config, MailerDriver};
use contribuzz_core::CoreModule;
use contribuzz_ghapi_github::GithubApiService;
use contribuzz_ghapi_interface::ApiService;
use contribuzz_ghapi_null::NullApiService;
use contribuzz_mailer_interface::MailerService;
use contribuzz_mailer_null::NullMailerService;
use contribuzz_mailer_smtp::SmtpMailerService;
use contribuzz_sentry::with_sentry_configuration;
use tokio::sync::RwLock;
use tracing::info;

use crate::commands::{Command, CommandContext, SubCommand};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using GithubApiService API driver");
                    Box::new(GithubApiService::new(config.clone()))
                } else {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let mailer_service: Box<dyn MailerService + Send + Sync + 'static> = {
                if config.mailer.driver == MailerDriver::Smtp {
                    info!("Using SmtpMailerService mailer driver");
                    Box::new(SmtpMailerService::new(&config)?)
                } else {
                    info!("Using NullMailerService mailer driver");
                    Box::new(NullMailerService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
                mailer_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config.clone(), || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
