//! Commands.

use std::{io::Write, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use contribuzz_config::Config;
use contribuzz_core::{CoreContext, CoreModule};
use contribuzz_ghapi_interface::ApiService;
use contribuzz_mailer_interface::MailerService;
use tokio::sync::RwLock;

use self::{generate::GenerateCommand, server::ServerCommand};

mod generate;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub mailer_service: Box<dyn MailerService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            mailer_service: self.mailer_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Generate(GenerateCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Generate(sub) => sub.execute(ctx).await,
        }
    }
}
