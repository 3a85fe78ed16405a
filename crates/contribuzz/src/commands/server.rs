use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use contribuzz_server::server::{run_server, AppContext};

use super::{Command, CommandContext};

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let context = AppContext::new_with_adapters(
                ctx.config,
                ctx.core_module,
                ctx.api_service,
                ctx.mailer_service,
            );

            run_server(context).await.unwrap();
        })
        .await?;

        Ok(())
    }
}
