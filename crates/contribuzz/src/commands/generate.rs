use std::io::Write as _;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use contribuzz_core::use_cases::{
    embed::BuildEmbedSnippetInterface,
    walls::GenerateWallInterface,
};
use contribuzz_models::{RepositoryPath, WallKind};
use shaku::HasComponent;

use super::{Command, CommandContext};

/// Generate and publish the walls of a repository
#[derive(Parser)]
pub(crate) struct GenerateCommand {
    /// Repository path (e.g. `owner/name`)
    repository_path: RepositoryPath,
}

#[async_trait]
impl Command for GenerateCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let walls = {
            let core_ctx = ctx.as_core_context();
            let generate_wall: &dyn GenerateWallInterface = ctx.core_module.resolve_ref();
            generate_wall.run(&core_ctx, &self.repository_path).await?
        };

        let (full_snippet, avatars_snippet) = {
            let core_ctx = ctx.as_core_context();
            let build_embed_snippet: &dyn BuildEmbedSnippetInterface =
                ctx.core_module.resolve_ref();
            (
                build_embed_snippet.run(&core_ctx, &self.repository_path, WallKind::Full),
                build_embed_snippet.run(&core_ctx, &self.repository_path, WallKind::AvatarOnly),
            )
        };

        let mut writer = ctx.writer.write().await;
        writeln!(
            writer,
            "Published full wall: {}",
            walls.full.html_url.as_deref().unwrap_or(&walls.full.path)
        )?;
        writeln!(
            writer,
            "Published avatar wall: {}",
            walls
                .avatars
                .html_url
                .as_deref()
                .unwrap_or(&walls.avatars.path)
        )?;
        writeln!(writer, "\nFull wall embed:{full_snippet}")?;
        writeln!(writer, "Avatar wall embed:{avatars_snippet}")?;

        Ok(())
    }
}
