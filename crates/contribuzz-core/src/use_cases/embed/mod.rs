pub mod build_embed_snippet;

pub use build_embed_snippet::BuildEmbedSnippetInterface;
#[cfg(any(test, feature = "testkit"))]
pub use build_embed_snippet::MockBuildEmbedSnippetInterface;
