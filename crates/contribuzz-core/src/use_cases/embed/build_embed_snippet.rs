use contribuzz_models::{RepositoryPath, WallKind};
use shaku::{Component, Interface};

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait BuildEmbedSnippetInterface: Interface {
    /// Build the HTML fragment users paste into a README. The image
    /// points at the wall redirect route, so the embed always shows the
    /// latest published wall.
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        kind: WallKind,
    ) -> String;
}

#[derive(Component)]
#[shaku(interface = BuildEmbedSnippetInterface)]
pub(crate) struct BuildEmbedSnippet;

impl BuildEmbedSnippetInterface for BuildEmbedSnippet {
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        kind: WallKind,
    ) -> String {
        let repo = repository_path.full_name();
        let site_url = &ctx.config.wall.site_url;
        let query_suffix = match kind {
            WallKind::Full => "",
            WallKind::AvatarOnly => "&onlyAvatars=true",
        };

        format!(
            r#"
<h1 align="center">Contributors' Wall</h1>

<a href="https://github.com/{repo}/graphs/contributors">
    <img src="{site_url}/api/wall?repo={repo}{query_suffix}" alt="Contributors' Wall for {repo}" />
</a>

<br />
<br />

<p align="center">
    Make your Contributors' Wall with <a href="{site_url}/"><i>Contri.Buzz</i></a>
</p>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use contribuzz_models::{RepositoryPath, WallKind};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[test]
    fn run_builds_full_wall_snippet() {
        let ctx = CoreContextTest::new();
        let snippet = BuildEmbedSnippet.run(
            &ctx.as_context(),
            &RepositoryPath::new("facebook/react").unwrap(),
            WallKind::Full,
        );

        assert!(snippet
            .contains(r#"<img src="https://contri.buzz/api/wall?repo=facebook/react" alt="Contributors' Wall for facebook/react" />"#));
        assert!(snippet.contains(r#"<a href="https://github.com/facebook/react/graphs/contributors">"#));
    }

    #[test]
    fn run_builds_avatar_wall_snippet() {
        let ctx = CoreContextTest::new();
        let snippet = BuildEmbedSnippet.run(
            &ctx.as_context(),
            &RepositoryPath::new("facebook/react").unwrap(),
            WallKind::AvatarOnly,
        );

        assert!(snippet.contains("/api/wall?repo=facebook/react&onlyAvatars=true"));
    }

    #[test]
    fn snippets_differ_only_in_query() {
        let ctx = CoreContextTest::new();
        let path = RepositoryPath::new("foo/bar").unwrap();
        let full = BuildEmbedSnippet.run(&ctx.as_context(), &path, WallKind::Full);
        let avatars = BuildEmbedSnippet.run(&ctx.as_context(), &path, WallKind::AvatarOnly);

        assert_eq!(
            avatars.replace("&onlyAvatars=true", ""),
            full
        );
    }
}
