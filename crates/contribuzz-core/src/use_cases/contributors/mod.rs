pub mod fetch_contributors;

pub use fetch_contributors::FetchContributorsInterface;
#[cfg(any(test, feature = "testkit"))]
pub use fetch_contributors::MockFetchContributorsInterface;
