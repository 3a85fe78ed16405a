pub mod get_repository_info;

pub use get_repository_info::GetRepositoryInfoInterface;
#[cfg(any(test, feature = "testkit"))]
pub use get_repository_info::MockGetRepositoryInfoInterface;
