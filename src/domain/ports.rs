use crate::domain::model::{AssignmentResult, PreparedRun};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// File names (not paths) directly under the storage root that start with `prefix`.
    fn list_files(
        &self,
        prefix: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Location of `path` as reported to the user.
    fn display_path(&self, path: &str) -> String;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn prepare(&self) -> Result<PreparedRun>;
    async fn assign(&self, run: PreparedRun) -> Result<AssignmentResult>;
    async fn publish(&self, result: AssignmentResult) -> Result<String>;
    /// Returns the number of temporary files removed.
    async fn cleanup(&self) -> Result<usize>;
}
