use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;
use crate::maven::coordinates::{Artifact, ArtifactModule};
use crate::search::search_handler::SearchHandler;
use crate::search::search_result::SearchResult;

/// Bytes written to the sink so far, and the expected size if the server announced it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadProgress {
    pub transferred: u64,
    pub total: Option<u64>,
}

/// A search provider for Maven artifacts.
///
/// All operations are cancelable: the token is checked before a request is sent and while waiting
///  for the response, and a cancelled operation returns [SearchError::Cancelled]. Every other
///  failure is reported as [SearchError::Failed].
#[async_trait]
pub trait ArtifactSearchEngine: Send + Sync {
    /// The user selectable dialects, in presentation order
    fn search_handlers(&self) -> Vec<Arc<dyn SearchHandler>>;

    fn active_search_handler(&self) -> Arc<dyn SearchHandler>;

    fn set_active_search_handler(&self, search_handler: Arc<dyn SearchHandler>);

    fn search_handler(&self, title: &str) -> Option<Arc<dyn SearchHandler>> {
        self.search_handlers().into_iter().find(|h| h.title() == title)
    }

    async fn search_artifact_modules(
        &self,
        query: &str,
        offset: u64,
        search_handler: Arc<dyn SearchHandler>,
        cancel: &CancellationToken,
    ) -> Result<SearchResult<ArtifactModule>, SearchError>;

    fn search_artifact_modules_task_title(&self, query: &str) -> String;

    /// All versions of a single module
    async fn search_artifacts(
        &self,
        group_id: &str,
        artifact_id: &str,
        offset: u64,
        cancel: &CancellationToken,
    ) -> Result<SearchResult<Artifact>, SearchError>;

    fn search_artifacts_task_title(&self, group_id: &str, artifact_id: &str) -> String;

    /// Streams one of the artifact's files into `sink`, reporting progress after every chunk.
    ///  Returns the number of bytes written.
    async fn download_artifact_file(
        &self,
        artifact: &Artifact,
        file_name: &str,
        sink: &mut (dyn AsyncWrite + Send + Unpin),
        progress: &(dyn Fn(DownloadProgress) + Send + Sync),
        cancel: &CancellationToken,
    ) -> Result<u64, SearchError>;

    fn group_id_browse_url(&self, group_id: &str) -> String;

    fn artifact_id_browse_url(&self, group_id: &str, artifact_id: &str) -> String;

    fn version_browse_url(&self, group_id: &str, artifact_id: &str, version: &str) -> String;
}
