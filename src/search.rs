pub mod artifact_search_engine;
pub mod context;
pub mod maven_central;
pub mod result_pages;
pub mod search_handler;
pub mod search_manager;
pub mod search_result;

pub use artifact_search_engine::{ArtifactSearchEngine, DownloadProgress};
pub use context::{ErrorReporter, MavenSearchContext};
pub use result_pages::{NextPage, ResultPages};
pub use search_handler::{QueryValidation, SearchHandler};
pub use search_manager::{DownloadId, SearchEvent, SearchManager, SearchTicket};
pub use search_result::SearchResult;
