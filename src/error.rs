use thiserror::Error;

/// Failure of a search or download as seen by callers of the search engine and manager.
///
/// Transport and parse problems are always wrapped into [SearchError::Failed] at the engine
///  boundary, so callers never see raw `hyper` or `serde_json` errors. Cancellation is a separate
///  variant because it is an expected outcome and must not be reported to the user.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("cancelled")]
    Cancelled,
}
impl SearchError {
    pub fn failed(message: impl Into<String>, source: impl Into<anyhow::Error>) -> SearchError {
        SearchError::Failed {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }

    /// The message followed by the whole cause chain, for logging
    pub fn detailed_message(&self) -> String {
        match self {
            SearchError::Failed { message, source } => format!("{}: {:#}", message, source),
            SearchError::Cancelled => "cancelled".to_string(),
        }
    }
}

/// Violation of the invariants of a [crate::search::SearchResult]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSearchResult {
    #[error("negative total available records: {0}")]
    NegativeTotal(i64),
    #[error("negative offset: {0}")]
    NegativeOffset(i64),
    #[error("offset out of range ({offset}/{total})")]
    OffsetOutOfRange { offset: i64, total: i64 },
}
