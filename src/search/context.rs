use std::sync::Arc;

use tracing::{debug, error};

use crate::error::SearchError;
use crate::search::search_manager::{SearchEvent, SearchManager};

/// Where user facing error notifications go, e.g. a status bar or a notification balloon
pub trait ErrorReporter: Send + Sync {
    fn report_error(&self, message: &str);
}

/// Everything a search UI needs, wired up once by the host application and passed down
pub struct MavenSearchContext {
    search_manager: SearchManager,
    error_reporter: Arc<dyn ErrorReporter>,
}

impl MavenSearchContext {
    pub fn new(search_manager: SearchManager, error_reporter: Arc<dyn ErrorReporter>) -> MavenSearchContext {
        MavenSearchContext {
            search_manager,
            error_reporter,
        }
    }

    pub fn search_manager(&self) -> &SearchManager {
        &self.search_manager
    }

    /// Logs the error with its causes and shows the short message to the user. Cancellations are
    ///  not reported.
    pub fn error_notify(&self, message: &str, search_error: &SearchError) {
        if search_error.is_cancelled() {
            debug!("not reporting cancellation: {}", message);
            return;
        }

        error!("{} ({})", message, search_error.detailed_message());
        self.error_reporter.report_error(message);
    }

    /// Reports failure events, returns whether the event was one
    pub fn notify_failure(&self, event: &SearchEvent) -> bool {
        match event {
            SearchEvent::SearchFailed { error, .. } | SearchEvent::DownloadFailed { error, .. } => {
                self.error_notify(&format!("{} See the log for details.", error), error);
                true
            }
            _ => false,
        }
    }
}
