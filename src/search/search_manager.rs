use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::AsyncWrite;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::error::SearchError;
use crate::maven::coordinates::{Artifact, ArtifactModule};
use crate::search::artifact_search_engine::{ArtifactSearchEngine, DownloadProgress};
use crate::search::search_handler::SearchHandler;
use crate::search::search_result::SearchResult;

/// Notifications from background searches and downloads.
///
/// For every search, exactly one of the result events or [SearchEvent::SearchFailed] is sent,
///  followed by [SearchEvent::SearchFinished]. A search that was cancelled only sends
///  [SearchEvent::SearchFinished].
#[derive(Debug)]
pub enum SearchEvent {
    ArtifactModulesFound { ticket: SearchTicket, result: SearchResult<ArtifactModule> },
    ArtifactsFound { ticket: SearchTicket, result: SearchResult<Artifact> },
    SearchFailed { ticket: SearchTicket, error: SearchError },
    SearchFinished { ticket: SearchTicket },
    DownloadProgress { download: DownloadId, progress: DownloadProgress },
    DownloadFailed { download: DownloadId, error: SearchError },
}

/// Identifies a search started by a [SearchManager]. Tickets are equal if they belong to the
///  same search.
#[derive(Clone, Debug)]
pub struct SearchTicket {
    id: u64,
    cancel: CancellationToken,
}
impl SearchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
impl PartialEq for SearchTicket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for SearchTicket {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DownloadId(Uuid);
impl DownloadId {
    fn new() -> DownloadId {
        DownloadId(Uuid::new_v4())
    }
}
impl Display for DownloadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sends events unless the manager was shut down
#[derive(Clone)]
struct EventSender {
    events: UnboundedSender<SearchEvent>,
    shutdown: CancellationToken,
}
impl EventSender {
    fn send(&self, event: SearchEvent) {
        if self.shutdown.is_cancelled() {
            trace!("shut down, dropping {:?}", event);
            return;
        }
        if self.events.send(event).is_err() {
            trace!("event receiver was dropped");
        }
    }
}

/// Runs searches and downloads of an [ArtifactSearchEngine] in the background and reports their
///  outcome as [SearchEvent]s.
///
/// At most one search is current: starting a search cancels the previous one before the new one
///  is registered. A cancelled search may still be winding down when the next one starts, and
///  results that arrive for it are tagged with its ticket - use [SearchManager::is_current] to
///  discard them. Downloads are independent of searches and of each other.
pub struct SearchManager {
    engine: Arc<dyn ArtifactSearchEngine>,
    runtime: Handle,
    sender: EventSender,
    shutdown: CancellationToken,
    next_search_id: AtomicU64,
    current_search: Mutex<Option<SearchTicket>>,
    downloads: Arc<Mutex<HashMap<DownloadId, CancellationToken>>>,
}

impl SearchManager {
    /// The receiver is meant to be drained by a single coordinating task, which sees all events
    ///  in the order they were sent.
    pub fn new(engine: Arc<dyn ArtifactSearchEngine>, runtime: Handle) -> (SearchManager, UnboundedReceiver<SearchEvent>) {
        let (events, receiver) = unbounded_channel();
        let shutdown = CancellationToken::new();

        let manager = SearchManager {
            engine,
            runtime,
            sender: EventSender {
                events,
                shutdown: shutdown.clone(),
            },
            shutdown,
            next_search_id: AtomicU64::new(1),
            current_search: Mutex::new(None),
            downloads: Default::default(),
        };
        (manager, receiver)
    }

    pub fn engine(&self) -> &Arc<dyn ArtifactSearchEngine> {
        &self.engine
    }

    pub fn search_artifact_modules_async(&self, query: &str, offset: u64, search_handler: Arc<dyn SearchHandler>) -> SearchTicket {
        info!("{}", self.engine.search_artifact_modules_task_title(query));

        let query = query.to_string();
        self.start_search(
            move |engine, cancel| async move {
                engine.search_artifact_modules(&query, offset, search_handler, &cancel).await
            },
            |ticket, result| SearchEvent::ArtifactModulesFound { ticket, result },
        )
    }

    pub fn search_artifacts_async(&self, group_id: &str, artifact_id: &str, offset: u64) -> SearchTicket {
        info!("{}", self.engine.search_artifacts_task_title(group_id, artifact_id));

        let group_id = group_id.to_string();
        let artifact_id = artifact_id.to_string();
        self.start_search(
            move |engine, cancel| async move {
                engine.search_artifacts(&group_id, &artifact_id, offset, &cancel).await
            },
            |ticket, result| SearchEvent::ArtifactsFound { ticket, result },
        )
    }

    fn start_search<T, F, Fut>(&self, search: F, found: fn(SearchTicket, SearchResult<T>) -> SearchEvent) -> SearchTicket
    where
        F: FnOnce(Arc<dyn ArtifactSearchEngine>, CancellationToken) -> Fut,
        Fut: Future<Output = Result<SearchResult<T>, SearchError>> + Send + 'static,
        T: Send + 'static,
    {
        let mut current_search = self.current_search.lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = current_search.take() {
            debug!("cancelling search #{}", previous.id);
            previous.cancel.cancel();
        }

        let ticket = SearchTicket {
            id: self.next_search_id.fetch_add(1, Ordering::Relaxed),
            cancel: self.shutdown.child_token(),
        };
        *current_search = Some(ticket.clone());

        let task = search(self.engine.clone(), ticket.cancel.clone());
        let sender = self.sender.clone();
        let task_ticket = ticket.clone();
        self.runtime.spawn(async move {
            let result = task.await;

            if task_ticket.is_cancelled() {
                debug!("search #{} was cancelled", task_ticket.id);
            }
            else {
                match result {
                    Ok(result) => {
                        debug!("search #{}: {}", task_ticket.id, result.summary());
                        sender.send(found(task_ticket.clone(), result));
                    }
                    Err(SearchError::Cancelled) => {
                        debug!("search #{} was cancelled", task_ticket.id);
                    }
                    Err(error) => {
                        warn!("search #{} failed: {}", task_ticket.id, error.detailed_message());
                        sender.send(SearchEvent::SearchFailed { ticket: task_ticket.clone(), error });
                    }
                }
            }

            sender.send(SearchEvent::SearchFinished { ticket: task_ticket });
        });

        ticket
    }

    /// Cancels the current search, if any
    pub fn cancel_search(&self) {
        let previous = self.current_search.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(previous) = previous {
            debug!("cancelling search #{}", previous.id);
            previous.cancel.cancel();
        }
    }

    /// Whether the ticket belongs to the most recently started search, and that search was not
    ///  cancelled
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.current_search.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref() == Some(ticket)
    }

    /// Downloads a file of an artifact in the background. Progress and failure are reported as
    ///  events; the download succeeded if the task ends without a [SearchEvent::DownloadFailed].
    pub fn download_artifact_file_async(&self, artifact: Artifact, file_name: &str, mut sink: Box<dyn AsyncWrite + Send + Unpin>) -> DownloadId {
        let download = DownloadId::new();
        let cancel = self.shutdown.child_token();
        self.downloads.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(download, cancel.clone());

        info!("download {}: {} of {}", download, file_name, artifact.coordinates());

        let engine = self.engine.clone();
        let downloads = self.downloads.clone();
        let sender = self.sender.clone();
        let file_name = file_name.to_string();
        self.runtime.spawn(async move {
            let progress_sender = sender.clone();
            let progress = move |progress: DownloadProgress| {
                progress_sender.send(SearchEvent::DownloadProgress { download, progress });
            };

            let result = engine.download_artifact_file(&artifact, &file_name, sink.as_mut(), &progress, &cancel).await;

            downloads.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&download);

            match result {
                Ok(num_bytes) => debug!("download {}: finished after {} bytes", download, num_bytes),
                Err(SearchError::Cancelled) => debug!("download {}: cancelled", download),
                Err(error) => {
                    warn!("download {} failed: {}", download, error.detailed_message());
                    sender.send(SearchEvent::DownloadFailed { download, error });
                }
            }
        });

        download
    }

    /// Returns false if the download is unknown or already finished
    pub fn cancel_download(&self, download: DownloadId) -> bool {
        let cancel = self.downloads.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&download);

        match cancel {
            Some(cancel) => {
                debug!("cancelling download {}", download);
                cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancels all searches and downloads. No events are sent after this.
    pub fn shutdown(&self) {
        info!("shutting down search manager");
        self.shutdown.cancel();
        self.current_search.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl Drop for SearchManager {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
