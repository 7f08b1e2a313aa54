//! Search provider for the Solr API of search.maven.org

pub mod advanced;
pub mod artifact_versions;
pub mod config;
pub mod keyword;
pub mod response;
pub mod simplified_coordinates;

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::anyhow;
use async_trait::async_trait;
use futures::StreamExt;
use hyper::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

use crate::error::SearchError;
use crate::maven::coordinates::{Artifact, ArtifactModule};
use crate::maven::paths::{repository_path, BrowseUrls};
use crate::search::artifact_search_engine::{ArtifactSearchEngine, DownloadProgress};
use crate::search::search_handler::SearchHandler;
use crate::search::search_result::SearchResult;
use crate::util::http_client::HttpClient;

pub use advanced::AdvancedSearchHandler;
pub use artifact_versions::ArtifactVersionsSearchHandler;
pub use config::MavenCentralConfig;
pub use keyword::KeywordSearchHandler;
use response::{parse_search_response, FromSearchDocument};
pub use simplified_coordinates::SimplifiedCoordinatesSearchHandler;

/// Coordinate keys of the Solr index, in the order of Maven coordinates
pub(crate) const TERM_KEYS: [&str; 5] = ["g", "a", "v", "p", "l"];

const SORT_ORDER: &str = "g asc, a asc, v asc";

lazy_static! {
    pub(crate) static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

pub(crate) fn split_whitespace_tokens(query: &str) -> impl Iterator<Item = &str> + '_ {
    WHITESPACE_REGEX.split(query)
        .filter(|token| !token.is_empty())
}

/// Form encoding for query parameter values. With `plus_encodes_space`, a '+' is kept as is and
///  arrives as a space.
fn encode_query_value(value: &str, plus_encodes_space: bool) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    if plus_encodes_space {
        encoded.replace("%2B", "+")
    }
    else {
        encoded
    }
}

async fn cancellable<T>(cancel: &CancellationToken, future: impl Future<Output = T>) -> Result<T, SearchError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SearchError::Cancelled),
        result = future => Ok(result),
    }
}

pub struct MavenCentralSearchEngine {
    config: MavenCentralConfig,
    http_client: HttpClient,
    browse_urls: BrowseUrls,
    /// host name for task titles
    search_host: String,
    search_handlers: Vec<Arc<dyn SearchHandler>>,
    active_search_handler: RwLock<Arc<dyn SearchHandler>>,
    artifact_versions_search_handler: Arc<dyn SearchHandler>,
}

impl MavenCentralSearchEngine {
    pub fn new(config: MavenCentralConfig) -> anyhow::Result<MavenCentralSearchEngine> {
        let search_url = Url::parse(&config.search_url)?;
        Url::parse(&config.download_url)?;
        Uri::try_from(config.browse_url.as_str())?;
        let search_host = search_url.host_str()
            .ok_or_else(|| anyhow!("search URL without host: {}", config.search_url))?
            .to_string();

        let search_handlers: Vec<Arc<dyn SearchHandler>> = vec![
            Arc::new(KeywordSearchHandler),
            Arc::new(SimplifiedCoordinatesSearchHandler),
            Arc::new(AdvancedSearchHandler::new()),
        ];
        let active_search_handler = RwLock::new(search_handlers[0].clone());

        Ok(MavenCentralSearchEngine {
            http_client: HttpClient::new(&config.user_agent),
            browse_urls: BrowseUrls::new(&config.browse_url),
            search_host,
            search_handlers,
            active_search_handler,
            artifact_versions_search_handler: Arc::new(ArtifactVersionsSearchHandler),
            config,
        })
    }

    fn search_url<T: FromSearchDocument>(&self, query: &str, offset: u64, search_handler: &dyn SearchHandler) -> anyhow::Result<Url> {
        let mut parameters = search_handler.parameters(query);
        parameters.insert("wt".to_string(), "json".to_string());
        parameters.insert("rows".to_string(), self.config.rows.to_string());
        parameters.insert("start".to_string(), offset.to_string());
        parameters.insert("sort".to_string(), SORT_ORDER.to_string());
        parameters.insert("fl".to_string(), T::FIELDS.to_string());

        let query_string = parameters.iter()
            .map(|(name, value)| format!(
                "{}={}",
                encode_query_value(name, false),
                encode_query_value(value, search_handler.plus_encodes_space()),
            ))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = Url::parse(&self.config.search_url)?;
        url.set_query(Some(&query_string));
        Ok(url)
    }

    async fn execute_search<T: FromSearchDocument>(
        &self,
        query: &str,
        offset: u64,
        search_handler: Arc<dyn SearchHandler>,
        cancel: &CancellationToken,
    ) -> Result<SearchResult<T>, SearchError> {
        let failed = |e: anyhow::Error| SearchError::failed(format!("Failed to search for '{}'.", query), e);

        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let url = self.search_url::<T>(query, offset, search_handler.as_ref())
            .map_err(failed)?;
        info!("searching maven artifacts with request {}", url);

        let body = cancellable(cancel, self.http_client.get_bytes(url.as_str(), "application/json")).await?
            .map_err(failed)?;

        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let result = parse_search_response::<T>(&body, query, search_handler)
            .map_err(failed)?;
        debug!("{}", result.summary());
        Ok(result)
    }

    fn download_url(&self, artifact: &Artifact, file_name: &str) -> anyhow::Result<Url> {
        let file_path = repository_path(&artifact.group_id, &artifact.artifact_id, artifact.version.as_str(), file_name);
        Ok(Url::parse_with_params(&self.config.download_url, &[("filepath", file_path)])?)
    }
}

#[async_trait]
impl ArtifactSearchEngine for MavenCentralSearchEngine {
    fn search_handlers(&self) -> Vec<Arc<dyn SearchHandler>> {
        self.search_handlers.clone()
    }

    fn active_search_handler(&self) -> Arc<dyn SearchHandler> {
        self.active_search_handler.read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_active_search_handler(&self, search_handler: Arc<dyn SearchHandler>) {
        debug!("active search handler: {}", search_handler.title());
        *self.active_search_handler.write()
            .unwrap_or_else(PoisonError::into_inner) = search_handler;
    }

    async fn search_artifact_modules(
        &self,
        query: &str,
        offset: u64,
        search_handler: Arc<dyn SearchHandler>,
        cancel: &CancellationToken,
    ) -> Result<SearchResult<ArtifactModule>, SearchError> {
        self.execute_search(query, offset, search_handler, cancel).await
    }

    fn search_artifact_modules_task_title(&self, query: &str) -> String {
        format!("Search for '{}' on {}...", query, self.search_host)
    }

    async fn search_artifacts(
        &self,
        group_id: &str,
        artifact_id: &str,
        offset: u64,
        cancel: &CancellationToken,
    ) -> Result<SearchResult<Artifact>, SearchError> {
        let query = ArtifactVersionsSearchHandler::query(group_id, artifact_id);
        self.execute_search(&query, offset, self.artifact_versions_search_handler.clone(), cancel).await
    }

    fn search_artifacts_task_title(&self, _group_id: &str, artifact_id: &str) -> String {
        format!("Load more versions of '{}' on {}...", artifact_id, self.search_host)
    }

    async fn download_artifact_file(
        &self,
        artifact: &Artifact,
        file_name: &str,
        sink: &mut (dyn AsyncWrite + Send + Unpin),
        progress: &(dyn Fn(DownloadProgress) + Send + Sync),
        cancel: &CancellationToken,
    ) -> Result<u64, SearchError> {
        let failed = |e: anyhow::Error| SearchError::failed(format!("Failed to download '{}'.", file_name), e);

        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let url = self.download_url(artifact, file_name)
            .map_err(failed)?;
        info!("downloading {}", url);

        let mut blob = cancellable(cancel, self.http_client.get_blob(url.as_str(), self.config.checksum_handling)).await?
            .map_err(failed)?;

        let mut transferred = 0u64;
        while let Some(chunk) = cancellable(cancel, blob.data.next()).await? {
            let chunk = chunk.map_err(failed)?;
            cancellable(cancel, sink.write_all(&chunk)).await?
                .map_err(|e| failed(e.into()))?;

            transferred += chunk.len() as u64;
            progress(DownloadProgress { transferred, total: blob.content_length });
        }
        sink.flush().await
            .map_err(|e| failed(e.into()))?;

        debug!("downloaded {} bytes of {}", transferred, file_name);
        Ok(transferred)
    }

    fn group_id_browse_url(&self, group_id: &str) -> String {
        self.browse_urls.group_id(group_id)
    }

    fn artifact_id_browse_url(&self, group_id: &str, artifact_id: &str) -> String {
        self.browse_urls.artifact_id(group_id, artifact_id)
    }

    fn version_browse_url(&self, group_id: &str, artifact_id: &str, version: &str) -> String {
        self.browse_urls.version(group_id, artifact_id, version)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;
    use std::time::Duration;

    use rstest::*;
    use sha1::{Digest, Sha1};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use tokio::io::AsyncReadExt;
    use tokio::runtime::Handle;
    use wiremock::matchers::{header, method, path, query_param};

    use crate::error::InvalidSearchResult;
    use crate::maven::coordinates::test::artifact;
    use crate::search::search_manager::{SearchEvent, SearchManager};
    use crate::util::http_client::ChecksumHandling;
    use super::*;

    const GUICE_RESPONSE: &str = r#"{
        "response": {
            "numFound": 1,
            "start": 0,
            "docs": [
                {
                    "g": "com.google.inject",
                    "a": "guice",
                    "latestVersion": "4.2.3",
                    "p": "jar",
                    "timestamp": 1584647910000,
                    "versionCount": 15,
                    "ec": [".jar", ".pom"]
                }
            ]
        }
    }"#;

    const GUICE_VERSIONS_RESPONSE: &str = r#"{
        "response": {
            "numFound": 115,
            "start": 100,
            "docs": [
                { "g": "com.google.inject", "a": "guice", "v": "4.2.2", "p": "jar", "timestamp": 1540000000000, "ec": [".jar"] }
            ]
        }
    }"#;

    fn engine(server: &MockServer) -> MavenCentralSearchEngine {
        engine_with_checksum_handling(server, ChecksumHandling::VerifyIfPresent)
    }

    fn engine_with_checksum_handling(server: &MockServer, checksum_handling: ChecksumHandling) -> MavenCentralSearchEngine {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        MavenCentralSearchEngine::new(MavenCentralConfig {
            search_url: format!("{}/solrsearch/select", server.uri()),
            download_url: format!("{}/remotecontent", server.uri()),
            checksum_handling,
            ..MavenCentralConfig::default()
        }).unwrap()
    }

    async fn download_guice_jar(engine: &MavenCentralSearchEngine, sink: &mut Vec<u8>) -> Result<u64, SearchError> {
        engine.download_artifact_file(
            &artifact("com.google.inject", "guice", "4.2.3"),
            "guice-4.2.3.jar",
            sink,
            &|_: DownloadProgress| {},
            &CancellationToken::new(),
        ).await
    }

    #[rstest]
    #[case::plain("guice", false, "guice")]
    #[case::literal_plus("c++", false, "c++")]
    #[case::plus_as_space("g:a+AND+a:b", true, "g:a AND a:b")]
    #[case::space("g:a AND a:b", false, "g:a AND a:b")]
    fn test_encode_query_value(#[case] value: &str, #[case] plus_encodes_space: bool, #[case] expected_decoded: &str) {
        let encoded = encode_query_value(value, plus_encodes_space);
        let decoded: Vec<(String, String)> = url::form_urlencoded::parse(format!("q={}", encoded).as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded, vec![("q".to_string(), expected_decoded.to_string())]);
    }

    #[test]
    fn test_split_whitespace_tokens() {
        let tokens: Vec<&str> = split_whitespace_tokens("  g:foo \t AND\na:bar ").collect();
        assert_eq!(tokens, vec!["g:foo", "AND", "a:bar"]);
    }

    #[tokio::test]
    async fn test_search_artifact_modules() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solrsearch/select"))
            .and(query_param("q", "g:com.google.inject AND a:guice"))
            .and(query_param("wt", "json"))
            .and(query_param("rows", "100"))
            .and(query_param("start", "0"))
            .and(query_param("sort", "g asc, a asc, v asc"))
            .and(query_param("fl", "g,a,latestVersion,p,ec,repositoryId,timestamp,versionCount"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GUICE_RESPONSE))
            .expect(1)
            .mount(&server)
            .await;

        let engine = engine(&server);
        let result = engine.search_artifact_modules(
            "com.google.inject:guice",
            0,
            Arc::new(SimplifiedCoordinatesSearchHandler),
            &CancellationToken::new(),
        ).await.unwrap();

        assert_eq!(result.query(), "com.google.inject:guice");
        assert_eq!(result.search_handler().title(), "Simplified Coordinates");
        assert_eq!(result.total_available_records(), 1);
        assert_eq!(result.records()[0].artifact_id, "guice");
        assert_eq!(result.records()[0].total_available_versions, 15);
    }

    #[tokio::test]
    async fn test_search_artifacts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solrsearch/select"))
            .and(query_param("q", "g:\"com.google.inject\" AND a:\"guice\""))
            .and(query_param("core", "gav"))
            .and(query_param("start", "100"))
            .and(query_param("fl", "g,a,v,p,ec,timestamp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GUICE_VERSIONS_RESPONSE))
            .expect(1)
            .mount(&server)
            .await;

        let engine = engine(&server);
        let result = engine.search_artifacts("com.google.inject", "guice", 100, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(result.offset(), 100);
        assert_eq!(result.records(), &[artifact("com.google.inject", "guice", "4.2.2")]);
        assert_eq!(result.records()[0].file_names, vec!["guice-4.2.2.jar"]);
    }

    #[tokio::test]
    async fn test_keyword_query_keeps_plus() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solrsearch/select"))
            .and(query_param("q", "c++"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GUICE_RESPONSE))
            .expect(1)
            .mount(&server)
            .await;

        let engine = engine(&server);
        let result = engine.search_artifact_modules("c++", 0, Arc::new(KeywordSearchHandler), &CancellationToken::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_offset_beyond_total() {
        let body = r#"{ "response": { "numFound": 15, "start": 100, "docs": [] } }"#;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let engine = engine(&server);
        let result = engine.search_artifacts("com.google.inject", "guice", 100, &CancellationToken::new()).await;

        match result {
            Err(SearchError::Failed { message, source }) => {
                assert_eq!(message, "Failed to search for 'g:\"com.google.inject\" AND a:\"guice\"'.");
                assert_eq!(source.downcast_ref::<InvalidSearchResult>(), Some(&InvalidSearchResult::OffsetOutOfRange { offset: 100, total: 15 }));
            }
            other => panic!("unexpected result {:?}", other.map(|r| r.summary())),
        }
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let engine = engine(&server);
        let result = engine.search_artifact_modules("guice", 0, Arc::new(KeywordSearchHandler), &CancellationToken::new()).await;

        match result {
            Err(SearchError::Failed { message, .. }) => assert_eq!(message, "Failed to search for 'guice'."),
            other => panic!("unexpected result {:?}", other.map(|r| r.summary())),
        }
    }

    #[tokio::test]
    async fn test_search_cancelled_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GUICE_RESPONSE))
            .expect(0)
            .mount(&server)
            .await;

        let cancel = CancellationToken::new();
        cancel.cancel();

        let engine = engine(&server);
        let result = engine.search_artifact_modules("guice", 0, Arc::new(KeywordSearchHandler), &cancel).await;
        assert!(matches!(result, Err(SearchError::Cancelled)));
    }

    #[tokio::test]
    async fn test_search_cancelled_while_waiting() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_string(GUICE_RESPONSE)
                .set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let cancel = CancellationToken::new();
        let cancel_later = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel_later.cancel();
        });

        let engine = engine(&server);
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            engine.search_artifact_modules("guice", 0, Arc::new(KeywordSearchHandler), &cancel),
        ).await.unwrap();
        assert!(matches!(result, Err(SearchError::Cancelled)));
    }

    #[tokio::test]
    async fn test_download() {
        let content = b"hello world";
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .and(query_param("filepath", "com/google/inject/guice/4.2.3/guice-4.2.3.jar"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("x-checksum-sha1", hex::encode(Sha1::digest(content)).as_str())
                .set_body_bytes(content.to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let progress = Mutex::new(Vec::new());
        let mut sink = Vec::new();

        let engine = engine(&server);
        let transferred = engine.download_artifact_file(
            &artifact("com.google.inject", "guice", "4.2.3"),
            "guice-4.2.3.jar",
            &mut sink,
            &|p: DownloadProgress| progress.lock().unwrap().push(p),
            &CancellationToken::new(),
        ).await.unwrap();

        assert_eq!(transferred, 11);
        assert_eq!(sink, content);
        assert_eq!(
            progress.lock().unwrap().last(),
            Some(&DownloadProgress { transferred: 11, total: Some(11) }),
        );
    }

    #[tokio::test]
    async fn test_download_checksum_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("x-checksum-sha1", "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed")
                .set_body_bytes(b"tampered".to_vec()))
            .mount(&server)
            .await;

        let mut sink = Vec::new();
        let engine = engine(&server);
        let result = engine.download_artifact_file(
            &artifact("com.google.inject", "guice", "4.2.3"),
            "guice-4.2.3.jar",
            &mut sink,
            &|_: DownloadProgress| {},
            &CancellationToken::new(),
        ).await;

        match result {
            Err(SearchError::Failed { message, .. }) => assert_eq!(message, "Failed to download 'guice-4.2.3.jar'."),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_requires_checksum() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"hello world".to_vec()))
            .mount(&server)
            .await;

        let mut sink = Vec::new();
        let engine = engine_with_checksum_handling(&server, ChecksumHandling::Require);
        let result = download_guice_jar(&engine, &mut sink).await;

        assert!(matches!(result, Err(SearchError::Failed { .. })));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_download_ignores_checksum() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("x-checksum-sha1", "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed")
                .set_body_bytes(b"tampered".to_vec()))
            .mount(&server)
            .await;

        let mut sink = Vec::new();
        let engine = engine_with_checksum_handling(&server, ChecksumHandling::Ignore);
        let result = download_guice_jar(&engine, &mut sink).await;

        assert_eq!(result.unwrap(), 8);
        assert_eq!(sink, b"tampered");
    }

    #[tokio::test]
    async fn test_download_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .respond_with(ResponseTemplate::new(302)
                .insert_header("location", "/maven2/com/google/inject/guice/4.2.3/guice-4.2.3.jar"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/maven2/com/google/inject/guice/4.2.3/guice-4.2.3.jar"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"hello world".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let mut sink = Vec::new();
        let engine = engine(&server);
        let result = download_guice_jar(&engine, &mut sink).await;

        assert_eq!(result.unwrap(), 11);
        assert_eq!(sink, b"hello world");
    }

    #[tokio::test]
    async fn test_cancel_download_while_streaming() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/remotecontent"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64 * 1024]))
            .mount(&server)
            .await;

        let engine: Arc<dyn ArtifactSearchEngine> = Arc::new(engine(&server));
        let (manager, mut events) = SearchManager::new(engine, Handle::current());

        // the sink only buffers a few bytes, so the download stalls until it is read
        let (sink, mut source) = tokio::io::duplex(16);
        let download = manager.download_artifact_file_async(artifact("com.google.inject", "guice", "4.2.3"), "guice-4.2.3.jar", Box::new(sink));

        let mut first_bytes = [0u8; 16];
        tokio::time::timeout(Duration::from_secs(5), source.read_exact(&mut first_bytes)).await.unwrap().unwrap();
        assert_eq!(first_bytes, [7u8; 16]);

        assert!(manager.cancel_download(download));

        while let Ok(Some(event)) = tokio::time::timeout(Duration::from_millis(300), events.recv()).await {
            assert!(!matches!(event, SearchEvent::DownloadFailed { .. }), "unexpected {:?}", event);
        }
        assert!(!manager.cancel_download(download));
    }

    #[tokio::test]
    async fn test_download_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let mut sink = Vec::new();
        let engine = engine(&server);
        let result = engine.download_artifact_file(
            &artifact("com.google.inject", "guice", "4.2.3"),
            "guice-4.2.3.jar",
            &mut sink,
            &|_: DownloadProgress| {},
            &CancellationToken::new(),
        ).await;

        assert!(matches!(result, Err(SearchError::Failed { .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_task_titles() {
        let engine = MavenCentralSearchEngine::new(MavenCentralConfig::default()).unwrap();

        assert_eq!(engine.search_artifact_modules_task_title("guice"), "Search for 'guice' on search.maven.org...");
        assert_eq!(engine.search_artifacts_task_title("com.google.inject", "guice"), "Load more versions of 'guice' on search.maven.org...");
    }

    #[test]
    fn test_browse_urls() {
        let engine = MavenCentralSearchEngine::new(MavenCentralConfig::default()).unwrap();

        assert_eq!(engine.group_id_browse_url("com.google.inject"), "https://repo1.maven.org/maven2/com/google/inject/");
        assert_eq!(engine.artifact_id_browse_url("com.google.inject", "guice"), "https://repo1.maven.org/maven2/com/google/inject/guice/");
        assert_eq!(engine.version_browse_url("com.google.inject", "guice", "4.2.3"), "https://repo1.maven.org/maven2/com/google/inject/guice/4.2.3/");
    }

    #[test]
    fn test_search_handlers() {
        let engine = MavenCentralSearchEngine::new(MavenCentralConfig::default()).unwrap();

        let titles: Vec<String> = engine.search_handlers().iter().map(|h| h.title().to_string()).collect();
        assert_eq!(titles, vec!["Keywords", "Simplified Coordinates", "Advanced Search"]);
        assert_eq!(engine.active_search_handler().title(), "Keywords");

        let advanced = engine.search_handler("Advanced Search").unwrap();
        engine.set_active_search_handler(advanced);
        assert_eq!(engine.active_search_handler().title(), "Advanced Search");

        assert!(engine.search_handler("All Artifact Versions").is_none());
    }

    #[test]
    fn test_invalid_config() {
        let result = MavenCentralSearchEngine::new(MavenCentralConfig {
            search_url: "not a url".to_string(),
            ..MavenCentralConfig::default()
        });
        assert!(result.is_err());
    }
}
