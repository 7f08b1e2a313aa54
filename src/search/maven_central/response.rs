use std::sync::Arc;

use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::maven::coordinates::{Artifact, ArtifactModule};
use crate::maven::paths::artifact_file_name;
use crate::maven::version::MavenVersion;
use crate::search::search_handler::SearchHandler;
use crate::search::search_result::SearchResult;

/// Response of the search.maven.org Solr API. Example:
///
/// ```json
/// {
///   "response": {
///     "numFound": 803,
///     "start": 0,
///     "docs": [
///       {
///         "id": "com.google.inject:guice",
///         "g": "com.google.inject",
///         "a": "guice",
///         "latestVersion": "4.2.3",
///         "p": "jar",
///         "timestamp": 1584647910000,
///         "versionCount": 15,
///         "ec": ["-javadoc.jar", "-sources.jar", ".jar", ".pom"]
///       }
///     ]
///   }
/// }
/// ```
///
/// Documents of the "gav" core have a "v" instead of "latestVersion" and no "versionCount".
#[derive(Debug, Deserialize)]
struct SolrResponseEnvelope {
    response: SolrResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolrResponse {
    num_found: i64,
    start: i64,
    #[serde(default)]
    docs: Vec<SearchDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub g: String,
    pub a: String,
    #[serde(default)]
    pub v: Option<String>,
    #[serde(default)]
    pub latest_version: Option<String>,
    #[serde(default)]
    pub p: String,
    /// epoch millis
    pub timestamp: i64,
    #[serde(default)]
    pub ec: Vec<String>,
    #[serde(default)]
    pub version_count: Option<u64>,
}
impl SearchDocument {
    fn release_date(&self) -> anyhow::Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .ok_or_else(|| anyhow!("timestamp out of range: {}", self.timestamp))
    }

    fn artifact(&self, version: &str) -> anyhow::Result<Artifact> {
        Ok(Artifact {
            group_id: self.g.clone(),
            artifact_id: self.a.clone(),
            version: MavenVersion::parse(version),
            release_date: self.release_date()?,
            packaging: self.p.clone(),
            file_names: self.ec.iter()
                .map(|suffix| artifact_file_name(&self.a, version, suffix))
                .collect(),
        })
    }
}

/// A record type that can be built from a single search document
pub trait FromSearchDocument: Sized {
    /// the value of the "fl" (field list) request parameter
    const FIELDS: &'static str;

    fn from_document(doc: &SearchDocument) -> anyhow::Result<Self>;
}

impl FromSearchDocument for ArtifactModule {
    const FIELDS: &'static str = "g,a,latestVersion,p,ec,repositoryId,timestamp,versionCount";

    fn from_document(doc: &SearchDocument) -> anyhow::Result<Self> {
        let latest_version = doc.latest_version.as_deref()
            .or(doc.v.as_deref())
            .ok_or_else(|| anyhow!("no version for {}:{}", doc.g, doc.a))?;

        // the latest version always exists, even if the provider omits the count
        Ok(ArtifactModule::new(doc.artifact(latest_version)?, doc.version_count.unwrap_or(1)))
    }
}

impl FromSearchDocument for Artifact {
    const FIELDS: &'static str = "g,a,v,p,ec,timestamp";

    fn from_document(doc: &SearchDocument) -> anyhow::Result<Self> {
        let version = doc.v.as_deref()
            .or(doc.latest_version.as_deref())
            .ok_or_else(|| anyhow!("no version for {}:{}", doc.g, doc.a))?;

        doc.artifact(version)
    }
}

pub fn parse_search_response<T: FromSearchDocument>(
    body: &[u8],
    query: &str,
    search_handler: Arc<dyn SearchHandler>,
) -> anyhow::Result<SearchResult<T>> {
    let envelope: SolrResponseEnvelope = serde_json::from_slice(body)
        .context("malformed search response")?;
    let response = envelope.response;

    let records = response.docs.iter()
        .map(T::from_document)
        .collect::<anyhow::Result<Vec<T>>>()?;

    Ok(SearchResult::new(query, search_handler, response.num_found, response.start, records)?)
}
