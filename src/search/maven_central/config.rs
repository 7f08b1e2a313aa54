use serde::Deserialize;

use crate::util::http_client::ChecksumHandling;

/// Endpoints and request settings for [super::MavenCentralSearchEngine]. Hosts can embed this in
///  their own settings; missing fields fall back to the public Maven Central endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MavenCentralConfig {
    /// Solr select endpoint
    pub search_url: String,
    /// file download endpoint, takes the repository path as 'filepath' parameter
    pub download_url: String,
    /// repository root for browsing directory listings
    pub browse_url: String,
    /// page size of searches
    pub rows: u32,
    pub user_agent: String,
    pub checksum_handling: ChecksumHandling,
}

impl Default for MavenCentralConfig {
    fn default() -> Self {
        MavenCentralConfig {
            search_url: "https://search.maven.org/solrsearch/select".to_string(),
            download_url: "https://search.maven.org/remotecontent".to_string(),
            browse_url: "https://repo1.maven.org/maven2".to_string(),
            rows: 100,
            user_agent: concat!("maven-search/", env!("CARGO_PKG_VERSION")).to_string(),
            checksum_handling: ChecksumHandling::VerifyIfPresent,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MavenCentralConfig = serde_json::from_str(r#"{
            "search_url": "http://localhost:8080/solrsearch/select",
            "rows": 20,
            "checksum_handling": "require"
        }"#).unwrap();

        assert_eq!(config.search_url, "http://localhost:8080/solrsearch/select");
        assert_eq!(config.rows, 20);
        assert_eq!(config.checksum_handling, ChecksumHandling::Require);
        assert_eq!(config.download_url, "https://search.maven.org/remotecontent");
        assert!(config.user_agent.starts_with("maven-search/"));
    }
}
