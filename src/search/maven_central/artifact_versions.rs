use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::search::search_handler::SearchHandler;

lazy_static! {
    static ref VERSIONS_QUERY_REGEX: Regex = Regex::new(r#"^g:"[^"]*"\s+AND\s+a:"[^"]*"$"#).unwrap();
}

/// Lists all versions of a single module. This dialect is not offered to users; queries are built
///  by [ArtifactVersionsSearchHandler::query].
#[derive(Debug, Default)]
pub struct ArtifactVersionsSearchHandler;

impl ArtifactVersionsSearchHandler {
    pub fn query(group_id: &str, artifact_id: &str) -> String {
        format!("g:\"{}\" AND a:\"{}\"", group_id, artifact_id)
    }
}

impl SearchHandler for ArtifactVersionsSearchHandler {
    fn title(&self) -> &str {
        "All Artifact Versions"
    }

    fn description_html(&self) -> &str {
        "<p>All versions of a single artifact.</p>"
    }

    fn parameters(&self, query: &str) -> BTreeMap<String, String> {
        debug_assert!(VERSIONS_QUERY_REGEX.is_match(query), "query should have the format g:\"{{groupId}}\" AND a:\"{{artifactId}}\"");

        BTreeMap::from([
            ("q".to_string(), query.to_string()),
            ("core".to_string(), "gav".to_string()),
        ])
    }
}
