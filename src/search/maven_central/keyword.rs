use std::collections::BTreeMap;

use crate::search::maven_central::split_whitespace_tokens;
use crate::search::search_handler::SearchHandler;

/// Mimics typing a keyword into the basic search box of search.maven.org: finds modules with the
///  keywords in their group or artifact id.
#[derive(Debug, Default)]
pub struct KeywordSearchHandler;

impl KeywordSearchHandler {
    fn highlight_query_parts(query: &str, text: &str) -> String {
        let mut highlighted = text.to_string();
        for query_part in split_whitespace_tokens(query) {
            highlighted = highlighted.replace(query_part, &format!("<b>{}</b>", query_part));
        }

        if highlighted != text {
            format!("<html>{}</html>", highlighted)
        }
        else {
            highlighted
        }
    }
}

impl SearchHandler for KeywordSearchHandler {
    fn title(&self) -> &str {
        "Keywords"
    }

    fn description_html(&self) -> &str {
        "<p>The search query can contain a whitespace separated list of keywords that are searched for in group IDs and artifact IDs.</p>\
         <p>The search result also includes artifacts whose group or artifact IDs contain a keyword as a substring. For example, the keyword <i>jetty</i> would also find the artifact <i>jetty-server</i>.</p>"
    }

    fn parameters(&self, query: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("q".to_string(), query.to_string())])
    }

    fn presentable_group_id(&self, query: &str, group_id: &str) -> String {
        Self::highlight_query_parts(query, group_id)
    }

    fn presentable_artifact_id(&self, query: &str, artifact_id: &str) -> String {
        Self::highlight_query_parts(query, artifact_id)
    }
}
