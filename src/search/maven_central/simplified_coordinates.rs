use std::collections::BTreeMap;

use crate::search::maven_central::{TERM_KEYS, WHITESPACE_REGEX};
use crate::search::search_handler::{QueryValidation, SearchHandler};

/// Colon separated coordinates "{groupId}:{artifactId}:{version}:{packaging}:{classifier}". Blank
///  terms match everything, and trailing terms can be left out.
#[derive(Debug, Default)]
pub struct SimplifiedCoordinatesSearchHandler;

impl SearchHandler for SimplifiedCoordinatesSearchHandler {
    fn title(&self) -> &str {
        "Simplified Coordinates"
    }

    fn description_html(&self) -> &str {
        "<p>Simplified Maven coordinates are colon separated terms with the following scheme: <b>{groupID}<u>:</u>{artifactID}<u>:</u>{version}<u>:</u>{package}<u>:</u>{classifier}</b></p>\
         <p>Terms can be left blank to match everything. For example, to search for all artifacts with the group ID <i>com.example</i> and version <i>1.2.3</i> the search query would be: <b>com.example::1.2.3</b><br />\
         Blank terms at the end can be omitted together with their colons. For example, to search for all versions with the group ID <i>com.example</i> and artifact ID <i>foo</i> the search query would be: <b>com.example:foo</b></p>"
    }

    fn parameters(&self, query: &str) -> BTreeMap<String, String> {
        let terms: Vec<String> = query.split(':')
            .zip(TERM_KEYS.iter())
            .map(|(value, key)| (key, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}:{}", key, value))
            .collect();

        BTreeMap::from([("q".to_string(), terms.join("+AND+"))])
    }

    fn plus_encodes_space(&self) -> bool {
        true
    }

    fn validate_query(&self, query: &str) -> Option<QueryValidation> {
        if query.matches(':').count() >= TERM_KEYS.len() {
            return Some(QueryValidation::Error(format!("Coordinates can only have {} terms.", TERM_KEYS.len())));
        }

        if WHITESPACE_REGEX.is_match(query.trim()) {
            return Some(QueryValidation::Warning("Use colons instead of spaces for separation.".to_string()));
        }

        None
    }
}
