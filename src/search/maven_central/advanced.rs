use std::collections::BTreeMap;

use crate::search::maven_central::{split_whitespace_tokens, TERM_KEYS};
use crate::search::search_handler::{QueryValidation, SearchHandler};

const BOOLEAN_OPERATORS: [&str; 2] = ["AND", "OR"];

/// The raw query syntax of search.maven.org: terms prefixed with a coordinate key ("g:" for the
///  group id, "a:" for the artifact id, "v:" for the version, "p:" for the packaging and "l:" for
///  the classifier), connected by "AND" (the default) or "OR".
#[derive(Debug)]
pub struct AdvancedSearchHandler {
    validation_error_message: String,
}
impl AdvancedSearchHandler {
    pub fn new() -> AdvancedSearchHandler {
        let term_keys: Vec<String> = TERM_KEYS.iter().map(|k| format!("'{}:'", k)).collect();
        let operators: Vec<String> = BOOLEAN_OPERATORS.iter().map(|o| format!("'{}'", o)).collect();

        AdvancedSearchHandler {
            validation_error_message: format!(
                "Terms must either start with {} or be {}.",
                enumerate_alternatives(&term_keys),
                enumerate_alternatives(&operators),
            ),
        }
    }

    fn is_valid_token(token: &str) -> bool {
        TERM_KEYS.iter().any(|key| token.starts_with(&format!("{}:", key)))
            || BOOLEAN_OPERATORS.contains(&token)
    }
}

impl Default for AdvancedSearchHandler {
    fn default() -> Self {
        AdvancedSearchHandler::new()
    }
}

/// "'a', 'b' or 'c'"
fn enumerate_alternatives(items: &[String]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, init)) => format!("{} or {}", init.join(", "), last),
    }
}

impl SearchHandler for AdvancedSearchHandler {
    fn title(&self) -> &str {
        "Advanced Search"
    }

    fn description_html(&self) -> &str {
        "<p>Searches by coordinate terms: <b>g:</b> for the group ID, <b>a:</b> for the artifact ID, <b>v:</b> for the version, <b>p:</b> for the packaging and <b>l:</b> for the classifier.</p>\
         <p>Terms are connected by <b>AND</b> by default. Use <b>OR</b> between terms to make them optional. For example: <b>g:com.google.inject AND v:4.2.3</b></p>"
    }

    fn parameters(&self, query: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("q".to_string(), query.to_string())])
    }

    fn validate_query(&self, query: &str) -> Option<QueryValidation> {
        if split_whitespace_tokens(query).all(Self::is_valid_token) {
            None
        }
        else {
            Some(QueryValidation::Error(self.validation_error_message.clone()))
        }
    }
}
