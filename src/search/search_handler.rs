use std::collections::BTreeMap;
use std::fmt::Debug;

/// Outcome of checking a query against a search dialect. Errors block the submission of the
///  query, warnings only need to be acknowledged by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValidation {
    Error(String),
    Warning(String),
}
impl QueryValidation {
    pub fn message(&self) -> &str {
        match self {
            QueryValidation::Error(message) | QueryValidation::Warning(message) => message,
        }
    }

    pub fn allows_submission(&self) -> bool {
        matches!(self, QueryValidation::Warning(_))
    }
}

/// A query dialect: how free text is turned into request parameters of a search provider, and how
///  the results are presented.
///
/// The presentation hooks get the original query, so that dialects can highlight the parts of an
///  id that matched. Their output may contain simple HTML markup.
pub trait SearchHandler: Debug + Send + Sync {
    fn title(&self) -> &str;

    fn description_html(&self) -> &str;

    /// The provider specific request parameters for a query, without any transport parameters
    ///  (paging, sorting, format)
    fn parameters(&self, query: &str) -> BTreeMap<String, String>;

    /// Whether a '+' in the parameter values stands for a space (as in "g:foo+AND+a:bar") rather
    ///  than for itself
    fn plus_encodes_space(&self) -> bool {
        false
    }

    fn validate_query(&self, _query: &str) -> Option<QueryValidation> {
        None
    }

    fn presentable_group_id(&self, _query: &str, group_id: &str) -> String {
        group_id.to_string()
    }

    fn presentable_artifact_id(&self, _query: &str, artifact_id: &str) -> String {
        artifact_id.to_string()
    }

    fn presentable_version(&self, _query: &str, version: &str, is_latest_version: bool) -> String {
        if is_latest_version {
            format!("{} (latest)", version)
        }
        else {
            version.to_string()
        }
    }
}
