use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use tracing::{trace, warn};

use crate::maven::version::MavenVersion;
use crate::search::SearchResult;

/// One published version of a module, with the files that are available for download.
///
/// Identity is the (group id, artifact id, version) triple; release date, packaging and the file
///  names do not take part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: MavenVersion,
    pub release_date: DateTime<Utc>,
    pub packaging: String,
    /// full file names, e.g. "guice-4.2.3-sources.jar"
    pub file_names: Vec<String>,
}
impl Artifact {
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
    }
}
impl Eq for Artifact {}

impl Hash for Artifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.version.hash(state);
    }
}

/// All known versions of a (group id, artifact id) pair.
///
/// A module starts out with only its latest version in `artifacts`; more versions are paged in
///  through [ArtifactModule::load_versions]. There is no internal locking: the module has a single
///  writer (the coordination thread), and readers on other threads must work on a clone.
#[derive(Clone, Debug)]
pub struct ArtifactModule {
    pub group_id: String,
    pub artifact_id: String,
    pub total_available_versions: u64,
    pub latest_version: Option<MavenVersion>,
    pub artifacts: Vec<Artifact>,
}
impl ArtifactModule {
    pub fn new(latest: Artifact, total_available_versions: u64) -> ArtifactModule {
        ArtifactModule {
            group_id: latest.group_id.clone(),
            artifact_id: latest.artifact_id.clone(),
            total_available_versions,
            latest_version: Some(latest.version.clone()),
            artifacts: vec![latest],
        }
    }

    pub fn is_latest_version(&self, version: &MavenVersion) -> bool {
        self.latest_version.as_ref() == Some(version)
    }

    pub fn more_available_versions(&self) -> u64 {
        self.total_available_versions.saturating_sub(self.artifacts.len() as u64)
    }

    /// The offset for the next request of versions: the first page replaces the representative
    ///  latest artifact, so it starts at 0.
    pub fn next_versions_offset(&self) -> u64 {
        if self.artifacts.len() <= 1 {
            0
        }
        else {
            self.artifacts.len() as u64
        }
    }

    /// Merges a page of versions of this module. Returns the number of artifacts that were added.
    pub fn load_versions(&mut self, versions: &SearchResult<Artifact>) -> usize {
        let foreign = versions.records().iter()
            .filter(|a| a.group_id != self.group_id || a.artifact_id != self.artifact_id)
            .count();
        if foreign > 0 {
            warn!("ignoring {} artifacts that do not belong to {}:{}", foreign, self.group_id, self.artifact_id);
        }

        let belongs_to_module = |a: &Artifact| a.group_id == self.group_id && a.artifact_id == self.artifact_id;

        // an empty first page must not drop the representative latest version
        if versions.offset() == 0 && versions.records().iter().any(belongs_to_module) {
            self.artifacts.clear();
        }

        let before = self.artifacts.len();
        for artifact in versions.records() {
            if belongs_to_module(artifact) && !self.artifacts.contains(artifact) {
                self.artifacts.push(artifact.clone());
            }
        }
        self.total_available_versions = versions.total_available_records();
        trace!("{}:{} has {} of {} versions loaded", self.group_id, self.artifact_id, self.artifacts.len(), self.total_available_versions);

        self.artifacts.len() - before
    }
}

impl PartialEq for ArtifactModule {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}
impl Eq for ArtifactModule {}

impl Hash for ArtifactModule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::collections::HashSet;
    use std::sync::Arc;
    use chrono::TimeZone;
    use rstest::*;
    use super::*;
    use crate::search::test::TestSearchHandler;

    pub(crate) fn artifact(group_id: &str, artifact_id: &str, version: &str) -> Artifact {
        Artifact {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: MavenVersion::parse(version),
            release_date: Utc.timestamp_millis_opt(1584647910000).unwrap(),
            packaging: "jar".to_string(),
            file_names: vec![format!("{}-{}.jar", artifact_id, version)],
        }
    }

    fn versions(offset: i64, total: i64, versions: &[&str]) -> SearchResult<Artifact> {
        SearchResult::new(
            "g:\"com.google.inject\" AND a:\"guice\"",
            Arc::new(TestSearchHandler),
            total,
            offset,
            versions.iter().map(|v| artifact("com.google.inject", "guice", v)).collect(),
        ).unwrap()
    }

    #[test]
    fn test_artifact_identity_ignores_attributes() {
        let a = artifact("com.google.inject", "guice", "4.2.3");
        let mut b = a.clone();
        b.packaging = "pom".to_string();
        b.file_names = vec![];
        b.release_date = Utc.timestamp_millis_opt(0).unwrap();
        let c = b.clone();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);

        let set: HashSet<Artifact> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    #[case::group("org.example", "guice", "4.2.3")]
    #[case::artifact("com.google.inject", "guice-servlet", "4.2.3")]
    #[case::version("com.google.inject", "guice", "4.2.2")]
    fn test_artifact_identity_differs(#[case] group_id: &str, #[case] artifact_id: &str, #[case] version: &str) {
        assert_ne!(artifact("com.google.inject", "guice", "4.2.3"), artifact(group_id, artifact_id, version));
    }

    #[test]
    fn test_module_identity_ignores_versions() {
        let a = ArtifactModule::new(artifact("com.google.inject", "guice", "4.2.3"), 15);
        let b = ArtifactModule::new(artifact("com.google.inject", "guice", "5.0.0"), 20);
        let c = ArtifactModule::new(artifact("com.google.inject", "guice-servlet", "4.2.3"), 15);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<ArtifactModule> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_new_module_contains_latest_version() {
        let module = ArtifactModule::new(artifact("com.google.inject", "guice", "4.2.3"), 15);

        assert_eq!(module.artifacts.len(), 1);
        assert!(module.is_latest_version(&MavenVersion::parse("4.2.3")));
        assert_eq!(module.more_available_versions(), 14);
        assert_eq!(module.next_versions_offset(), 0);
    }

    #[test]
    fn test_load_versions_replaces_then_appends() {
        let mut module = ArtifactModule::new(artifact("com.google.inject", "guice", "4.2.3"), 15);

        assert_eq!(module.load_versions(&versions(0, 5, &["1.0", "2.0", "3.0"])), 3);
        assert_eq!(module.artifacts.len(), 3);
        assert_eq!(module.total_available_versions, 5);
        assert_eq!(module.next_versions_offset(), 3);

        // the overlapping "3.0" is not added twice
        assert_eq!(module.load_versions(&versions(3, 5, &["3.0", "4.0", "4.2.3"])), 2);
        let loaded: Vec<String> = module.artifacts.iter().map(|a| a.version.to_string()).collect();
        assert_eq!(loaded, vec!["1.0", "2.0", "3.0", "4.0", "4.2.3"]);
        assert_eq!(module.more_available_versions(), 0);
    }

    #[test]
    fn test_load_versions_ignores_other_modules() {
        let mut module = ArtifactModule::new(artifact("com.google.inject", "guice", "4.2.3"), 15);
        let mut foreign = versions(0, 2, &["1.0"]).records().to_vec();
        foreign.push(artifact("org.example", "other", "1.0"));
        let result = SearchResult::new("q", Arc::new(TestSearchHandler), 2, 0, foreign).unwrap();

        assert_eq!(module.load_versions(&result), 1);
        assert_eq!(module.artifacts.len(), 1);
        assert_eq!(module.artifacts[0].version.to_string(), "1.0");
    }

    #[test]
    fn test_empty_first_page_keeps_latest_version() {
        let mut module = ArtifactModule::new(artifact("com.google.inject", "guice", "4.2.3"), 15);

        assert_eq!(module.load_versions(&versions(0, 0, &[])), 0);
        assert_eq!(module.artifacts, vec![artifact("com.google.inject", "guice", "4.2.3")]);
        assert_eq!(module.total_available_versions, 0);
    }
}
