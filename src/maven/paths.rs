/// The relative path of a file inside a Maven repository, e.g.
///  "com/google/inject/guice/4.2.3/guice-4.2.3.jar"
pub fn repository_path(group_id: &str, artifact_id: &str, version: &str, file_name: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        group_directory(group_id),
        artifact_id,
        version,
        file_name,
    )
}

fn group_directory(group_id: &str) -> String {
    group_id.replace('.', "/")
}

/// Full file name for a suffix as reported by search.maven.org (e.g. "-sources.jar" or ".pom")
pub fn artifact_file_name(artifact_id: &str, version: &str, suffix: &str) -> String {
    format!("{}-{}{}", artifact_id, version, suffix)
}

/// Builds URLs for browsing a Maven repository's directory listing. All returned URLs end with
///  a '/'.
#[derive(Clone, Debug)]
pub struct BrowseUrls {
    base_url: String, // without trailing '/'
}
impl BrowseUrls {
    pub fn new(base_url: &str) -> BrowseUrls {
        BrowseUrls {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn group_id(&self, group_id: &str) -> String {
        format!("{}/{}/", self.base_url, group_directory(group_id))
    }

    pub fn artifact_id(&self, group_id: &str, artifact_id: &str) -> String {
        format!("{}{}/", self.group_id(group_id), artifact_id)
    }

    pub fn version(&self, group_id: &str, artifact_id: &str, version: &str) -> String {
        format!("{}{}/", self.artifact_id(group_id, artifact_id), version)
    }
}
