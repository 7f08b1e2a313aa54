pub mod coordinates;
pub mod paths;
pub mod snippets;
pub mod version;

pub use coordinates::{Artifact, ArtifactModule};
pub use paths::BrowseUrls;
pub use snippets::DependencySnippet;
pub use version::MavenVersion;
