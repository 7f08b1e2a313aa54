use crate::maven::coordinates::Artifact;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MavenScope {
    Compile,
    Provided,
    Runtime,
    Test,
}
impl MavenScope {
    pub fn name(&self) -> &'static str {
        match self {
            MavenScope::Compile => "compile",
            MavenScope::Provided => "provided",
            MavenScope::Runtime => "runtime",
            MavenScope::Test => "test",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradleLanguage {
    Groovy,
    Kotlin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnippetSyntax {
    Full,
    Shorthand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradleConfiguration {
    Api,
    Implementation,
    Compile,
    CompileOnly,
    RuntimeOnly,
    TestImplementation,
    TestCompileOnly,
    TestRuntimeOnly,
}
impl GradleConfiguration {
    pub fn name(&self) -> &'static str {
        match self {
            GradleConfiguration::Api => "api",
            GradleConfiguration::Implementation => "implementation",
            GradleConfiguration::Compile => "compile",
            GradleConfiguration::CompileOnly => "compileOnly",
            GradleConfiguration::RuntimeOnly => "runtimeOnly",
            GradleConfiguration::TestImplementation => "testImplementation",
            GradleConfiguration::TestCompileOnly => "testCompileOnly",
            GradleConfiguration::TestRuntimeOnly => "testRuntimeOnly",
        }
    }
}

/// A build tool's dependency declaration for an artifact, ready to be pasted into a build file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencySnippet {
    Maven {
        scope: Option<MavenScope>,
    },
    Gradle {
        language: GradleLanguage,
        syntax: SnippetSyntax,
        configuration: GradleConfiguration,
    },
    GroovyGrape {
        syntax: SnippetSyntax,
        legacy_grapes_wrapper: bool,
    },
}
impl DependencySnippet {
    /// one snippet per build tool with the default options
    pub fn defaults() -> Vec<DependencySnippet> {
        vec![
            DependencySnippet::Maven { scope: None },
            DependencySnippet::Gradle {
                language: GradleLanguage::Groovy,
                syntax: SnippetSyntax::Full,
                configuration: GradleConfiguration::Implementation,
            },
            DependencySnippet::GroovyGrape {
                syntax: SnippetSyntax::Full,
                legacy_grapes_wrapper: false,
            },
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DependencySnippet::Maven { .. } => "Maven",
            DependencySnippet::Gradle { .. } => "Gradle",
            DependencySnippet::GroovyGrape { .. } => "Groovy Grape",
        }
    }

    pub fn help_url(&self) -> &'static str {
        match self {
            DependencySnippet::Maven { .. } => "https://maven.apache.org/guides/introduction/introduction-to-dependency-mechanism.html",
            DependencySnippet::Gradle { .. } => "https://docs.gradle.org/current/userguide/dependency_management_for_java_projects.html",
            DependencySnippet::GroovyGrape { .. } => "http://groovy-lang.org/grape.html",
        }
    }

    pub fn render(&self, artifact: &Artifact) -> String {
        let (g, a, v) = (&artifact.group_id, &artifact.artifact_id, &artifact.version);

        match *self {
            DependencySnippet::Maven { scope } => {
                let mut snippet = format!(
                    "<dependency>\n\t<groupId>{}</groupId>\n\t<artifactId>{}</artifactId>\n\t<version>{}</version>\n",
                    g, a, v,
                );
                if let Some(scope) = scope {
                    snippet.push_str(&format!("\t<scope>{}</scope>\n", scope.name()));
                }
                snippet.push_str("</dependency>");
                snippet
            }
            DependencySnippet::Gradle { language, syntax, configuration } => {
                let c = configuration.name();
                match (language, syntax) {
                    (GradleLanguage::Groovy, SnippetSyntax::Full) => format!("{} group: '{}', name: '{}', version: '{}'", c, g, a, v),
                    (GradleLanguage::Groovy, SnippetSyntax::Shorthand) => format!("{}('{}:{}:{}')", c, g, a, v),
                    (GradleLanguage::Kotlin, SnippetSyntax::Full) => format!("{}(group = \"{}\", name = \"{}\", version = \"{}\")", c, g, a, v),
                    (GradleLanguage::Kotlin, SnippetSyntax::Shorthand) => format!("{}(\"{}:{}:{}\")", c, g, a, v),
                }
            }
            DependencySnippet::GroovyGrape { syntax, legacy_grapes_wrapper } => {
                let grab = match syntax {
                    SnippetSyntax::Full => format!("@Grab(group='{}', module='{}', version='{}')", g, a, v),
                    SnippetSyntax::Shorthand => format!("@Grab('{}:{}:{}')", g, a, v),
                };
                if legacy_grapes_wrapper {
                    format!("@Grapes([\n  {}\n])", grab)
                }
                else {
                    grab
                }
            }
        }
    }
}
