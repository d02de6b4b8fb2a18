use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Descriptor identity and metadata.
///
/// This section defines what the environment is called and which revision of
/// the descriptor a team is sharing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ProjectMetadata {
    /// The name of the environment.
    /// Should be kebab-case (e.g., `my-dev-shell`).
    #[serde(default)]
    pub name: String,

    /// The semantic version of the descriptor.
    /// Strictly checked against SemVer 2.0.0.
    #[serde(default = "default_version")]
    #[schemars(schema_with = "version_schema")]
    pub version: Version,

    /// A short, human-readable description of what the environment is for.
    #[serde(default)]
    pub description: String,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: default_version(),
            description: String::new(),
        }
    }
}

fn default_version() -> Version {
    Version::parse("0.0.0").unwrap_or_else(|_| Version::new(0, 0, 0))
}

fn version_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    let mut schema = gen.subschema_for::<String>().into_object();
    schema.metadata().description = Some("SemVer version string (e.g. 1.0.0)".to_string());
    schemars::schema::Schema::Object(schema)
}
