use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── go.mod scanning ──
    #[error("failed to open manifest {path}")]
    ManifestOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read manifest while looking for `{property}`")]
    ManifestRead {
        property: String,
        source: std::io::Error,
    },

    #[error("invalid pattern for property `{property}`")]
    PropertyPattern {
        property: String,
        source: regex::Error,
    },

    #[error("missing property: {property}")]
    MissingProperty { property: String },

    #[error("module path {module_path:?} has an empty last segment")]
    EmptyModuleName { module_path: String },
}
