use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up next to the manifest.
pub const CONFIG_FILE_NAME: &str = "godock.toml";

/// godock.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GodockConfig {
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Go builder image repository; tagged with the go.mod version
    #[serde(default = "default_base_image")]
    pub base_image: String,
    /// Release stage base image
    #[serde(default = "default_runtime_image")]
    pub runtime_image: String,
    /// Run govulncheck in the test stage
    #[serde(default)]
    pub vuln_scan: bool,
    /// Port to expose when none is given on the command line (0 or less disables EXPOSE)
    #[serde(default)]
    pub port: i64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_image: default_base_image(),
            runtime_image: default_runtime_image(),
            vuln_scan: false,
            port: 0,
        }
    }
}

impl GodockConfig {
    /// Load from godock.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path,
            source: e,
        })
    }
}

fn default_base_image() -> String {
    "golang".to_owned()
}

fn default_runtime_image() -> String {
    "gcr.io/distroless/static-debian12".to_owned()
}
