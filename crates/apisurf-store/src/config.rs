//! `apisurf.toml` configuration.
//!
//! Every section and key is optional; unknown keys are rejected.

use crate::errors::{invalid_config, io_error, Result};
use apisurf_core::diff::{CompareOptions, PortAllowList, DEFAULT_REMOVED_PORTS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up at the program root.
pub const CONFIG_FILE_NAME: &str = "apisurf.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSurfConfig {
    pub baseline: BaselineConfig,
    pub removal: RemovalConfig,
    pub extract: ExtractConfig,
}

/// Locations of baseline files, relative to the program root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaselineConfig {
    /// Directory holding the versioned current files.
    pub dir: PathBuf,
    /// File-name prefix of current files, e.g. `v` for `v1.txt`.
    pub current_prefix: String,
    pub next_dir: PathBuf,
    pub exceptions: PathBuf,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("api"),
            current_prefix: "v".to_string(),
            next_dir: PathBuf::from("api/next"),
            exceptions: PathBuf::from("api/except.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemovalConfig {
    /// Ports whose features may disappear without being reported.
    pub removed_ports: Vec<String>,
    pub strip_context: bool,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            removed_ports: DEFAULT_REMOVED_PORTS.iter().map(|p| p.to_string()).collect(),
            strip_context: true,
        }
    }
}

impl RemovalConfig {
    pub fn policy(&self) -> PortAllowList {
        PortAllowList::new(&self.removed_ports)
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            strip_context: self.strip_context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    pub skip_internal: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            skip_internal: true,
        }
    }
}

impl ApiSurfConfig {
    /// Load configuration from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
        Self::parse(&content, path)
    }

    /// Load `apisurf.toml` from `root`, or the defaults when it is absent.
    ///
    /// # Errors
    ///
    /// As [`ApiSurfConfig::load`] when the file exists.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(root = %root.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| invalid_config(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisurf_core::diff::RemovalPolicy;
    use apisurf_core::ExErrorKind;

    #[test]
    fn test_empty_config_is_default() {
        let config = ApiSurfConfig::parse("", Path::new("apisurf.toml")).unwrap();
        assert_eq!(config, ApiSurfConfig::default());
        assert!(config.extract.skip_internal);
        assert!(config.removal.strip_context);
        assert_eq!(config.baseline.next_dir, PathBuf::from("api/next"));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ApiSurfConfig::parse(
            r#"
[baseline]
dir = "surface"

[removal]
removed_ports = ["plan9-arm"]
"#,
            Path::new("apisurf.toml"),
        )
        .unwrap();
        assert_eq!(config.baseline.dir, PathBuf::from("surface"));
        assert_eq!(config.baseline.current_prefix, "v");
        assert!(config.removal.strip_context);
        let policy = config.removal.policy();
        assert!(policy.is_port_removed("pkg os (plan9-arm), func Getpid() int"));
        assert!(!policy.is_port_removed("pkg os (darwin-386), func Getpid() int"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = ApiSurfConfig::parse(
            "[removal]\nstrip = false\n",
            Path::new("apisurf.toml"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert_eq!(err.path(), Some("apisurf.toml"));
    }
}
