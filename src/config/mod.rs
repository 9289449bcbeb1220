//! Configuration: tree limits, disclosure policy, root name and logging.
//!
//! Sources are layered by [`MergeService`](merge::service::MergeService): built-in
//! defaults, the optional global file, an explicit `--config` file, then
//! `CLASSDIR_*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::{normalize_name, DisclosurePolicy, TreeLimits};
use serde::{Deserialize, Serialize};

fn default_root_name() -> String {
    "root".to_string()
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassdirConfig {
    /// Name of the root directory created at startup
    #[serde(default = "default_root_name")]
    pub root_name: String,

    #[serde(default)]
    pub limits: TreeLimits,

    /// How denied lookups are reported: conceal or disclose
    #[serde(default)]
    pub disclosure: DisclosurePolicy,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClassdirConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            limits: TreeLimits::default(),
            disclosure: DisclosurePolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClassdirConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.limits.validate()?;
        normalize_name(&self.root_name, self.limits.max_name_len)
            .map_err(|e| ApiError::ConfigError(format!("root_name: {}", e)))?;
        Ok(())
    }
}
