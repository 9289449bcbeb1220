//! Merge policy: built-in defaults every builder starts from.

use crate::tree::TreeLimits;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-seeded with default values (lowest precedence).
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let limits = TreeLimits::default();
    Config::builder()
        .set_default("root_name", "root")?
        .set_default("disclosure", "conceal")?
        .set_default("limits.max_files", limits.max_files as i64)?
        .set_default("limits.max_subdirs", limits.max_subdirs as i64)?
        .set_default("limits.max_name_len", limits.max_name_len as i64)?
        .set_default("limits.max_nodes", limits.max_nodes as i64)
}
