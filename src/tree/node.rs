//! Directory node representation, capacity limits and name normalization

use crate::error::{ApiError, TreeError};
use crate::tree::permission::{init_permissions, Permission};
use crate::types::{DirectoryType, NodeId, Role};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

fn default_max_files() -> usize {
    10
}

fn default_max_subdirs() -> usize {
    10
}

fn default_max_name_len() -> usize {
    19
}

fn default_max_nodes() -> usize {
    1024
}

/// Capacity limits enforced by the tree engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLimits {
    /// Maximum number of files in one directory
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Maximum number of direct subdirectories of one directory
    #[serde(default = "default_max_subdirs")]
    pub max_subdirs: usize,

    /// Maximum name length in characters; longer names are truncated
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// Ceiling on the number of directories in the whole tree, root included
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_subdirs: default_max_subdirs(),
            max_name_len: default_max_name_len(),
            max_nodes: default_max_nodes(),
        }
    }
}

impl TreeLimits {
    pub fn validate(&self) -> Result<(), ApiError> {
        let fields = [
            ("max_files", self.max_files),
            ("max_subdirs", self.max_subdirs),
            ("max_name_len", self.max_name_len),
            ("max_nodes", self.max_nodes),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ApiError::ConfigError(format!(
                    "limits.{} must be greater than zero",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Normalize a directory or file name.
///
/// Applies NFC, trims surrounding whitespace and truncates to `max_len` characters.
/// Names must be a single token: empty names and names containing whitespace or a
/// path separator are rejected.
pub fn normalize_name(raw: &str, max_len: usize) -> Result<String, TreeError> {
    let composed: String = raw.nfc().collect();
    let trimmed = composed.trim();
    if trimmed.is_empty() {
        return Err(TreeError::InvalidName("name cannot be empty".to_string()));
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(TreeError::InvalidName(format!(
            "'{}' must not contain whitespace or path separators",
            trimmed
        )));
    }
    Ok(trimmed.chars().take(max_len).collect())
}

/// A directory in the tree.
///
/// Files and children keep insertion order. `parent` is a relation only; the tree
/// owns every node.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    name: String,
    files: Vec<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    permission: Permission,
}

impl DirectoryNode {
    pub(crate) fn new(name: String, parent: Option<NodeId>, directory_type: DirectoryType) -> Self {
        Self {
            name,
            files: Vec::new(),
            children: Vec::new(),
            parent,
            permission: init_permissions(directory_type),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn can_read(&self, role: Role) -> bool {
        self.permission.can_read(role)
    }

    pub fn can_write(&self, role: Role) -> bool {
        self.permission.can_write(role)
    }

    pub fn has_file(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    pub(crate) fn push_file(&mut self, file_name: String) {
        self.files.push(file_name);
    }

    /// Remove a file by exact name, keeping the order of the remaining files.
    pub(crate) fn remove_file(&mut self, file_name: &str) -> Option<String> {
        let index = self.files.iter().position(|f| f == file_name)?;
        Some(self.files.remove(index))
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

#[cfg(test)]
thread_local! {
    static DROPPED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Names of nodes dropped on this thread, in drop order.
#[cfg(test)]
pub(crate) fn dropped_names() -> Vec<String> {
    DROPPED.with(|dropped| dropped.borrow().clone())
}

#[cfg(test)]
pub(crate) fn clear_dropped_names() {
    DROPPED.with(|dropped| dropped.borrow_mut().clear());
}

#[cfg(test)]
impl Drop for DirectoryNode {
    fn drop(&mut self) {
        DROPPED.with(|dropped| dropped.borrow_mut().push(self.name.clone()));
    }
}
