//! Tree engine: structural operations over the directory tree.
//!
//! Every mutating operation resolves its target directory by name, checks the
//! caller's role against the directory's permissions, then enforces the configured
//! capacity limits. Failed operations leave the tree unchanged.

use crate::error::TreeError;
use crate::tree::node::{normalize_name, DirectoryNode, TreeLimits};
use crate::types::{DirectoryType, NodeId, Role};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How a denied lookup is reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosurePolicy {
    /// Directories hidden from the role are reported as `NotFound`; visible but
    /// unwritable directories as `AccessDenied`.
    #[default]
    Conceal,
    /// Existing but unwritable directories are always reported as `AccessDenied`.
    Disclose,
}

/// One directory line of a visible-directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleDirectory {
    pub name: String,
    pub depth: usize,
}

/// Kind of a tree display entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One line of the full tree display (directories and their files)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub kind: EntryKind,
    pub name: String,
    pub depth: usize,
}

/// Global statistics, independent of role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// Role-aware directory tree.
///
/// Nodes live in an arena owned by the tree; children and parent links are
/// `NodeId`s into it. Directories are never removed individually, so ids stay valid
/// for the life of the tree.
#[derive(Debug)]
pub struct DirectoryTree {
    nodes: Vec<DirectoryNode>,
    root: NodeId,
    limits: TreeLimits,
    policy: DisclosurePolicy,
}

impl DirectoryTree {
    /// Create a tree holding a single Normal root directory.
    pub fn new(
        root_name: &str,
        limits: TreeLimits,
        policy: DisclosurePolicy,
    ) -> Result<Self, TreeError> {
        let mut tree = Self {
            nodes: Vec::new(),
            root: 0,
            limits,
            policy,
        };
        tree.root = tree.create(root_name, None, DirectoryType::Normal)?;
        Ok(tree)
    }

    /// Tree with a root named "root" and default limits and policy.
    pub fn with_defaults() -> Result<Self, TreeError> {
        Self::new("root", TreeLimits::default(), DisclosurePolicy::default())
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn limits(&self) -> &TreeLimits {
        &self.limits
    }

    pub fn policy(&self) -> DisclosurePolicy {
        self.policy
    }

    pub fn node(&self, id: NodeId) -> Option<&DirectoryNode> {
        self.nodes.get(id)
    }

    /// Look up a directory by exact name, without permission checks.
    pub fn get(&self, name: &str) -> Option<&DirectoryNode> {
        self.find(name).and_then(|id| self.node(id))
    }

    /// Allocate a directory node.
    ///
    /// Only attaches the parent back-reference; linking into the parent's children
    /// is the caller's job.
    fn create(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        directory_type: DirectoryType,
    ) -> Result<NodeId, TreeError> {
        let name = normalize_name(name, self.limits.max_name_len)?;
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(TreeError::ResourceExhausted(format!(
                "tree already holds {} directories",
                self.nodes.len()
            )));
        }
        if self.find(&name).is_some() {
            return Err(TreeError::DuplicateName(name));
        }
        self.nodes.try_reserve(1).map_err(|e| {
            TreeError::ResourceExhausted(format!("cannot allocate directory '{}': {}", name, e))
        })?;
        let id = self.nodes.len();
        self.nodes.push(DirectoryNode::new(name, parent, directory_type));
        Ok(id)
    }

    /// Depth-first pre-order search by exact name, ignoring permissions.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.find_from(self.root, name)
    }

    fn find_from(&self, id: NodeId, name: &str) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if node.name() == name {
            return Some(id);
        }
        node.children()
            .iter()
            .find_map(|&child| self.find_from(child, name))
    }

    /// Whether the node and every ancestor are readable by `role`.
    pub fn is_visible(&self, id: NodeId, role: Role) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(node) if node.can_read(role) => current = node.parent(),
                _ => return false,
            }
        }
        true
    }

    /// Directories visible to `role`, pre-order, with their depth.
    ///
    /// An unreadable directory hides its whole subtree.
    pub fn list_visible(&self, role: Role) -> Vec<VisibleDirectory> {
        let mut out = Vec::new();
        self.collect_visible(self.root, 0, role, &mut out);
        debug!(role = %role, directories = out.len(), "Listed visible directories");
        out
    }

    fn collect_visible(
        &self,
        id: NodeId,
        depth: usize,
        role: Role,
        out: &mut Vec<VisibleDirectory>,
    ) {
        let node = &self.nodes[id];
        if !node.can_read(role) {
            return;
        }
        out.push(VisibleDirectory {
            name: node.name().to_string(),
            depth,
        });
        for &child in node.children() {
            self.collect_visible(child, depth + 1, role, out);
        }
    }

    /// Visible directories and their files, pre-order.
    ///
    /// Files sit one level deeper than their directory and precede its
    /// subdirectories.
    pub fn display(&self, role: Role) -> Vec<TreeEntry> {
        let mut out = Vec::new();
        self.collect_display(self.root, 0, role, &mut out);
        out
    }

    fn collect_display(&self, id: NodeId, depth: usize, role: Role, out: &mut Vec<TreeEntry>) {
        let node = &self.nodes[id];
        if !node.can_read(role) {
            return;
        }
        out.push(TreeEntry {
            kind: EntryKind::Directory,
            name: node.name().to_string(),
            depth,
        });
        for file in node.files() {
            out.push(TreeEntry {
                kind: EntryKind::File,
                name: file.clone(),
                depth: depth + 1,
            });
        }
        for &child in node.children() {
            self.collect_display(child, depth + 1, role, out);
        }
    }

    /// Resolve a directory the role may write to, applying the disclosure policy.
    fn resolve_writable(&self, dir_name: &str, role: Role) -> Result<NodeId, TreeError> {
        let name = normalize_name(dir_name, self.limits.max_name_len)
            .map_err(|_| TreeError::NotFound(dir_name.trim().to_string()))?;
        let id = self
            .find(&name)
            .ok_or_else(|| TreeError::NotFound(name.clone()))?;
        if self.nodes[id].can_write(role) {
            return Ok(id);
        }
        match self.policy {
            DisclosurePolicy::Conceal if !self.is_visible(id, role) => {
                Err(TreeError::NotFound(name))
            }
            _ => Err(TreeError::AccessDenied(name)),
        }
    }

    /// Directory the role may write to, resolved under the disclosure policy.
    pub fn writable_directory(
        &self,
        dir_name: &str,
        role: Role,
    ) -> Result<&DirectoryNode, TreeError> {
        let id = self.resolve_writable(dir_name, role)?;
        Ok(&self.nodes[id])
    }

    /// Writable directory that still has room for another file.
    ///
    /// Lets a caller refuse a full directory before asking for a file name.
    pub fn directory_accepting_files(
        &self,
        dir_name: &str,
        role: Role,
    ) -> Result<&DirectoryNode, TreeError> {
        let id = self.resolve_writable(dir_name, role)?;
        self.check_file_capacity(id)?;
        Ok(&self.nodes[id])
    }

    fn check_file_capacity(&self, id: NodeId) -> Result<(), TreeError> {
        let limit = self.limits.max_files;
        let node = &self.nodes[id];
        if node.files().len() >= limit {
            warn!(directory = node.name(), limit, "Directory file capacity reached");
            return Err(TreeError::CapacityExceeded {
                directory: node.name().to_string(),
                limit,
            });
        }
        Ok(())
    }

    /// Error for a directory name that is already taken.
    ///
    /// Under `Conceal` a clash with a directory hidden from the role does not
    /// confirm that directory.
    fn name_clash(&self, existing: NodeId, name: String, role: Role) -> TreeError {
        match self.policy {
            DisclosurePolicy::Conceal if !self.is_visible(existing, role) => {
                TreeError::NameUnavailable(name)
            }
            _ => TreeError::DuplicateName(name),
        }
    }

    /// Files of a directory the role may write to.
    ///
    /// Used to present deletion candidates; fails like `delete_file` would before
    /// the file name is known.
    pub fn writable_files(&self, dir_name: &str, role: Role) -> Result<&[String], TreeError> {
        let id = self.resolve_writable(dir_name, role)?;
        let node = &self.nodes[id];
        if node.files().is_empty() {
            return Err(TreeError::EmptyDirectory(node.name().to_string()));
        }
        Ok(node.files())
    }

    /// Append a file to a directory the role may write to.
    ///
    /// Returns the file name as stored, after normalization.
    pub fn add_file(
        &mut self,
        dir_name: &str,
        file_name: &str,
        role: Role,
    ) -> Result<String, TreeError> {
        let id = self.resolve_writable(dir_name, role).map_err(|e| {
            warn!(directory = dir_name, role = %role, code = e.code(), "Add file rejected");
            e
        })?;
        self.check_file_capacity(id)?;
        let file_name = normalize_name(file_name, self.limits.max_name_len)?;
        let node = &self.nodes[id];
        if node.has_file(&file_name) {
            return Err(TreeError::DuplicateFile {
                directory: node.name().to_string(),
                file: file_name,
            });
        }
        let node = &mut self.nodes[id];
        info!(directory = node.name(), file = %file_name, role = %role, "File added");
        node.push_file(file_name.clone());
        Ok(file_name)
    }

    /// Create a subdirectory under a parent the role may write to.
    pub fn add_subdirectory(
        &mut self,
        parent_name: &str,
        child_name: &str,
        directory_type: DirectoryType,
        role: Role,
    ) -> Result<NodeId, TreeError> {
        let parent = self.resolve_writable(parent_name, role).map_err(|e| {
            warn!(
                directory = parent_name,
                role = %role,
                code = e.code(),
                "Add subdirectory rejected"
            );
            e
        })?;
        let limit = self.limits.max_subdirs;
        if self.nodes[parent].children().len() >= limit {
            warn!(
                directory = self.nodes[parent].name(),
                limit,
                "Directory subdirectory capacity reached"
            );
            return Err(TreeError::CapacityExceeded {
                directory: self.nodes[parent].name().to_string(),
                limit,
            });
        }
        let name = normalize_name(child_name, self.limits.max_name_len)?;
        if let Some(existing) = self.find(&name) {
            return Err(self.name_clash(existing, name, role));
        }
        let child = self.create(&name, Some(parent), directory_type)?;
        self.nodes[parent].push_child(child);
        info!(
            parent = self.nodes[parent].name(),
            directory = self.nodes[child].name(),
            directory_type = ?directory_type,
            role = %role,
            "Subdirectory created"
        );
        Ok(child)
    }

    /// Remove a file from a directory the role may write to, keeping the order of
    /// the remaining files.
    pub fn delete_file(
        &mut self,
        dir_name: &str,
        file_name: &str,
        role: Role,
    ) -> Result<String, TreeError> {
        let id = self.resolve_writable(dir_name, role).map_err(|e| {
            warn!(directory = dir_name, role = %role, code = e.code(), "Delete file rejected");
            e
        })?;
        let max_name_len = self.limits.max_name_len;
        let node = &mut self.nodes[id];
        if node.files().is_empty() {
            return Err(TreeError::EmptyDirectory(node.name().to_string()));
        }
        let removed = normalize_name(file_name, max_name_len)
            .ok()
            .and_then(|key| node.remove_file(&key));
        match removed {
            Some(removed) => {
                info!(directory = node.name(), file = %removed, role = %role, "File deleted");
                Ok(removed)
            }
            None => Err(TreeError::FileNotFound {
                directory: node.name().to_string(),
                file: file_name.trim().to_string(),
            }),
        }
    }

    /// Names of visible directories containing `file_name`, pre-order.
    ///
    /// An unreadable directory hides its own files and its whole subtree. An empty
    /// result means no *visible* match.
    pub fn search_file(&self, file_name: &str, role: Role) -> Vec<String> {
        let mut out = Vec::new();
        if let Ok(key) = normalize_name(file_name, self.limits.max_name_len) {
            self.collect_matches(self.root, &key, role, &mut out);
        }
        debug!(file = file_name, role = %role, matches = out.len(), "Searched for file");
        out
    }

    fn collect_matches(&self, id: NodeId, file_name: &str, role: Role, out: &mut Vec<String>) {
        let node = &self.nodes[id];
        if !node.can_read(role) {
            return;
        }
        if node.has_file(file_name) {
            out.push(node.name().to_string());
        }
        for &child in node.children() {
            self.collect_matches(child, file_name, role, out);
        }
    }

    /// Total number of files in the tree, regardless of role.
    pub fn count_total_files(&self) -> usize {
        self.count_files_from(self.root)
    }

    fn count_files_from(&self, id: NodeId) -> usize {
        let node = &self.nodes[id];
        node.files().len()
            + node
                .children()
                .iter()
                .map(|&child| self.count_files_from(child))
                .sum::<usize>()
    }

    /// Total number of directories in the tree, root included, regardless of role.
    pub fn count_total_directories(&self) -> usize {
        self.count_directories_from(self.root)
    }

    fn count_directories_from(&self, id: NodeId) -> usize {
        1 + self.nodes[id]
            .children()
            .iter()
            .map(|&child| self.count_directories_from(child))
            .sum::<usize>()
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            directories: self.count_total_directories(),
            files: self.count_total_files(),
        }
    }

    /// Consume the tree, releasing every directory once in post-order.
    ///
    /// Each node is moved out of the arena, shown to `observer` and dropped before
    /// its parent. Returns the number of directories released.
    pub fn teardown<F>(self, mut observer: F) -> usize
    where
        F: FnMut(&DirectoryNode),
    {
        let mut slots: Vec<Option<DirectoryNode>> = self.nodes.into_iter().map(Some).collect();
        let mut released = 0;
        release(&mut slots, self.root, &mut observer, &mut released);
        info!(directories = released, "Tree torn down");
        released
    }
}

fn release<F>(
    slots: &mut [Option<DirectoryNode>],
    id: NodeId,
    observer: &mut F,
    released: &mut usize,
) where
    F: FnMut(&DirectoryNode),
{
    let Some(node) = slots.get_mut(id).and_then(Option::take) else {
        return;
    };
    for &child in node.children() {
        release(slots, child, observer, released);
    }
    observer(&node);
    *released += 1;
    drop(node);
}
