//! Session: one tree and the role that logged in.
//!
//! The role is fixed at login and passed explicitly into every tree operation.

use crate::error::TreeError;
use crate::tree::{DirectoryNode, DirectoryTree, TreeEntry, TreeStats, VisibleDirectory};
use crate::types::{DirectoryType, NodeId, Role};
use tracing::info;

pub struct Session {
    tree: DirectoryTree,
    role: Role,
}

impl Session {
    pub fn new(tree: DirectoryTree, role: Role) -> Self {
        info!(role = %role, "Session started");
        Self { tree, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    pub fn add_file(&mut self, dir_name: &str, file_name: &str) -> Result<String, TreeError> {
        self.tree.add_file(dir_name, file_name, self.role)
    }

    pub fn add_subdirectory(
        &mut self,
        parent_name: &str,
        child_name: &str,
        directory_type: DirectoryType,
    ) -> Result<NodeId, TreeError> {
        self.tree
            .add_subdirectory(parent_name, child_name, directory_type, self.role)
    }

    pub fn delete_file(&mut self, dir_name: &str, file_name: &str) -> Result<String, TreeError> {
        self.tree.delete_file(dir_name, file_name, self.role)
    }

    pub fn writable_directory(&self, dir_name: &str) -> Result<&DirectoryNode, TreeError> {
        self.tree.writable_directory(dir_name, self.role)
    }

    pub fn directory_accepting_files(&self, dir_name: &str) -> Result<&DirectoryNode, TreeError> {
        self.tree.directory_accepting_files(dir_name, self.role)
    }

    pub fn writable_files(&self, dir_name: &str) -> Result<&[String], TreeError> {
        self.tree.writable_files(dir_name, self.role)
    }

    pub fn search_file(&self, file_name: &str) -> Vec<String> {
        self.tree.search_file(file_name, self.role)
    }

    pub fn list_visible(&self) -> Vec<VisibleDirectory> {
        self.tree.list_visible(self.role)
    }

    pub fn display(&self) -> Vec<TreeEntry> {
        self.tree.display(self.role)
    }

    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// End the session, tearing the tree down in post-order.
    pub fn end<F>(self, observer: F) -> usize
    where
        F: FnMut(&DirectoryNode),
    {
        info!(role = %self.role, "Session ended");
        self.tree.teardown(observer)
    }
}
