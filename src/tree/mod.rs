//! Directory tree: node model, permissions and the tree engine

pub mod engine;
pub mod node;
pub mod permission;

pub use engine::{
    DirectoryTree, DisclosurePolicy, EntryKind, TreeEntry, TreeStats, VisibleDirectory,
};
pub use node::{normalize_name, DirectoryNode, TreeLimits};
pub use permission::{init_permissions, Permission};
