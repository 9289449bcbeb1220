//! Classdir: role-aware in-memory directory tree
//!
//! A small hierarchical namespace of directories and files, each directory carrying
//! an immutable Student/Teacher read/write permission record derived from its type.
//! Structural operations consult those permissions before acting.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::{ApiError, TreeError};
pub use session::Session;
pub use tree::{DirectoryNode, DirectoryTree, DisclosurePolicy, Permission, TreeLimits};
pub use types::{DirectoryType, NodeId, Role};
