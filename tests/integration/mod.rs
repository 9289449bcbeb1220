//! Integration tests for the role-aware directory tree

mod permission_scenarios;
mod session_shell;
mod support;
mod tree_properties;
