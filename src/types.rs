//! Core types shared by the permission model, the tree engine and the shell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// NodeId: index of a directory node inside its owning tree
pub type NodeId = usize;

/// Session role; decides which permission fields gate an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Map the login selector to a role.
    ///
    /// Only "2" selects Teacher; every other input, including garbage, falls back
    /// to Student.
    pub fn from_login_choice(input: &str) -> Self {
        match input.trim() {
            "2" => Role::Teacher,
            _ => Role::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            _ => Err(format!(
                "Invalid role: {}. Must be student or teacher",
                s
            )),
        }
    }
}

/// Classification applied at creation time to derive a directory's permissions.
///
/// Not stored on the node afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryType {
    #[default]
    Normal,
    Restricted,
    Submission,
}

impl DirectoryType {
    pub const ALL: [DirectoryType; 3] = [
        DirectoryType::Normal,
        DirectoryType::Restricted,
        DirectoryType::Submission,
    ];

    /// Map the numeric type selector (0, 1, 2) to a directory type.
    ///
    /// Unrecognized selectors map to Normal.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            1 => DirectoryType::Restricted,
            2 => DirectoryType::Submission,
            _ => DirectoryType::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectoryType::Normal => "Normal (students read, teacher full)",
            DirectoryType::Restricted => "Restricted (only teachers)",
            DirectoryType::Submission => "Submission (students submit, teacher full)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_choice_defaults_to_student() {
        assert_eq!(Role::from_login_choice("2"), Role::Teacher);
        assert_eq!(Role::from_login_choice(" 2 "), Role::Teacher);
        assert_eq!(Role::from_login_choice("1"), Role::Student);
        assert_eq!(Role::from_login_choice("3"), Role::Student);
        assert_eq!(Role::from_login_choice("teacher"), Role::Student);
        assert_eq!(Role::from_login_choice(""), Role::Student);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_directory_type_selector() {
        assert_eq!(DirectoryType::from_selector(0), DirectoryType::Normal);
        assert_eq!(DirectoryType::from_selector(1), DirectoryType::Restricted);
        assert_eq!(DirectoryType::from_selector(2), DirectoryType::Submission);
        assert_eq!(DirectoryType::from_selector(7), DirectoryType::Normal);
        assert_eq!(DirectoryType::from_selector(-1), DirectoryType::Normal);
    }
}
