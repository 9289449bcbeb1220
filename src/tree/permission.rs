//! Directory permission records and role checks

use crate::types::{DirectoryType, Role};
use serde::{Deserialize, Serialize};

/// Read/write flags for each role.
///
/// Set once when the directory is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub student_read: bool,
    pub student_write: bool,
    pub teacher_read: bool,
    pub teacher_write: bool,
}

impl Permission {
    pub fn can_read(&self, role: Role) -> bool {
        match role {
            Role::Teacher => self.teacher_read,
            Role::Student => self.student_read,
        }
    }

    pub fn can_write(&self, role: Role) -> bool {
        match role {
            Role::Teacher => self.teacher_write,
            Role::Student => self.student_write,
        }
    }
}

/// Derive the initial permission record for a directory type
pub fn init_permissions(directory_type: DirectoryType) -> Permission {
    match directory_type {
        DirectoryType::Normal => Permission {
            student_read: true,
            student_write: false,
            teacher_read: true,
            teacher_write: true,
        },
        DirectoryType::Restricted => Permission {
            student_read: false,
            student_write: false,
            teacher_read: true,
            teacher_write: true,
        },
        DirectoryType::Submission => Permission {
            student_read: true,
            student_write: true,
            teacher_read: true,
            teacher_write: true,
        },
    }
}
