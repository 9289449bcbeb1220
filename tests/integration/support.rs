use classdir::error::ApiError;
use classdir::tooling::Prompter;
use classdir::{DirectoryTree, DirectoryType, Role};
use std::collections::VecDeque;

/// Prompter that replays a fixed list of input lines and records each prompt.
pub struct ScriptedPrompter {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// root (Normal) -> private (Restricted, exam.txt), homework (Submission)
pub fn classroom_tree() -> DirectoryTree {
    let mut tree = DirectoryTree::with_defaults().unwrap();
    tree.add_subdirectory("root", "private", DirectoryType::Restricted, Role::Teacher)
        .unwrap();
    tree.add_subdirectory("root", "homework", DirectoryType::Submission, Role::Teacher)
        .unwrap();
    tree.add_file("private", "exam.txt", Role::Teacher).unwrap();
    tree
}
