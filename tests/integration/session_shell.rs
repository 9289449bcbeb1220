use classdir::tooling::Shell;
use classdir::{DirectoryTree, Role, Session};

use crate::integration::support::{classroom_tree, ScriptedPrompter};

fn run(tree: DirectoryTree, role: Role, lines: &[&str]) -> (String, usize, ScriptedPrompter) {
    let mut prompter = ScriptedPrompter::new(lines);
    let mut out = Vec::new();
    let released = Shell::new(&mut prompter, &mut out)
        .run(Session::new(tree, role))
        .unwrap();
    (String::from_utf8(out).unwrap(), released, prompter)
}

#[test]
fn student_session_hides_restricted_content() {
    let (out, released, _) = run(
        classroom_tree(),
        Role::Student,
        &["7", "3", "5", "exam.txt", "8"],
    );

    assert!(!out.contains("- private"));
    assert!(out.contains("- homework"));
    assert!(!out.contains("Directory: private"));
    assert!(out.contains("No visible match found for you."));
    assert_eq!(released, 3);
}

#[test]
fn teacher_session_sees_restricted_content() {
    let (out, _, _) = run(classroom_tree(), Role::Teacher, &["7", "3", "5", "exam.txt", "8"]);

    assert!(out.contains("  - private"));
    assert!(out.contains("  Directory: private\n    File: exam.txt"));
    assert!(out.contains("Found in directory: private"));
}

#[test]
fn student_cannot_delete_from_hidden_directory() {
    let (out, _, prompter) = run(classroom_tree(), Role::Student, &["4", "private", "8"]);

    assert!(out.contains("Directory 'private' not found!"));
    assert!(!prompter
        .prompts
        .iter()
        .any(|p| p == "Enter file name to delete"));
}

#[test]
fn unknown_directory_type_defaults_to_normal() {
    let (out, _, _) = run(
        DirectoryTree::with_defaults().unwrap(),
        Role::Teacher,
        &["2", "root", "shared", "9", "8"],
    );
    assert!(out.contains("Subdirectory 'shared' created under 'root' successfully!"));
    assert!(out.contains("0. Normal (students read, teacher full)"));
}

#[test]
fn duplicate_directory_name_is_reported() {
    let (out, released, _) = run(
        classroom_tree(),
        Role::Teacher,
        &["2", "homework", "private", "0", "8"],
    );
    assert!(out.contains("A directory named 'private' already exists!"));
    assert_eq!(released, 3);
}

#[test]
fn garbage_input_does_not_disturb_the_tree() {
    let (out, released, _) = run(
        classroom_tree(),
        Role::Teacher,
        &["", "seven", "-1", "3.5", "6", "8"],
    );
    assert_eq!(out.matches("Invalid input!").count(), 3);
    assert_eq!(out.matches("Invalid choice! Please try again.").count(), 1);
    assert!(out.contains("Total directories"));
    assert_eq!(released, 3);
}

#[test]
fn student_cannot_confirm_hidden_directory_names() {
    let (out, released, _) = run(
        classroom_tree(),
        Role::Student,
        &["2", "homework", "private", "0", "2", "homework", "drafts", "0", "8"],
    );
    assert!(out.contains("The name 'private' is not available!"));
    assert!(!out.contains("A directory named 'private' already exists!"));
    assert!(out.contains("Subdirectory 'drafts' created under 'homework' successfully!"));
    assert_eq!(released, 4);
}
