use classdir::tree::{EntryKind, TreeLimits};
use classdir::{DirectoryTree, DirectoryType, DisclosurePolicy, Role, TreeError};

use crate::integration::support::classroom_tree;

fn visible_names(tree: &DirectoryTree, role: Role) -> Vec<String> {
    tree.list_visible(role).into_iter().map(|d| d.name).collect()
}

#[test]
fn restricted_directory_is_invisible_to_students() {
    let tree = classroom_tree();

    assert!(tree.search_file("exam.txt", Role::Student).is_empty());
    assert!(!visible_names(&tree, Role::Student).contains(&"private".to_string()));
    assert!(tree
        .display(Role::Student)
        .iter()
        .all(|e| e.name != "private" && e.name != "exam.txt"));

    assert_eq!(tree.search_file("exam.txt", Role::Teacher), vec!["private"]);
    assert!(visible_names(&tree, Role::Teacher).contains(&"private".to_string()));
}

#[test]
fn student_cannot_add_file_to_restricted_directory() {
    let mut tree = classroom_tree();
    let before = tree.get("private").unwrap().files().to_vec();

    let err = tree.add_file("private", "x.txt", Role::Student).unwrap_err();
    assert_eq!(err, TreeError::NotFound("private".to_string()));
    assert_eq!(tree.get("private").unwrap().files(), before.as_slice());
}

#[test]
fn disclose_policy_reports_denial_for_hidden_directory() {
    let mut tree =
        DirectoryTree::new("root", TreeLimits::default(), DisclosurePolicy::Disclose).unwrap();
    tree.add_subdirectory("root", "private", DirectoryType::Restricted, Role::Teacher)
        .unwrap();

    let err = tree.add_file("private", "x.txt", Role::Student).unwrap_err();
    assert_eq!(err, TreeError::AccessDenied("private".to_string()));
    let err = tree.delete_file("private", "x.txt", Role::Student).unwrap_err();
    assert_eq!(err.code(), "ACCESS_DENIED");
}

#[test]
fn students_submit_into_submission_directories() {
    let mut tree = classroom_tree();
    tree.add_file("homework", "essay.md", Role::Student).unwrap();
    tree.add_file("homework", "notes.md", Role::Student).unwrap();
    assert_eq!(tree.delete_file("homework", "essay.md", Role::Student).unwrap(), "essay.md");
    assert_eq!(tree.get("homework").unwrap().files(), &["notes.md"]);
    assert_eq!(tree.search_file("notes.md", Role::Student), vec!["homework"]);
}

#[test]
fn hidden_ancestor_hides_readable_descendants() {
    let mut tree = classroom_tree();
    tree.add_subdirectory("private", "answers", DirectoryType::Normal, Role::Teacher)
        .unwrap();
    tree.add_file("answers", "key.txt", Role::Teacher).unwrap();

    assert!(tree.search_file("key.txt", Role::Student).is_empty());
    assert!(!visible_names(&tree, Role::Student).contains(&"answers".to_string()));
    // visible by its own flags, but hidden through its ancestor
    let err = tree.add_file("answers", "x", Role::Student).unwrap_err();
    assert_eq!(err, TreeError::NotFound("answers".to_string()));
}

#[test]
fn statistics_ignore_role_visibility() {
    let mut tree = classroom_tree();
    tree.add_subdirectory("homework", "week1", DirectoryType::Submission, Role::Student)
        .unwrap();
    tree.add_file("week1", "a.txt", Role::Student).unwrap();
    tree.add_file("root", "syllabus", Role::Teacher).unwrap();

    assert_eq!(tree.count_total_directories(), 4);
    assert_eq!(tree.count_total_files(), 3);
    let student_files = tree
        .display(Role::Student)
        .iter()
        .filter(|e| e.kind == EntryKind::File)
        .count();
    assert_eq!(student_files, 2);
}
