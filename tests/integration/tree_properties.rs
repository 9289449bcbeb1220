use classdir::tree::{init_permissions, TreeLimits};
use classdir::{DirectoryNode, DirectoryTree, DirectoryType, DisclosurePolicy, Role, TreeError};
use proptest::prelude::*;

fn directory_type() -> impl Strategy<Value = DirectoryType> {
    prop_oneof![
        Just(DirectoryType::Normal),
        Just(DirectoryType::Restricted),
        Just(DirectoryType::Submission),
    ]
}

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Student), Just(Role::Teacher)]
}

proptest! {
    #[test]
    fn permissions_project_the_role_fields(t in directory_type(), r in role()) {
        let perms = init_permissions(t);
        let (read, write) = match r {
            Role::Student => (perms.student_read, perms.student_write),
            Role::Teacher => (perms.teacher_read, perms.teacher_write),
        };
        prop_assert_eq!(perms.can_read(r), read);
        prop_assert_eq!(perms.can_write(r), write);
        prop_assert!(perms.can_read(Role::Teacher) && perms.can_write(Role::Teacher));
        prop_assert_eq!(perms.student_write, t == DirectoryType::Submission);
        prop_assert_eq!(perms.student_read, t != DirectoryType::Restricted);
    }

    #[test]
    fn insertion_order_is_preserved(names in prop::collection::btree_set("[a-z]{1,8}", 1..10)) {
        let names: Vec<String> = names.into_iter().rev().collect();
        let mut tree = DirectoryTree::with_defaults().unwrap();
        for name in &names {
            tree.add_file("root", name, Role::Teacher).unwrap();
        }
        prop_assert_eq!(tree.get("root").unwrap().files(), names.as_slice());
    }

    #[test]
    fn capacity_is_enforced_without_side_effects(limit in 1usize..6, extra in 1usize..4) {
        let limits = TreeLimits { max_files: limit, ..TreeLimits::default() };
        let mut tree = DirectoryTree::new("root", limits, DisclosurePolicy::Conceal).unwrap();
        for i in 0..limit {
            tree.add_file("root", &format!("f{}", i), Role::Teacher).unwrap();
        }
        let before = tree.get("root").unwrap().files().to_vec();
        for i in 0..extra {
            let err = tree.add_file("root", &format!("g{}", i), Role::Teacher).unwrap_err();
            let expected = TreeError::CapacityExceeded { directory: "root".to_string(), limit };
            prop_assert_eq!(err, expected);
        }
        prop_assert_eq!(tree.get("root").unwrap().files(), before.as_slice());
    }

    #[test]
    fn removal_preserves_relative_order(count in 1usize..10, pick in 0usize..10) {
        let pick = pick % count;
        let names: Vec<String> = (0..count).map(|i| format!("file{}", i)).collect();
        let mut tree = DirectoryTree::with_defaults().unwrap();
        for name in &names {
            tree.add_file("root", name, Role::Teacher).unwrap();
        }
        tree.delete_file("root", &names[pick], Role::Teacher).unwrap();
        let mut expected = names.clone();
        expected.remove(pick);
        prop_assert_eq!(tree.get("root").unwrap().files(), expected.as_slice());
        let is_file_not_found = matches!(
            tree.delete_file("root", &names[pick], Role::Teacher),
            Err(TreeError::FileNotFound { .. }) | Err(TreeError::EmptyDirectory(_))
        );
        prop_assert!(is_file_not_found);
    }

    #[test]
    fn teardown_visits_every_directory_once_post_order(
        shape in prop::collection::vec(0usize..8, 0..20)
    ) {
        // shape[i] picks the parent of directory i+1 among those created so far
        let mut tree = DirectoryTree::with_defaults().unwrap();
        let mut created = vec!["root".to_string()];
        for (i, choice) in shape.iter().enumerate() {
            let parent = created[choice % created.len()].clone();
            let name = format!("d{}", i);
            if tree.add_subdirectory(&parent, &name, DirectoryType::Normal, Role::Teacher).is_ok() {
                created.push(name);
            }
        }
        let total = tree.count_total_directories();
        prop_assert_eq!(total, created.len());

        let parents: Vec<(String, Option<String>)> = created
            .iter()
            .map(|name| {
                let node = tree.get(name).unwrap();
                let parent = node.parent().and_then(|p| tree.node(p)).map(|p| p.name().to_string());
                (name.clone(), parent)
            })
            .collect();

        let mut order: Vec<String> = Vec::new();
        let visited = tree.teardown(|node: &DirectoryNode| order.push(node.name().to_string()));
        prop_assert_eq!(visited, total);
        prop_assert_eq!(order.len(), total);
        prop_assert_eq!(order.last().map(String::as_str), Some("root"));
        for (name, parent) in parents {
            if let Some(parent) = parent {
                let child_at = order.iter().position(|n| *n == name).unwrap();
                let parent_at = order.iter().position(|n| *n == parent).unwrap();
                prop_assert!(child_at < parent_at, "{} released after its parent {}", name, parent);
            }
        }
    }
}
