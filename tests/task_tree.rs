#[cfg(test)]
mod tests {
    use dtrack::libs::error::TrackerError;
    use dtrack::libs::task::{uid, Task, TaskTree};

    /// Builds:
    /// - A
    ///   - B
    ///     - C
    ///   - D
    /// - E
    fn sample_tree() -> (TaskTree, [String; 5]) {
        let mut tree = TaskTree::new();
        let a = tree.add_root("A", 10, 1).unwrap();
        let b = tree.add_child(&a, "B", 2).unwrap();
        let c = tree.add_child(&b, "C", 3).unwrap();
        let d = tree.add_child(&a, "D", 4).unwrap();
        let e = tree.add_root("E", 10, 5).unwrap();
        (tree, [a, b, c, d, e])
    }

    #[test]
    fn test_uid_prefix_and_uniqueness() {
        let first = uid("task");
        let second = uid("task");
        assert!(first.starts_with("task_"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_root_trims_and_initializes() {
        let mut tree = TaskTree::new();
        let id = tree.add_root("  Read 20 pages  ", 8, 1000).unwrap();

        let task = tree.find(&id).unwrap();
        assert_eq!(task.text, "Read 20 pages");
        assert!(!task.done);
        assert_eq!(task.created_at, 1000);
        assert_eq!(task.notes.as_deref(), Some(""));
        assert!(task.subtasks.is_empty());
        assert!(id.starts_with("task_"));
    }

    #[test]
    fn test_add_root_rejects_blank_text() {
        let mut tree = TaskTree::new();
        assert!(matches!(tree.add_root("   ", 8, 0), Err(TrackerError::EmptyText)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_add_root_stops_at_limit() {
        let mut tree = TaskTree::new();
        tree.add_root("one", 2, 0).unwrap();
        tree.add_root("two", 2, 0).unwrap();
        let before = tree.clone();

        let result = tree.add_root("three", 2, 0);
        assert!(matches!(result, Err(TrackerError::LimitReached(2))));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_limit_counts_only_root_tasks() {
        let mut tree = TaskTree::new();
        let root = tree.add_root("root", 1, 0).unwrap();
        for i in 0..5 {
            tree.add_child(&root, &format!("child {}", i), 0).unwrap();
        }
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.walk().len(), 6);
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut tree = TaskTree::new();
        let result = tree.add_child("task_missing", "orphan", 0);
        assert!(matches!(result, Err(TrackerError::TaskNotFound(id)) if id == "task_missing"));
    }

    #[test]
    fn test_subtask_ids_use_sub_prefix() {
        let (tree, [_, b, c, d, _]) = sample_tree();
        for id in [b, c, d] {
            assert!(id.starts_with("sub_"));
            assert!(tree.find(&id).is_some());
        }
    }

    #[test]
    fn test_toggle_nested_does_not_propagate() {
        let (mut tree, [a, b, c, d, e]) = sample_tree();

        assert!(tree.toggle(&c).unwrap());
        assert!(tree.find(&c).unwrap().done);
        for other in [&a, &b, &d, &e] {
            assert!(!tree.find(other).unwrap().done);
        }

        assert!(!tree.toggle(&c).unwrap());
        assert!(!tree.find(&c).unwrap().done);
    }

    #[test]
    fn test_toggle_parent_leaves_children() {
        let (mut tree, [a, b, c, d, _]) = sample_tree();
        tree.toggle(&a).unwrap();
        assert!(tree.find(&a).unwrap().done);
        for child in [&b, &c, &d] {
            assert!(!tree.find(child).unwrap().done);
        }
    }

    #[test]
    fn test_remove_subtree() {
        let (mut tree, [a, b, c, d, e]) = sample_tree();

        let removed = tree.remove(&b).unwrap();
        assert_eq!(removed.text, "B");
        assert_eq!(removed.subtasks.len(), 1);

        assert!(tree.find(&b).is_none());
        assert!(tree.find(&c).is_none());
        assert!(tree.find(&a).is_some());
        assert!(tree.find(&d).is_some());
        assert!(tree.find(&e).is_some());
        assert_eq!(tree.walk().len(), 3);
    }

    #[test]
    fn test_remove_root() {
        let (mut tree, [a, _, _, _, e]) = sample_tree();
        tree.remove(&a).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.roots()[0].id, e);
    }

    #[test]
    fn test_remove_unknown_is_error() {
        let (mut tree, _) = sample_tree();
        let before = tree.clone();
        assert!(matches!(tree.remove("sub_nope"), Err(TrackerError::TaskNotFound(_))));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_set_notes() {
        let (mut tree, [_, _, c, _, _]) = sample_tree();
        tree.set_notes(&c, "check the appendix").unwrap();
        assert_eq!(tree.find(&c).unwrap().notes.as_deref(), Some("check the appendix"));
    }

    #[test]
    fn test_walk_is_preorder_with_depth() {
        let (tree, _) = sample_tree();
        let walked: Vec<(usize, &str)> = tree.walk().into_iter().map(|(depth, t)| (depth, t.text.as_str())).collect();
        assert_eq!(walked, vec![(0, "A"), (1, "B"), (2, "C"), (1, "D"), (0, "E")]);
    }

    #[test]
    fn test_index_paths() {
        let (tree, [a, b, c, d, e]) = sample_tree();
        let index = tree.index();
        assert_eq!(index[&a], vec![0]);
        assert_eq!(index[&b], vec![0, 0]);
        assert_eq!(index[&c], vec![0, 0, 0]);
        assert_eq!(index[&d], vec![0, 1]);
        assert_eq!(index[&e], vec![1]);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_in_preorder() {
        let mut first = Task::new("dup".to_string(), "first", 0);
        first.subtasks.push(Task::new("dup".to_string(), "nested", 0));
        let mut tree = TaskTree::from(vec![first]);

        assert_eq!(tree.find("dup").unwrap().text, "first");
        tree.toggle("dup").unwrap();
        assert!(tree.roots()[0].done);
        assert!(!tree.roots()[0].subtasks[0].done);
    }

    #[test]
    fn test_all_done_requires_tasks() {
        let mut tree = TaskTree::new();
        assert!(!tree.all_done());

        let one = tree.add_root("one", 8, 0).unwrap();
        let two = tree.add_root("two", 8, 0).unwrap();
        tree.toggle(&one).unwrap();
        assert!(!tree.all_done());
        assert_eq!(tree.done_count(), 1);

        tree.toggle(&two).unwrap();
        assert!(tree.all_done());
    }

    #[test]
    fn test_subtask_progress() {
        let (mut tree, [a, _, _, d, e]) = sample_tree();
        tree.toggle(&d).unwrap();
        assert_eq!(tree.subtask_progress(&a), Some((1, 2)));
        assert_eq!(tree.subtask_progress(&e), Some((0, 0)));
        assert_eq!(tree.subtask_progress("missing"), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut tree = TaskTree::new();
        tree.add_root("one", 8, 42).unwrap();
        let json = serde_json::to_value(&tree).unwrap();

        let tasks = json.as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["text"], "one");
        assert_eq!(tasks[0]["createdAt"], 42);
        assert!(tasks[0]["subtasks"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_deserializes_without_subtasks_field() {
        let tree: TaskTree = serde_json::from_str(r#"[{"id":"t1","text":"x","done":true,"createdAt":1}]"#).unwrap();
        let task = tree.find("t1").unwrap();
        assert!(task.done);
        assert!(task.subtasks.is_empty());
        assert_eq!(task.notes, None);
    }
}
