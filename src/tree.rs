use crate::models::{DayForest, TaskNode};

/// Prepend a new root task so the latest addition shows first.
pub fn insert(task: TaskNode, mut forest: DayForest) -> DayForest {
    forest.insert(0, task);
    forest
}

/// Flip the completion flag of the node with `id` and push the new value down
/// to every descendant. Ancestors keep their own flags. Unknown ids leave the
/// forest unchanged.
pub fn toggle(id: &str, forest: DayForest) -> DayForest {
    forest.into_iter().map(|node| toggle_node(id, node)).collect()
}

fn toggle_node(id: &str, mut node: TaskNode) -> TaskNode {
    if node.id == id {
        let flag = !node.done;
        set_subtree(&mut node, flag);
        node
    } else {
        node.children = node
            .children
            .into_iter()
            .map(|child| toggle_node(id, child))
            .collect();
        node
    }
}

fn set_subtree(node: &mut TaskNode, flag: bool) {
    node.done = flag;
    for child in &mut node.children {
        set_subtree(child, flag);
    }
}

/// Remove the node with `id` together with its whole subtree. Unknown ids
/// leave the forest unchanged.
pub fn delete(id: &str, forest: DayForest) -> DayForest {
    forest
        .into_iter()
        .filter_map(|node| delete_node(id, node))
        .collect()
}

fn delete_node(id: &str, mut node: TaskNode) -> Option<TaskNode> {
    if node.id == id {
        return None;
    }
    node.children = node
        .children
        .into_iter()
        .filter_map(|child| delete_node(id, child))
        .collect();
    Some(node)
}

/// Append a fresh incomplete leaf to the children of `parent_id`. Unknown
/// parents leave the forest unchanged.
pub fn add_subtask(parent_id: &str, text: &str, forest: DayForest) -> DayForest {
    forest
        .into_iter()
        .map(|node| add_subtask_node(parent_id, text, node))
        .collect()
}

fn add_subtask_node(parent_id: &str, text: &str, mut node: TaskNode) -> TaskNode {
    if node.id == parent_id {
        node.children.push(TaskNode::new(text));
    } else {
        node.children = node
            .children
            .into_iter()
            .map(|child| add_subtask_node(parent_id, text, child))
            .collect();
    }
    node
}

/// Pre-order walk: parents before children, siblings in stored order.
pub fn flatten(forest: &DayForest) -> Vec<&TaskNode> {
    let mut nodes = Vec::new();
    for root in forest {
        collect(root, &mut nodes);
    }
    nodes
}

fn collect<'a>(node: &'a TaskNode, out: &mut Vec<&'a TaskNode>) {
    out.push(node);
    for child in &node.children {
        collect(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, done: bool, children: Vec<TaskNode>) -> TaskNode {
        TaskNode {
            id: id.to_string(),
            text: format!("task {id}"),
            done,
            children,
        }
    }

    fn sample_forest() -> DayForest {
        vec![
            node(
                "a",
                false,
                vec![node("a1", true, vec![node("a1x", false, vec![])]), node("a2", false, vec![])],
            ),
            node("b", true, vec![]),
        ]
    }

    #[test]
    fn insert_prepends_root() {
        let forest = insert(node("new", false, vec![]), sample_forest());
        assert_eq!(forest[0].id, "new");
        assert_eq!(forest.len(), 3);
    }

    #[test]
    fn unknown_id_operations_are_no_ops() {
        let forest = sample_forest();
        assert_eq!(toggle("missing", forest.clone()), forest);
        assert_eq!(delete("missing", forest.clone()), forest);
        assert_eq!(add_subtask("missing", "orphan", forest.clone()), forest);
    }

    #[test]
    fn toggle_is_involutive_on_childless_node() {
        let forest = sample_forest();
        assert_eq!(toggle("a2", toggle("a2", forest.clone())), forest);
    }

    #[test]
    fn toggle_cascades_to_all_descendants() {
        let forest = toggle("a", sample_forest());
        let nodes = flatten(&forest);
        let root = nodes.iter().find(|n| n.id == "a").unwrap();
        assert!(root.done);
        for id in ["a1", "a1x", "a2"] {
            assert!(nodes.iter().find(|n| n.id == id).unwrap().done, "{id} not cascaded");
        }
    }

    #[test]
    fn toggle_never_cascades_upward() {
        let forest = toggle("a1x", sample_forest());
        let nodes = flatten(&forest);
        assert!(nodes.iter().find(|n| n.id == "a1x").unwrap().done);
        assert!(!nodes.iter().find(|n| n.id == "a").unwrap().done);
        assert!(nodes.iter().find(|n| n.id == "a1").unwrap().done, "parent flag must stay put");
    }

    #[test]
    fn delete_removes_whole_subtree() {
        let before = sample_forest();
        let descendants_of_a = 3;
        let after = delete("a", before.clone());
        assert_eq!(flatten(&after).len(), flatten(&before).len() - 1 - descendants_of_a);
        assert!(flatten(&after).iter().all(|n| n.id != "a1x"));
    }

    #[test]
    fn delete_nested_node_keeps_siblings() {
        let after = delete("a1", sample_forest());
        let ids: Vec<_> = flatten(&after).iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, ["a", "a2", "b"]);
    }

    #[test]
    fn add_subtask_appends_incomplete_leaf() {
        let forest = add_subtask("a1", "buy milk", sample_forest());
        let nodes = flatten(&forest);
        let parent = nodes.iter().find(|n| n.id == "a1").unwrap();
        let leaf = parent.children.last().unwrap();
        assert_eq!(parent.children.len(), 2);
        assert_eq!(leaf.text, "buy milk");
        assert!(!leaf.done);
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn deleting_parent_drops_fresh_subtask() {
        let forest = add_subtask("b", "ephemeral", sample_forest());
        let sub_id = flatten(&forest)
            .iter()
            .find(|n| n.text == "ephemeral")
            .unwrap()
            .id
            .clone();
        let after = delete("b", forest);
        assert!(flatten(&after).iter().all(|n| n.id != sub_id));
    }

    #[test]
    fn flatten_is_pre_order() {
        let ids: Vec<_> = flatten(&sample_forest()).iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, ["a", "a1", "a1x", "a2", "b"]);
    }
}
