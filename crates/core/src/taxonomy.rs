//! Category tree construction and breadcrumb ancestor chains.
//!
//! Categories form a forest: `parent_id = None` marks a root. The data
//! is not guaranteed to be well-formed -- a `parent_id` may point at a
//! category that was deleted (dangling), and nothing at write time
//! prevents a cycle. Both walks here carry a visited set so malformed
//! data degrades to a partial result instead of unbounded recursion.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::DbId;

/// Anything with an id and an optional parent id can be arranged into
/// a tree. The db crate implements this for its `Category` model.
pub trait TreeItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// A materialized tree node: an item plus its recursively collected children.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode<T> {
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

/// Partition a flat slice into the subtrees rooted under `parent_id`.
///
/// Every input item lands in exactly one bucket, keyed by its own
/// `parent_id`; input order is preserved within each bucket. Items whose
/// parent is absent from the input are unreachable from the roots and
/// simply do not appear in the result (matching the partition law: the
/// union of all buckets, not of all reachable nodes, equals the input).
///
/// Cyclic parent chains are broken by a visited set: an item is placed
/// at most once.
pub fn build_tree<T: TreeItem + Clone>(items: &[T], parent_id: Option<DbId>) -> Vec<TreeNode<T>> {
    let mut visited = HashSet::new();
    build_subtree(items, parent_id, &mut visited)
}

fn build_subtree<T: TreeItem + Clone>(
    items: &[T],
    parent_id: Option<DbId>,
    visited: &mut HashSet<DbId>,
) -> Vec<TreeNode<T>> {
    let mut nodes = Vec::new();
    for item in items {
        if item.parent_id() != parent_id || !visited.insert(item.id()) {
            continue;
        }
        let children = build_subtree(items, Some(item.id()), visited);
        nodes.push(TreeNode {
            item: item.clone(),
            children,
        });
    }
    nodes
}

/// Walk `parent_id` links upward from `leaf`, returning the ancestor
/// chain ordered root-first. The leaf itself is excluded.
///
/// A `parent_id` pointing at a missing id silently terminates the walk
/// (partial chain, no error), as does revisiting an already-seen id.
pub fn breadcrumb_ancestors<'a, T: TreeItem>(leaf: &T, all: &'a [T]) -> Vec<&'a T> {
    let mut chain = Vec::new();
    let mut visited = HashSet::from([leaf.id()]);
    let mut current_parent = leaf.parent_id();

    while let Some(parent_id) = current_parent {
        if !visited.insert(parent_id) {
            break; // cycle
        }
        let Some(parent) = all.iter().find(|c| c.id() == parent_id) else {
            break; // dangling reference
        };
        chain.insert(0, parent);
        current_parent = parent.parent_id();
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Cat {
        id: DbId,
        parent_id: Option<DbId>,
    }

    impl TreeItem for Cat {
        fn id(&self) -> DbId {
            self.id
        }
        fn parent_id(&self) -> Option<DbId> {
            self.parent_id
        }
    }

    fn cat(id: DbId, parent_id: Option<DbId>) -> Cat {
        Cat { id, parent_id }
    }

    fn collect_ids<T: TreeItem>(nodes: &[TreeNode<T>], out: &mut Vec<DbId>) {
        for node in nodes {
            out.push(node.item.id());
            collect_ids(&node.children, out);
        }
    }

    #[test]
    fn test_build_tree_partitions_forest() {
        // Two roots; 1 has children 3, 4; 3 has child 5.
        let cats = vec![
            cat(1, None),
            cat(2, None),
            cat(3, Some(1)),
            cat(4, Some(1)),
            cat(5, Some(3)),
        ];

        let tree = build_tree(&cats, None);
        assert_eq!(tree.len(), 2, "two roots expected");
        assert_eq!(tree[0].item.id, 1);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].item.id, 3);
        assert_eq!(tree[0].children[0].children[0].item.id, 5);
        assert_eq!(tree[1].item.id, 2);

        // Every category appears exactly once across all buckets.
        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_build_tree_of_subtree() {
        let cats = vec![cat(1, None), cat(3, Some(1)), cat(5, Some(3))];
        let subtree = build_tree(&cats, Some(1));
        assert_eq!(subtree.len(), 1);
        assert_eq!(subtree[0].item.id, 3);
        assert_eq!(subtree[0].children[0].item.id, 5);
    }

    #[test]
    fn test_build_tree_does_not_hang_on_cycle() {
        // 1 -> 2 -> 1 plus a normal root.
        let cats = vec![cat(1, Some(2)), cat(2, Some(1)), cat(3, None)];
        let tree = build_tree(&cats, None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].item.id, 3);
    }

    #[test]
    fn test_breadcrumbs_root_first_leaf_excluded() {
        let cats = vec![cat(1, None), cat(3, Some(1)), cat(5, Some(3))];
        let leaf = &cats[2];
        let chain = breadcrumb_ancestors(leaf, &cats);
        let ids: Vec<DbId> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3], "root-first, leaf excluded");
    }

    #[test]
    fn test_breadcrumbs_of_root_is_empty() {
        let cats = vec![cat(1, None)];
        assert!(breadcrumb_ancestors(&cats[0], &cats).is_empty());
    }

    #[test]
    fn test_breadcrumbs_stop_at_dangling_parent() {
        // 5's chain is 3 -> 99, and 99 does not exist.
        let cats = vec![cat(3, Some(99)), cat(5, Some(3))];
        let chain = breadcrumb_ancestors(&cats[1], &cats);
        let ids: Vec<DbId> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3], "partial chain up to the dangling link");
    }

    #[test]
    fn test_breadcrumbs_terminate_on_cycle() {
        let cats = vec![cat(1, Some(2)), cat(2, Some(1))];
        let chain = breadcrumb_ancestors(&cats[0], &cats);
        let ids: Vec<DbId> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2], "walk visits each id at most once");
    }
}
