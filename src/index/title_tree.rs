//! Title-keyed binary search tree
//!
//! Nodes live in a `Vec` and refer to children by position. Equal titles go
//! to the right subtree, so later duplicates land deeper right.
//!
//! The tree is insert-only: there is no node removal. Insert, search and
//! in-order traversal are iterative, so depth is bounded by heap rather than
//! by the call stack.

use crate::catalog::RecordId;

#[derive(Debug)]
struct TreeNode {
    title: String,
    record: RecordId,
    left: Option<usize>,
    right: Option<usize>,
}

/// Insert-only BST ordered by title.
#[derive(Debug, Default)]
pub struct TitleTree {
    nodes: Vec<TreeNode>,
}

impl TitleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under `title`.
    pub fn insert(&mut self, title: impl Into<String>, record: RecordId) {
        let title = title.into();
        let new_pos = self.nodes.len();

        if !self.nodes.is_empty() {
            let mut current = 0;
            loop {
                let node = &self.nodes[current];
                let next = if title < node.title {
                    node.left
                } else {
                    node.right
                };
                match next {
                    Some(child) => current = child,
                    None => {
                        let node = &mut self.nodes[current];
                        if title < node.title {
                            node.left = Some(new_pos);
                        } else {
                            node.right = Some(new_pos);
                        }
                        break;
                    }
                }
            }
        }

        self.nodes.push(TreeNode {
            title,
            record,
            left: None,
            right: None,
        });
    }

    /// Exact-match lookup, returning the first node found on the search path.
    pub fn search(&self, title: &str) -> Option<RecordId> {
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };
        while let Some(pos) = current {
            let node = &self.nodes[pos];
            if node.title == title {
                return Some(node.record);
            }
            current = if title < node.title.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    pub fn contains(&self, title: &str) -> bool {
        self.search(title).is_some()
    }

    /// Record handles in ascending title order.
    pub fn in_order(&self) -> Vec<RecordId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };

        while current.is_some() || !stack.is_empty() {
            while let Some(pos) = current {
                stack.push(pos);
                current = self.nodes[pos].left;
            }
            if let Some(pos) = stack.pop() {
                out.push(self.nodes[pos].record);
                current = self.nodes[pos].right;
            }
        }
        out
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of nodes, including ones whose record is no longer live.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
