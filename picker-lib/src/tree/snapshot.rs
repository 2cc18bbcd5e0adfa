//! Validated tree snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

use super::node::{NodeType, TreeNode};

/// Maximum nesting depth accepted for a snapshot (roots are depth 0).
pub const MAX_DEPTH: usize = 64;

/// An immutable, validated set of root nodes.
///
/// Every id in the snapshot is non-empty and unique, and no node is nested
/// deeper than [`MAX_DEPTH`]. Expansion and selection state are keyed by id
/// alone, so these checks are what keeps that state unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TreeNode>", into = "Vec<TreeNode>")]
pub struct Tree {
    roots: Vec<TreeNode>,
    /// Node type by id, for every node in the snapshot.
    index: HashMap<String, NodeType>,
}

impl Tree {
    /// Validate `roots` and build the snapshot.
    pub fn new(roots: Vec<TreeNode>) -> Result<Self, TreeError> {
        let mut index = HashMap::new();
        let mut stack: Vec<(&TreeNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            if node.id.is_empty() {
                return Err(TreeError::EmptyId {
                    name: node.name.clone(),
                });
            }
            if depth > MAX_DEPTH {
                return Err(TreeError::TooDeep {
                    id: node.id.clone(),
                    limit: MAX_DEPTH,
                });
            }
            if index.insert(node.id.clone(), node.node_type()).is_some() {
                return Err(TreeError::DuplicateId {
                    id: node.id.clone(),
                });
            }
            stack.extend(node.children().iter().rev().map(|c| (c, depth + 1)));
        }

        log::debug!("Built tree snapshot with {} nodes", index.len());
        Ok(Self { roots, index })
    }

    /// Get the root nodes.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Total number of nodes, at any depth.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Check if a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Type of the node with `id`, if present.
    pub fn node_type(&self, id: &str) -> Option<NodeType> {
        self.index.get(id).copied()
    }

    /// Find a node by id anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if !self.contains(id) {
            return None;
        }
        Self::find_in(&self.roots, id)
    }

    fn find_in<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        for node in nodes {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = Self::find_in(node.children(), id) {
                return Some(found);
            }
        }
        None
    }

    /// Ids of every group node, in no particular order.
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.index
            .iter()
            .filter(|(_, kind)| **kind == NodeType::Group)
            .map(|(id, _)| id.as_str())
    }
}

impl TryFrom<Vec<TreeNode>> for Tree {
    type Error = TreeError;

    fn try_from(roots: Vec<TreeNode>) -> Result<Self, Self::Error> {
        Self::new(roots)
    }
}

impl From<Tree> for Vec<TreeNode> {
    fn from(tree: Tree) -> Self {
        tree.roots
    }
}
