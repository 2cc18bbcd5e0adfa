//! Expand/collapse state.

use std::collections::HashSet;

use super::node::NodeType;
use super::snapshot::Tree;

/// The set of expanded group ids.
///
/// Values are immutable: every toggle returns a new state and leaves the
/// receiver untouched, so the host decides when to swap it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Create an empty state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Every group in `tree` expanded.
    pub fn all(tree: &Tree) -> Self {
        Self {
            expanded: tree.group_ids().map(str::to_string).collect(),
        }
    }

    /// Check if a group is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Get the number of expanded groups.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Check if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Flip `id`. Only groups of `tree` can be expanded; any other id returns
    /// an unchanged copy.
    pub fn toggled(&self, tree: &Tree, id: &str) -> Self {
        let mut next = self.clone();
        if tree.node_type(id) != Some(NodeType::Group) {
            log::warn!("Ignoring expand toggle for non-group node {id:?}");
            return next;
        }
        if !next.expanded.remove(id) {
            next.expanded.insert(id.to_string());
        }
        log::trace!("Toggled expansion of {id:?}");
        next
    }

    /// Drop ids that are no longer groups of `tree`.
    pub fn retain_known(&self, tree: &Tree) -> Self {
        Self {
            expanded: self
                .expanded
                .iter()
                .filter(|id| tree.node_type(id) == Some(NodeType::Group))
                .cloned()
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().map(Into::into).collect(),
        }
    }
}
