//! Leaf selection state.
//!
//! Selection uses string ids so it stays stable when the tree snapshot is
//! refreshed. Only leaves are selectable; there is no cascading to parents or
//! children.

use std::fmt;

use crate::tree::{NodeType, Tree};

/// Insertion-ordered set of selected leaf ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Get the number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id`. Group ids and ids not in `tree` return an
    /// unchanged copy.
    pub fn toggled(&self, tree: &Tree, id: &str) -> Self {
        let mut next = self.clone();
        if tree.node_type(id) != Some(NodeType::Leaf) {
            log::warn!("Ignoring selection toggle for non-leaf node {id:?}");
            return next;
        }
        match next.ids.iter().position(|i| i == id) {
            Some(pos) => {
                next.ids.remove(pos);
            }
            None => next.ids.push(id.to_string()),
        }
        next
    }

    /// Drop ids that are no longer leaves of `tree`, keeping order.
    pub fn retain_known(&self, tree: &Tree) -> Self {
        Self {
            ids: self
                .ids
                .iter()
                .filter(|id| tree.node_type(id) == Some(NodeType::Leaf))
                .cloned()
                .collect(),
        }
    }

    /// Create an empty selection, leaving this one untouched.
    pub fn cleared(&self) -> Self {
        Self::default()
    }
}

/// Callback receiving the full selection, oldest first.
pub type OnSelect = Box<dyn FnMut(&[String])>;

/// Owns a [`Selection`] and reports it to the host after every change.
#[derive(Default)]
pub struct SelectionTracker {
    selection: Selection,
    on_select: Option<OnSelect>,
}

impl SelectionTracker {
    /// Create a tracker without a callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that reports to `on_select`.
    pub fn with_callback(on_select: impl FnMut(&[String]) + 'static) -> Self {
        Self {
            selection: Selection::new(),
            on_select: Some(Box::new(on_select)),
        }
    }

    /// Set the callback receiving the selection after each change.
    pub fn set_callback(&mut self, on_select: impl FnMut(&[String]) + 'static) {
        self.on_select = Some(Box::new(on_select));
    }

    /// Get the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Toggle `id` and return the new selection. The callback fires only when
    /// the selection actually changed.
    pub fn toggle(&mut self, tree: &Tree, id: &str) -> &Selection {
        let next = self.selection.toggled(tree, id);
        self.replace(next);
        &self.selection
    }

    /// Drop selected ids that vanished from `tree`.
    pub fn retain_known(&mut self, tree: &Tree) {
        let next = self.selection.retain_known(tree);
        self.replace(next);
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        let next = self.selection.cleared();
        self.replace(next);
    }

    fn replace(&mut self, next: Selection) {
        if next == self.selection {
            return;
        }
        self.selection = next;
        log::debug!("Selection changed: {:?}", self.selection.ids());
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(self.selection.ids());
        }
    }
}

impl fmt::Debug for SelectionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("selection", &self.selection)
            .field("has_callback", &self.on_select.is_some())
            .finish()
    }
}
