//! Searchable tree picker.
//!
//! [`Picker`] bundles one tree snapshot with the per-instance state a
//! hosting screen would otherwise juggle itself: the search query, the
//! expansion set and the selection.
//!
//! # Example
//!
//! ```
//! use picker_lib::picker::Picker;
//! use picker_lib::tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(vec![TreeNode::group(
//!     "org",
//!     "Approvers",
//!     vec![TreeNode::leaf("u1", "Alice"), TreeNode::leaf("u2", "Bob")],
//! )])
//! .unwrap();
//!
//! let mut picker = Picker::new(tree);
//! picker.toggle_expand("org");
//! picker.toggle_select("u2");
//! assert_eq!(picker.rows().len(), 3);
//! assert_eq!(picker.selected_ids(), ["u2".to_string()]);
//! ```

use crate::config::PickerConfig;
use crate::presenter::{PresentedRow, RowPresenter};
use crate::search::SearchQuery;
use crate::selection::{Selection, SelectionTracker};
use crate::tree::{ExpansionState, FlatRow, Tree, flatten};

/// A searchable, expandable tree with leaf selection.
///
/// `Picker` owns:
/// - One validated [`Tree`] snapshot
/// - The search query (matching names are shown with their ancestors)
/// - Expand/collapse state per group
/// - Selection of leaves, reported through an optional callback
///
/// # Example
///
/// ```ignore
/// let tree = parse_candidates(&body)?;
/// let mut picker = Picker::new(tree).with_on_select(|ids| submit(ids));
/// picker.set_search("张");
/// for row in picker.presented_rows() {
///     // draw row.indent_px, row.icon, row.segments ...
/// }
/// ```
#[derive(Debug)]
pub struct Picker {
    tree: Tree,
    query: SearchQuery,
    expansion: ExpansionState,
    tracker: SelectionTracker,
    presenter: RowPresenter,
}

impl Picker {
    /// Create a picker over `tree` with the default config.
    pub fn new(tree: Tree) -> Self {
        Self::with_config(tree, PickerConfig::default())
    }

    /// Create a picker over `tree` with a presenter config.
    pub fn with_config(tree: Tree, config: PickerConfig) -> Self {
        Self {
            tree,
            query: SearchQuery::empty(),
            expansion: ExpansionState::new(),
            tracker: SelectionTracker::new(),
            presenter: RowPresenter::new(config),
        }
    }

    /// Report the selection to `on_select` after every change.
    pub fn with_on_select(mut self, on_select: impl FnMut(&[String]) + 'static) -> Self {
        self.tracker.set_callback(on_select);
        self
    }

    /// Get the current tree snapshot.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Replace the snapshot. Expansion of groups that still exist is kept;
    /// selected ids that vanished are dropped (and reported).
    pub fn set_tree(&mut self, tree: Tree) {
        self.tree = tree;
        self.expansion = self.expansion.retain_known(&self.tree);
        self.tracker.retain_known(&self.tree);
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the current search text.
    pub fn search(&self) -> &str {
        self.query.text()
    }

    /// Set the search text. Any text is accepted; the empty string clears
    /// the search.
    pub fn set_search(&mut self, text: &str) {
        self.query = SearchQuery::new(text);
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Get the expansion state.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Check if a group is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Toggle expand/collapse for a group. Leaves and unknown ids are ignored.
    pub fn toggle_expand(&mut self, id: &str) {
        self.expansion = self.expansion.toggled(&self.tree, id);
    }

    /// Expand every group.
    pub fn expand_all(&mut self) {
        self.expansion = ExpansionState::all(&self.tree);
    }

    /// Collapse all groups.
    pub fn collapse_all(&mut self) {
        self.expansion = ExpansionState::new();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection.
    pub fn selection(&self) -> &Selection {
        self.tracker.selection()
    }

    /// Get all selected leaf ids, oldest first.
    pub fn selected_ids(&self) -> &[String] {
        self.tracker.selection().ids()
    }

    /// Check if a leaf is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.tracker.is_selected(id)
    }

    /// Toggle selection of a leaf and return the new selection.
    pub fn toggle_select(&mut self, id: &str) -> &Selection {
        self.tracker.toggle(&self.tree, id)
    }

    /// Clear all selection.
    pub fn clear_selection(&mut self) {
        self.tracker.clear();
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Visible rows for the current search and expansion.
    pub fn rows(&self) -> Vec<FlatRow<'_>> {
        flatten(&self.tree, &self.query, &self.expansion)
    }

    /// Visible rows with display attributes and selection marks.
    pub fn presented_rows(&self) -> Vec<PresentedRow<'_>> {
        self.rows()
            .iter()
            .map(|row| {
                let mut presented = self.presenter.present(row, &self.query);
                presented.selected = self.tracker.is_selected(presented.id);
                presented
            })
            .collect()
    }
}
