//! Mapping flattened rows to display attributes.

use crate::config::PickerConfig;
use crate::search::SearchQuery;
use crate::tree::{FlatRow, NodeKind};

/// A run of a node name, either plain or highlighted as a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    /// Create a plain run.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    /// Create a highlighted run.
    pub fn highlighted(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Display attributes for one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedRow<'a> {
    pub id: &'a str,
    pub indent_px: u32,
    pub icon: &'a str,
    /// Expand/collapse arrow; groups only.
    pub expander: Option<&'a str>,
    /// Whether the group is expanded. Always false for leaves.
    pub expanded: bool,
    /// Leaves get a checkbox.
    pub selectable: bool,
    /// Filled in by the owner of the selection; always false from
    /// [`RowPresenter::present`].
    pub selected: bool,
    pub segments: Vec<Segment<'a>>,
}

/// Stateless presenter parameterised by a [`PickerConfig`].
#[derive(Debug, Clone, Default)]
pub struct RowPresenter {
    config: PickerConfig,
}

impl RowPresenter {
    /// Create a presenter with `config`.
    pub fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    /// Get the config.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Map a flattened row to its display attributes.
    pub fn present<'a>(&'a self, row: &FlatRow<'a>, query: &SearchQuery) -> PresentedRow<'a> {
        let icons = &self.config.icons;
        let node = row.node;
        let (icon, expander) = match node.kind {
            NodeKind::Group { .. } => {
                let arrow = if row.expanded {
                    &icons.expanded
                } else {
                    &icons.collapsed
                };
                (icons.group.as_str(), Some(arrow.as_str()))
            }
            NodeKind::Leaf => (icons.leaf.as_str(), None),
        };

        PresentedRow {
            id: &node.id,
            indent_px: (row.depth as u32).saturating_mul(self.config.indent_px),
            icon,
            expander,
            expanded: row.expanded,
            selectable: node.is_leaf(),
            selected: false,
            segments: segments(&node.name, query),
        }
    }
}

/// Split `name` into alternating plain and highlighted runs around every
/// occurrence of the query. Joining the runs yields `name` unchanged.
pub fn segments<'a>(name: &'a str, query: &SearchQuery) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut pos = 0;
    for range in query.find_ranges(name) {
        if range.start > pos {
            out.push(Segment::plain(&name[pos..range.start]));
        }
        out.push(Segment::highlighted(&name[range.clone()]));
        pos = range.end;
    }
    if pos < name.len() || out.is_empty() {
        out.push(Segment::plain(&name[pos..]));
    }
    out
}
