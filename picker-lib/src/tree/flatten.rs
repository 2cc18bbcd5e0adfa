//! Flattening a tree into the ordered list of visible rows.

use crate::search::SearchQuery;

use super::expansion::ExpansionState;
use super::node::TreeNode;
use super::snapshot::Tree;

/// A visible node in the flattened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow<'a> {
    pub node: &'a TreeNode,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// Whether the node is in the expansion set. Always false for leaves.
    pub expanded: bool,
    /// Ids from the root down to the parent.
    pub ancestor_ids: Vec<&'a str>,
}

/// Flatten `tree` into visible rows, depth-first in input order.
///
/// Without a search, a node is visible when all of its ancestors are
/// expanded. With a search, expansion is ignored: a node is visible when its
/// name matches, an ancestor's name matches, or a descendant's name matches.
pub fn flatten<'a>(
    tree: &'a Tree,
    query: &SearchQuery,
    expanded: &ExpansionState,
) -> Vec<FlatRow<'a>> {
    let mut rows = Vec::new();
    let mut ancestors = Vec::new();
    if query.is_empty() {
        collect_expanded(tree.roots(), expanded, 0, &mut ancestors, &mut rows);
    } else {
        collect_matches(
            tree.roots(),
            query,
            expanded,
            0,
            false,
            &mut ancestors,
            &mut rows,
        );
    }
    log::trace!(
        "Flattened {} of {} nodes (search {:?})",
        rows.len(),
        tree.len(),
        query.text()
    );
    rows
}

fn row<'a>(
    node: &'a TreeNode,
    depth: usize,
    expanded: &ExpansionState,
    ancestors: &[&'a str],
) -> FlatRow<'a> {
    FlatRow {
        node,
        depth,
        expanded: node.is_group() && expanded.is_expanded(&node.id),
        ancestor_ids: ancestors.to_vec(),
    }
}

fn collect_expanded<'a>(
    nodes: &'a [TreeNode],
    expanded: &ExpansionState,
    depth: usize,
    ancestors: &mut Vec<&'a str>,
    out: &mut Vec<FlatRow<'a>>,
) {
    for node in nodes {
        let flat = row(node, depth, expanded, ancestors);
        let descend = flat.expanded;
        out.push(flat);

        if descend {
            ancestors.push(&node.id);
            collect_expanded(node.children(), expanded, depth + 1, ancestors, out);
            ancestors.pop();
        }
    }
}

/// Returns whether any node in `nodes` (or below) matched the query.
fn collect_matches<'a>(
    nodes: &'a [TreeNode],
    query: &SearchQuery,
    expanded: &ExpansionState,
    depth: usize,
    ancestor_matched: bool,
    ancestors: &mut Vec<&'a str>,
    out: &mut Vec<FlatRow<'a>>,
) -> bool {
    let mut any_match = false;
    for node in nodes {
        let is_match = query.is_match(&node.name);

        // Descendants are collected first so a group can be kept for the
        // sake of a match below it, then emitted ahead of them.
        let mut below = Vec::new();
        ancestors.push(&node.id);
        let descendant_match = collect_matches(
            node.children(),
            query,
            expanded,
            depth + 1,
            ancestor_matched || is_match,
            ancestors,
            &mut below,
        );
        ancestors.pop();

        if is_match || ancestor_matched || descendant_match {
            out.push(row(node, depth, expanded, ancestors));
            out.append(&mut below);
        }
        any_match |= is_match || descendant_match;
    }
    any_match
}
