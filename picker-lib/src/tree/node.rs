//! Tree node type.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Discriminant of a [`TreeNode`], without its children.
///
/// Serialized with the names the workflow API uses for the candidate
/// picker: groups are organizations, leaves are people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "organization")]
    Group,
    #[serde(rename = "person")]
    Leaf,
}

/// The kind of a node: a group owning ordered children, or a selectable leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Group { children: Vec<TreeNode> },
    Leaf,
}

/// A node of an organization/person (or catalogue/file) tree.
///
/// ```json
/// { "id": "org", "name": "可选择用户", "type": "organization",
///   "children": [ { "id": "u1", "name": "张三", "type": "person" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
}

impl TreeNode {
    /// Creates a group node.
    pub fn group(id: impl Into<String>, name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Group { children },
        }
    }

    /// Creates a leaf node.
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Leaf,
        }
    }

    /// Get the node type without its children.
    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Group { .. } => NodeType::Group,
            NodeKind::Leaf => NodeType::Leaf,
        }
    }

    /// Check if this is a group.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group { .. })
    }

    /// Check if this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Child nodes in input order. Always empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Leaf => &[],
        }
    }
}

/// Wire shape of a node: `children` is optional and the kind is a `type` tag.
#[derive(Serialize, Deserialize)]
struct RawNode {
    id: String,
    name: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<RawNode>,
}

impl TryFrom<RawNode> for TreeNode {
    type Error = TreeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match raw.node_type {
            NodeType::Leaf if !raw.children.is_empty() => {
                Err(TreeError::LeafWithChildren { id: raw.id })
            }
            NodeType::Leaf => Ok(TreeNode::leaf(raw.id, raw.name)),
            NodeType::Group => {
                let children = raw
                    .children
                    .into_iter()
                    .map(TreeNode::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TreeNode::group(raw.id, raw.name, children))
            }
        }
    }
}

impl From<TreeNode> for RawNode {
    fn from(node: TreeNode) -> Self {
        let node_type = node.node_type();
        let children = match node.kind {
            NodeKind::Group { children } => children.into_iter().map(RawNode::from).collect(),
            NodeKind::Leaf => Vec::new(),
        };
        Self {
            id: node.id,
            name: node.name,
            node_type,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_group_without_children() {
        let node: TreeNode =
            serde_json::from_str(r#"{"id":"org","name":"Org","type":"organization"}"#).unwrap();
        assert!(node.is_group());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_person_with_children() {
        let json = r#"{"id":"u1","name":"A","type":"person",
            "children":[{"id":"u2","name":"B","type":"person"}]}"#;
        let err = serde_json::from_str::<TreeNode>(json).unwrap_err();
        assert!(err.to_string().contains("leaf node 'u1' cannot have children"));
    }

    #[test]
    fn test_serialize_omits_empty_children() {
        let json = serde_json::to_string(&TreeNode::leaf("u1", "A")).unwrap();
        assert_eq!(json, r#"{"id":"u1","name":"A","type":"person"}"#);
    }
}
