//! Tree model: nodes, validated snapshots, expansion state and flattening.

mod expansion;
mod flatten;
mod node;
mod snapshot;

pub use expansion::ExpansionState;
pub use flatten::{FlatRow, flatten};
pub use node::{NodeKind, NodeType, TreeNode};
pub use snapshot::{MAX_DEPTH, Tree};
