//! Tree snapshot and search errors

use thiserror::Error;

/// Errors raised while building a tree snapshot.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two nodes share the same id. Expansion and selection are keyed by id,
    /// so the snapshot is rejected instead of silently merging their state.
    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("node '{name}' has an empty id")]
    EmptyId { name: String },

    /// A serialized `person` node carried children.
    #[error("leaf node '{id}' cannot have children")]
    LeafWithChildren { id: String },

    #[error("node '{id}' is nested deeper than {limit} levels")]
    TooDeep { id: String, limit: usize },
}
