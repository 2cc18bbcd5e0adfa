//! Filterable hierarchical selector
//!
//! Search, expand and select over organization/person trees (the approval
//! candidate picker) and attachment catalogue trees.

pub mod config;
pub mod debounce;
pub mod error;
pub mod picker;
pub mod presenter;
pub mod search;
pub mod selection;
pub mod source;
pub mod tree;

pub use config::PickerConfig;
pub use error::{ConfigError, PayloadError, TreeError};
pub use picker::Picker;
pub use presenter::{PresentedRow, RowPresenter, Segment};
pub use search::SearchQuery;
pub use selection::{Selection, SelectionTracker};
pub use tree::{ExpansionState, FlatRow, NodeKind, NodeType, Tree, TreeNode, flatten};
