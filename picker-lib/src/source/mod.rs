//! Building trees from workflow API payloads.
//!
//! The HTTP calls themselves live with the host; these functions take the
//! decoded (or raw JSON) response bodies.

pub mod attachment;
pub mod candidate;

use crate::error::PayloadError;
use crate::tree::Tree;

pub use attachment::{AttachCatalogue, AttachFile, attachment_tree, format_size, parse_attachments};
pub use candidate::{Candidate, candidate_tree, candidates_field, parse_candidates};

/// Decode a tree already in node shape (`id`, `name`, `type`, `children`).
pub fn parse_tree(json: &str) -> Result<Tree, PayloadError> {
    Ok(serde_json::from_str(json)?)
}
