//! Payload decode and outbound field errors

use thiserror::Error;

use super::TreeError;

/// Errors raised while turning API payloads into trees, or selections into
/// submission fields.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to decode payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    /// The approval submission requires at least one recipient.
    #[error("no candidates selected")]
    NoCandidates,
}
