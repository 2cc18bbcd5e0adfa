//! Approval candidates.

use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, TreeError};
use crate::tree::{Tree, TreeNode};

/// Id of the synthetic group holding every candidate.
pub const CANDIDATE_ROOT_ID: &str = "org";

/// Display name of the synthetic candidate group ("selectable users").
pub const CANDIDATE_ROOT_NAME: &str = "可选择用户";

/// A user who may receive the next step of a workflow instance, as returned
/// by the candidate lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub candidate_id: String,
    pub display_user_name: String,
}

/// Wrap `candidates` in a single root group, keeping payload order.
pub fn candidate_tree(candidates: &[Candidate]) -> Result<Tree, TreeError> {
    let children = candidates
        .iter()
        .map(|c| TreeNode::leaf(&c.candidate_id, &c.display_user_name))
        .collect();
    Tree::new(vec![TreeNode::group(
        CANDIDATE_ROOT_ID,
        CANDIDATE_ROOT_NAME,
        children,
    )])
}

/// Decode a candidate lookup response body and build its tree.
pub fn parse_candidates(json: &str) -> Result<Tree, PayloadError> {
    let candidates: Vec<Candidate> = serde_json::from_str(json)?;
    log::debug!("Decoded {} candidates", candidates.len());
    Ok(candidate_tree(&candidates)?)
}

/// Format selected candidate ids for the `Candidates` field of an approval
/// submission. At least one candidate is required.
pub fn candidates_field<S: AsRef<str>>(ids: &[S]) -> Result<String, PayloadError> {
    if ids.is_empty() {
        return Err(PayloadError::NoCandidates);
    }
    Ok(ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(","))
}
