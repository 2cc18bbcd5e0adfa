//! Attachment catalogues.
//!
//! A catalogue is a folder that may hold files and sub-catalogues. In the
//! tree, catalogues are groups and files are leaves; inside a catalogue the
//! files come before the sub-catalogues.

use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, TreeError};
use crate::tree::{Tree, TreeNode};

/// A file in an attachment catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachFile {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub download_times: Option<u32>,
}

/// A folder of files and sub-catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachCatalogue {
    pub id: String,
    pub catalogue_name: String,
    #[serde(default)]
    pub children: Vec<AttachCatalogue>,
    #[serde(default)]
    pub attach_files: Vec<AttachFile>,
}

impl AttachCatalogue {
    /// Paths of the files directly inside this catalogue, for previewing.
    pub fn file_paths(&self) -> Vec<&str> {
        self.attach_files
            .iter()
            .filter_map(|f| f.file_path.as_deref())
            .collect()
    }

    fn to_node(&self) -> TreeNode {
        let files = self
            .attach_files
            .iter()
            .map(|f| TreeNode::leaf(&f.id, &f.file_name));
        let folders = self.children.iter().map(AttachCatalogue::to_node);
        TreeNode::group(&self.id, &self.catalogue_name, files.chain(folders).collect())
    }
}

/// Build a tree with one group per catalogue and one leaf per file.
pub fn attachment_tree(catalogues: &[AttachCatalogue]) -> Result<Tree, TreeError> {
    Tree::new(catalogues.iter().map(AttachCatalogue::to_node).collect())
}

/// Decode an attachment catalogue response body and build its tree.
pub fn parse_attachments(json: &str) -> Result<Tree, PayloadError> {
    let catalogues: Vec<AttachCatalogue> = serde_json::from_str(json)?;
    Ok(attachment_tree(&catalogues)?)
}

/// Human-readable file size: bytes below 1 KiB, then one decimal of KB or MB.
pub fn format_size(size: Option<u64>) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    match size.unwrap_or(0) {
        0 => "0B".to_string(),
        n if n < KB => format!("{n}B"),
        n if n < MB => format!("{:.1}KB", n as f64 / KB as f64),
        n => format!("{:.1}MB", n as f64 / MB as f64),
    }
}
