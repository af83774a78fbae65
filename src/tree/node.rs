//! Tree node type shared by the walker and the formatters

use std::path::PathBuf;

use serde::Serialize;

/// A single entry in the directory tree.
///
/// Children of a `Dir` hold all files before all subdirectories, each
/// group sorted by name. The walker establishes this order; the
/// formatters rely on it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}
