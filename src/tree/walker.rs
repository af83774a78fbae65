//! TreeWalker - depth-first directory traversal

use std::fs;
use std::path::Path;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::node::TreeNode;
use super::utils::should_skip_dir;

/// Tree walker that builds the full tree in memory.
///
/// Traversal is synchronous, read-only, and runs to completion on the
/// calling thread before any result is produced.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Fails with [`TreeError::InvalidRoot`] if `root` does not exist or
    /// is not a directory, and with [`TreeError::Io`] if a directory
    /// cannot be read mid-traversal. No partial tree is returned on
    /// error.
    pub fn walk(&self, root: &Path) -> Result<TreeNode, TreeError> {
        if !root.is_dir() {
            return Err(TreeError::InvalidRoot(root.to_path_buf()));
        }

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        self.walk_dir(root, name, 0)
    }

    fn walk_dir(&self, path: &Path, name: String, depth: usize) -> Result<TreeNode, TreeError> {
        // At the depth limit the directory is shown but not descended into.
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(TreeNode::Dir {
                name,
                path: path.to_path_buf(),
                children: Vec::new(),
            });
        }

        let entries = fs::read_dir(path).map_err(|e| TreeError::Io(e, path.to_path_buf()))?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| TreeError::Io(e, path.to_path_buf()))?;
            let entry_path = entry.path();
            let entry_name = entry.file_name().to_string_lossy().to_string();

            if entry_path.is_dir() {
                // Symlinked directories can form cycles; skip them.
                if entry_path.is_symlink() {
                    continue;
                }
                if should_skip_dir(&entry_name, &self.config.ignore_names) {
                    continue;
                }
                dirs.push((entry_path, entry_name));
            } else if entry_path.is_file() {
                files.push((entry_path, entry_name));
            }
            // Anything else (broken links, sockets) is omitted.
        }

        // Files before subdirectories, each group sorted by name. The
        // underlying enumeration order is platform-dependent; sorting
        // keeps output identical across runs and platforms.
        files.sort_by(|a, b| a.1.cmp(&b.1));
        dirs.sort_by(|a, b| a.1.cmp(&b.1));

        let mut children = Vec::with_capacity(files.len() + dirs.len());
        for (file_path, file_name) in files {
            children.push(TreeNode::File {
                name: file_name,
                path: file_path,
            });
        }
        for (dir_path, dir_name) in dirs {
            children.push(self.walk_dir(&dir_path, dir_name, depth + 1)?);
        }

        Ok(TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
        })
    }
}
