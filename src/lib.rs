//! Dirsketch - display a directory tree with ignorable directories
//!
//! The tree lists all files before all subdirectories at each level, draws
//! `├──`/`└──`/`│` glyphs for structure, and can exclude directories by
//! name (or glob pattern) at any nesting depth. The plain-text rendering
//! can be copied to the system clipboard.

pub mod clipboard;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use clipboard::copy_to_clipboard;
pub use error::TreeError;
pub use output::{OutputConfig, TreeFormatter, print_json};
pub use tree::{TreeNode, TreeWalker, WalkerConfig, parse_ignore_list};

use std::path::Path;

/// Render the tree rooted at `root` as plain text.
///
/// `ignore_names` are directory names (or glob patterns) excluded at any
/// nesting level. Fails with [`TreeError::InvalidRoot`] when `root` does
/// not exist or is not a directory.
pub fn render_tree(root: &Path, ignore_names: &[String]) -> Result<String, TreeError> {
    let config = WalkerConfig {
        ignore_names: ignore_names.to_vec(),
        ..Default::default()
    };
    let node = TreeWalker::new(config).walk(root)?;
    Ok(TreeFormatter::new(OutputConfig { use_color: false }).format(&node))
}
