//! Directory tree walking logic
//!
//! `TreeWalker` builds the full tree in memory; formatting lives in
//! [`crate::output`].

mod config;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use node::TreeNode;
pub use utils::parse_ignore_list;
pub use walker::TreeWalker;
