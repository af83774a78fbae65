//! Configuration types for tree walking

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directory names (or glob patterns) excluded at any nesting level.
    /// Applies to directories only; files keep their names out of this.
    pub ignore_names: Vec<String>,
    /// Descend at most this many levels below the root.
    pub max_depth: Option<usize>,
}
