//! Tree formatter
//!
//! This module provides `TreeFormatter` which renders a `TreeNode` either
//! to a plain string (the text that goes to the clipboard) or to stdout
//! with colors. Both paths produce identical characters; color only adds
//! terminal escapes around them.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the tree as plain text.
    ///
    /// The root renders as `<name>/` with no connector; every other entry
    /// renders as one `<prefix><connector><name>` line, where directories
    /// carry a trailing `/`.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output, "", true, true);
        output
    }

    /// Print the tree to stdout, colorized when configured.
    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_node(node, &mut stdout, "", true, true)
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name, .. } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                output.push('\n');
            }
            TreeNode::Dir { name, children, .. } => {
                if is_root {
                    // Root node - print without connector
                    output.push_str(name);
                    output.push_str("/\n");
                } else {
                    output.push_str(prefix);
                    output.push_str(connector);
                    output.push_str(name);
                    output.push_str("/\n");
                }

                let new_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.format_node(child, output, &new_prefix, child_is_last, false);
                }
            }
        }
    }

    fn print_node(
        &self,
        node: &TreeNode,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name, .. } => {
                write!(stdout, "{}{}", prefix, connector)?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(stdout, "{}", name)?;
                stdout.reset()?;
                writeln!(stdout)?;
            }
            TreeNode::Dir { name, children, .. } => {
                if !is_root {
                    write!(stdout, "{}{}", prefix, connector)?;
                }
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(stdout, "{}", name)?;
                stdout.reset()?;
                writeln!(stdout, "/")?;

                let new_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.print_node(child, stdout, &new_prefix, child_is_last, false)?;
                }
            }
        }
        Ok(())
    }
}
