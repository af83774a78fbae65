//! CLI entry point for dirsketch

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirsketch::{
    OutputConfig, TreeError, TreeFormatter, TreeWalker, WalkerConfig, copy_to_clipboard,
    parse_ignore_list, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirsketch")]
#[command(about = "Display a directory tree with ignorable directories")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip directories by name, comma-separated; glob patterns are
    /// accepted (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAMES")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Copy the tree to the system clipboard
    #[arg(short = 'c', long = "copy", conflicts_with = "json")]
    copy: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let ignore_names: Vec<String> = args
        .ignore
        .iter()
        .flat_map(|list| parse_ignore_list(list))
        .collect();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let walker_config = WalkerConfig {
        ignore_names,
        max_depth: args.level,
    };

    let node = match TreeWalker::new(walker_config).walk(&root) {
        Ok(node) => node,
        Err(TreeError::InvalidRoot(_)) => {
            eprintln!(
                "dirsketch: invalid path: '{}' is not a directory",
                args.path.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dirsketch: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&node)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&node)
    };

    if let Err(e) = result {
        eprintln!("dirsketch: error writing output: {}", e);
        process::exit(1);
    }

    if args.copy {
        let text = TreeFormatter::new(OutputConfig { use_color: false }).format(&node);
        match copy_to_clipboard(&text) {
            Ok(()) => eprintln!("dirsketch: copied to clipboard"),
            Err(e) => {
                eprintln!("dirsketch: {}", e);
                process::exit(1);
            }
        }
    }
}
