//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{
    EntryKind, ListingFormatter, OutputConfig, TreeWalker, WalkerConfig, list_entries, logging,
    print_json,
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

/// Which entries a flat listing shows
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListKind {
    /// Every entry
    All,
    /// Regular files only
    Files,
    /// Directories and symlinks
    Folders,
}

impl ListKind {
    fn keeps(self, kind: EntryKind) -> bool {
        match self {
            ListKind::All => true,
            ListKind::Files => kind.is_file(),
            ListKind::Folders => kind.is_folder_candidate(),
        }
    }
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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "List a directory or print its tree as JSON")]
#[command(version)]
struct Args {
    /// Directory to inspect
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print a flat listing instead of the JSON tree
    #[arg(long = "list", value_name = "KIND")]
    list: Option<ListKind>,

    /// Print the JSON tree on a single line
    #[arg(long = "compact", conflicts_with = "list")]
    compact: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Leave symlinks out of the tree instead of descending into them
    #[arg(long = "no-follow-symlinks")]
    no_follow_symlinks: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log what the walk is doing to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(if args.verbose { "debug" } else { "warn" });

    // The library lists a missing directory as empty; the CLI reports it
    if !args.path.is_dir() {
        eprintln!("dirtree: cannot access '{}': No such directory", args.path.display());
        process::exit(1);
    }

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };

    let result = if let Some(kind) = args.list {
        let entries: Vec<_> = list_entries(&args.path)
            .into_iter()
            .filter(|e| kind.keeps(e.kind))
            .collect();
        ListingFormatter::new(output_config).print(&entries)
    } else {
        let walker = TreeWalker::new(WalkerConfig {
            max_depth: args.level,
            follow_symlinks: !args.no_follow_symlinks,
        });
        let tree = walker.walk(&args.path);
        tracing::debug!(files = tree.total_files(), "walk finished");
        print_json(&tree, !args.compact)
    };

    if let Err(e) = result {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}
