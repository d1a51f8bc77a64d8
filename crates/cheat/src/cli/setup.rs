use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cheat", bin_name = "cheat", version = get_version())]
#[command(about = "Browse, search and bookmark cheat sheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (bookmarks, config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Catalog directory, overriding the catalog-dir setting
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub catalogs: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Text,
        help_heading = "Options"
    )]
    pub output: OutputMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List loaded catalogs
    #[command(alias = "ls")]
    List,

    /// Show a catalog, optionally filtered by a query
    Show {
        catalog: String,

        /// Words to search for; joined with spaces
        query: Vec<String>,
    },

    /// Search a catalog
    Search {
        catalog: String,

        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Bookmark an example
    Mark {
        catalog: String,
        section: String,

        /// Example title; words are joined with spaces
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Remove bookmarks by index (1, 2-4) or by <catalog> <section> <title>
    #[command(alias = "rm")]
    Unmark {
        #[arg(required = true)]
        args: Vec<String>,
    },

    /// List bookmarks grouped by catalog
    Bookmarks {
        /// Only this catalog
        catalog: Option<String>,
    },

    /// Remove every bookmark
    Clear {
        /// Actually remove; without this only the bookmarks that would go are shown
        #[arg(short, long)]
        yes: bool,
    },

    /// Find bookmarks whose example is gone from the catalogs
    Doctor {
        /// Remove them
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
