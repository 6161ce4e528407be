//! CLI argument parsing and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "atelier", author, version, about = "Preview Atelier website content", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Content root, overriding `content.path` from the config.
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// News blog posts.
    News(NewsCommand),
    /// Software project pages.
    Software(SoftwareCommand),
    /// Configuration operations.
    Config(ConfigCommand),
}

/// News subcommands.
#[derive(Parser, Debug)]
pub struct NewsCommand {
    /// News subcommand to execute.
    #[command(subcommand)]
    pub command: NewsAction,
}

/// Available news subcommands.
#[derive(Subcommand, Debug)]
pub enum NewsAction {
    /// List posts, newest first.
    List {
        /// Include drafts.
        #[arg(long)]
        drafts: bool,
    },

    /// Show one post with its rendered HTML.
    Get {
        /// Post slug.
        slug: String,
    },

    /// Show the posts most related to a post by shared tags.
    Related {
        /// Reference post slug.
        slug: String,

        /// Maximum number of posts (defaults to `news.related_limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List tags of published posts with their counts.
    Tags,
}

/// Software subcommands.
#[derive(Parser, Debug)]
pub struct SoftwareCommand {
    /// Software subcommand to execute.
    #[command(subcommand)]
    pub command: SoftwareAction,
}

/// Available software subcommands.
#[derive(Subcommand, Debug)]
pub enum SoftwareAction {
    /// List projects by title.
    List,

    /// Show one project page with its rendered HTML.
    Get {
        /// Project slug.
        slug: String,
    },
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,
}
