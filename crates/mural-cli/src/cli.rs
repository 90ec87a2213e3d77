use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mural")]
#[command(about = "Visitor feedback board for a static portfolio page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the feedback slot file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// HTML page whose board container is re-rendered after mutations
    #[arg(long, global = true, value_name = "PATH")]
    pub page: Option<PathBuf>,

    /// Quick capture: mural "great work on the gallery!"
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new feedback entry
    #[command(alias = "new")]
    Add {
        /// Feedback body
        text: Vec<String>,
        /// Visitor name (blank submits as anonymous)
        #[arg(long)]
        name: Option<String>,
        /// Rating from 1 to 5 (unusable values fall back to 5)
        #[arg(long)]
        rating: Option<String>,
    },
    /// List all feedback entries, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one feedback entry by id
    Delete {
        /// Entry id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete every feedback entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Render the feedback board
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RenderFormat {
    Html,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
