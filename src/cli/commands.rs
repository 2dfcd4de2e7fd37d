use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio", about = concat!("folio v", env!("CARGO_PKG_VERSION"), " - your portfolio is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read content from a specific portfolio.toml
    #[arg(short = 'c', long = "content", global = true)]
    pub content: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter portfolio.toml in the current directory
    Init(InitArgs),
    /// List projects, optionally filtered by search text and tag
    Projects(ProjectsArgs),
    /// List the tag universe across all projects
    Tags,
    /// List skill groups
    Skills,
    /// Show the profile
    Profile,
    /// Validate content integrity
    Check,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing portfolio.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ProjectsArgs {
    /// Case-insensitive text to match against project fields
    #[arg(short, long)]
    pub query: Option<String>,
    /// Exact technology tag to filter by
    #[arg(short, long)]
    pub tag: Option<String>,
}
