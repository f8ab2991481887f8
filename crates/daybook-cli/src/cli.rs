use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use daybook_core::VERSION;

/// Daybook - a small, CLI-first personal journal
#[derive(Parser)]
#[command(name = "daybook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "DAYBOOK_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Journal file location to record in the config
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry text (read from stdin or a prompt when omitted)
    #[arg(value_name = "TEXT", num_args = 0..)]
    pub text: Vec<String>,

    /// Set a custom date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text or date fragment (case sensitive, dates as YYYY-MM-DD)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `random` command
#[derive(Args)]
pub struct RandomArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments shared by the ranked statistics
#[derive(Args)]
pub struct RankArgs {
    /// Number of rows to show (defaults from config)
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `stats letters`
#[derive(Args)]
pub struct LettersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Most common words
    Words(RankArgs),

    /// Longest distinct words
    Longest(RankArgs),

    /// Letter frequency over all entry text
    Letters(LettersArgs),

    /// Most common adjacent word pairs
    Combos(RankArgs),
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file
    Init(InitArgs),

    /// Add a new entry dated today
    Add(AddArgs),

    /// List all entries
    List(ListArgs),

    /// Search entries by text or date
    Search(SearchArgs),

    /// Show a random entry
    Random(RandomArgs),

    /// Delete an entry by ID
    Delete(DeleteArgs),

    /// Journal statistics
    #[command(subcommand)]
    Stats(StatsCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
