use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitrank")]
#[command(about = "Ranks repository contributors from git history and blame output")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to the JSON configuration file (periods, user aliases, scoring)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Only count history changes under this subtree", default_value = "/")]
    pub subtree: String,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,

    #[arg(long, help = "Hide progress indicators and warnings")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run git against a repository and rank its contributors
    Report {
        #[arg(long, help = "Path to git repository")]
        repo: Option<PathBuf>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Rank contributors from previously captured git output
    Parse {
        #[arg(long, help = "File holding `git log --numstat --pretty='%an|%ad'` output")]
        history: PathBuf,

        #[arg(long, help = "File holding the blame summary of all tracked files")]
        blame: Option<PathBuf>,

        #[arg(long, help = "File holding the blame summary of selected files")]
        blame_selected: Option<PathBuf>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        init_tracing(&self.common);
        match self.command {
            Commands::Report { repo, json, ndjson } => {
                crate::stats::exec_report(self.common, repo, json, ndjson)
            }
            Commands::Parse {
                history,
                blame,
                blame_selected,
                json,
                ndjson,
            } => crate::stats::exec_parse(self.common, history, blame, blame_selected, json, ndjson),
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the verbosity flags.
fn init_tracing(common: &CommonArgs) {
    let default_level = if common.quiet {
        "error"
    } else {
        match common.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
