use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gwho")]
#[command(about = "Git contributor analysis tool for commit activity, languages, and tooling")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository (defaults to current directory)")]
    pub repo: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List contributors with commit counts, newest activity first
    Contributors {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, help = "Only show contributors whose name contains this text")]
        filter: Option<String>,
    },
    /// Languages, file counts, and tooling for a single author
    Developer {
        #[arg(help = "Author name as it appears in the commit log")]
        author: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Developer stats for every contributor in one pass
    Report {
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
        match self.command {
            Commands::Contributors { json, ndjson, filter } => {
                crate::contributors::exec(self.common, filter, json, ndjson)
            }
            Commands::Developer { author, json, ndjson } => {
                crate::developer::exec(self.common, author, json, ndjson)
            }
            Commands::Report { json, ndjson } => {
                crate::report::exec(self.common, json, ndjson)
            }
        }
    }
}
