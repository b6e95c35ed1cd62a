use std::path::PathBuf;

use clap::{Parser, Subcommand};

use skillhub_cli::OutputFormat;
use skillhub_core::PresencePolicy;

#[derive(Parser)]
#[command(name = "skillhub")]
#[command(version)]
#[command(about = "Parse, score, format and index SKILL.md documents.")]
pub(crate) struct Cli {
    /// Override config directory (holds `skillhub/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Presence rule for scalar fields: explicit or defaulted.
    #[arg(long, global = true)]
    pub(crate) presence: Option<PresencePolicy>,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the parsed frontmatter and body as JSON.
    Parse {
        file: PathBuf,

        /// Include the original document text.
        #[arg(long)]
        raw: bool,
    },
    /// Print the quality breakdown of a document.
    Score {
        file: PathBuf,

        /// text or json (default: settings `output.format`, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the canonical form of a document.
    Format {
        file: PathBuf,

        /// Rewrite the file in place.
        #[arg(long)]
        write: bool,
    },
    /// Score every skill under a directory and print the leaderboard.
    Scan {
        dir: PathBuf,

        /// text or json (default: settings `output.format`, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the JSON index here (default: settings `catalog.index_path`).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Previous index to diff the scan against.
        #[arg(long)]
        existing: Option<PathBuf>,
    },
    /// Print JSON Schemas of the skill document types.
    Schema,
}
