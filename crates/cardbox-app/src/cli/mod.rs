mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cardbox_service::Handle;

pub use run::run;

#[derive(Debug, Parser)]
#[command(name = "cardbox")]
#[command(about = "Manage vCard contacts in files and directories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// vCard file or directory to read contacts from
    #[arg(short, long, global = true, default_value = ".")]
    pub source: PathBuf,

    /// Treat the source as a directory tree
    #[arg(long, global = true, conflicts_with = "file")]
    pub dir: bool,

    /// Treat the source as a single file
    #[arg(long, global = true)]
    pub file: bool,

    /// Settings file (defaults to ./cardbox.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every contact with its handle
    List,

    /// Show one contact
    Show(ShowArgs),

    /// Report pairs of contacts that look like the same person
    Duplicates(DuplicatesArgs),

    /// Write each contact to <DEST>/<full name>.vcf
    Export(ExportArgs),

    /// Append one contact to a file
    Append(AppendArgs),

    /// Write all contacts into a single file
    Bundle(BundleArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub handle: Handle,

    /// Print the contact as JSON instead of vCard
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DuplicatesArgs {
    /// Similarity a pair must exceed (0.0 to 1.0)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub destination: PathBuf,

    /// Write non-ASCII names quoted-printable
    #[arg(long)]
    pub quoted_printable: bool,
}

#[derive(Debug, Args)]
pub struct AppendArgs {
    pub handle: Handle,

    /// Target file, or a directory to append to <full name>.vcf in
    pub destination: PathBuf,

    /// Write non-ASCII names quoted-printable
    #[arg(long)]
    pub quoted_printable: bool,
}

#[derive(Debug, Args)]
pub struct BundleArgs {
    pub destination: PathBuf,

    /// Write non-ASCII names quoted-printable
    #[arg(long)]
    pub quoted_printable: bool,
}
