use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// loctree — maintenance tool for localized JSON trees
///
/// Sentence-cases Cyrillic translation values and syncs freshly extracted
/// string trees into hand-edited ones.
#[derive(Parser)]
#[command(name = "loctree", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite Cyrillic sentence casing across a tree of JSON files
    FixCase(FixCaseArgs),
    /// Sync a freshly extracted tree into a hand-edited one
    Sync(SyncArgs),
}

#[derive(Args)]
pub struct FixCaseArgs {
    /// Directory holding .json files (searched recursively)
    pub dir: PathBuf,
    /// Report files that would change without rewriting them
    /// (exits 1 when changes are pending)
    #[arg(long)]
    pub check: bool,
    /// Print a JSON summary instead of progress lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SyncArgs {
    /// Source-of-truth tree (freshly extracted strings)
    pub source: PathBuf,
    /// Target tree holding hand-edited translations
    pub target: PathBuf,
    /// Print a JSON summary instead of progress lines
    #[arg(long)]
    pub json: bool,
}
