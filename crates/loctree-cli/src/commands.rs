use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use walkdir::WalkDir;

use loctree_core::{document, merge_trees, normalize_tree, Alphabet};

use crate::cli::{Cli, Command, FixCaseArgs, SyncArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::FixCase(args) => cmd_fix_case(args),
        Command::Sync(args) => cmd_sync(args),
    }
}

// ── Run summary ───────────────────────────────────────────

#[derive(Serialize)]
struct Report {
    total: usize,
    changed: usize,
    skipped: usize,
    files: Vec<FileOutcome>,
}

#[derive(Serialize)]
struct FileOutcome {
    path: String,
    status: &'static str,
}

impl Report {
    fn from_outcomes(total: usize, files: Vec<FileOutcome>) -> Self {
        let changed = files
            .iter()
            .filter(|o| matches!(o.status, "modified" | "pending"))
            .count();
        let skipped = files.iter().filter(|o| o.status == "skipped").count();
        Report {
            total,
            changed,
            skipped,
            files,
        }
    }

    fn print_json(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

// ── fix-case ──────────────────────────────────────────────

fn cmd_fix_case(args: FixCaseArgs) -> anyhow::Result<i32> {
    let alphabet = Alphabet::cyrillic();
    let files = collect_json_files(&args.dir)?;
    let total = files.len();

    if total == 0 {
        if args.json {
            Report::from_outcomes(0, Vec::new()).print_json()?;
        } else {
            println!("No JSON files found.");
        }
        return Ok(0);
    }

    let mut outcomes = Vec::with_capacity(total);
    for (idx, rel) in files.iter().enumerate() {
        let full = args.dir.join(rel);
        let display = rel.display().to_string();

        let text = fs::read_to_string(&full)
            .with_context(|| format!("reading {}", full.display()))?;
        let tree = match document::from_str(&text) {
            Ok(tree) => tree,
            Err(err) => {
                if !args.json {
                    println!(
                        "[{}/{}] {display} {} ({err})",
                        idx + 1,
                        total,
                        "SKIPPED".yellow()
                    );
                }
                outcomes.push(FileOutcome {
                    path: display,
                    status: "skipped",
                });
                continue;
            }
        };

        let fixed = normalize_tree(&alphabet, &tree);
        let status = if fixed != tree {
            if args.check {
                "pending"
            } else {
                fs::write(&full, document::to_pretty(&fixed)?)
                    .with_context(|| format!("writing {}", full.display()))?;
                "modified"
            }
        } else {
            "clean"
        };

        if !args.json {
            match status {
                "modified" => {
                    println!("[{}/{}] {display} {}", idx + 1, total, "(modified)".green())
                }
                "pending" => println!(
                    "[{}/{}] {display} {}",
                    idx + 1,
                    total,
                    "(needs fixing)".red()
                ),
                _ => println!("[{}/{}] {display}", idx + 1, total),
            }
        }
        outcomes.push(FileOutcome {
            path: display,
            status,
        });
    }

    let report = Report::from_outcomes(total, outcomes);
    if args.json {
        report.print_json()?;
    } else if args.check {
        println!("Done. {}/{} files need fixing.", report.changed, report.total);
    } else {
        println!("Done. {}/{} files modified.", report.changed, report.total);
    }

    Ok(if args.check && report.changed > 0 { 1 } else { 0 })
}

// ── sync ──────────────────────────────────────────────────

fn cmd_sync(args: SyncArgs) -> anyhow::Result<i32> {
    let alphabet = Alphabet::cyrillic();
    let files = collect_json_files(&args.source)?;
    let total = files.len();

    if total == 0 {
        if args.json {
            Report::from_outcomes(0, Vec::new()).print_json()?;
        } else {
            println!("No JSON files found in source.");
        }
        return Ok(0);
    }

    let mut outcomes = Vec::with_capacity(total);
    for (idx, rel) in files.iter().enumerate() {
        let source_path = args.source.join(rel);
        let target_path = args.target.join(rel);
        let display = rel.display().to_string();

        let text = fs::read_to_string(&source_path)
            .with_context(|| format!("reading {}", source_path.display()))?;
        let incoming = match document::from_str(&text) {
            Ok(tree) => tree,
            Err(err) => {
                if !args.json {
                    println!(
                        "[{}/{}] {display} {} ({err})",
                        idx + 1,
                        total,
                        "SKIPPED".yellow()
                    );
                }
                outcomes.push(FileOutcome {
                    path: display,
                    status: "skipped",
                });
                continue;
            }
        };

        // A missing or malformed existing file means first-time sync: the
        // incoming tree is taken wholesale.
        let existing = fs::read_to_string(&target_path)
            .ok()
            .and_then(|text| document::from_str(&text).ok());
        let (merged, status) = match existing {
            Some(prior) => (merge_trees(&alphabet, &incoming, &prior), "merged"),
            None => (incoming, "new"),
        };

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&target_path, document::to_pretty(&merged)?)
            .with_context(|| format!("writing {}", target_path.display()))?;

        if !args.json {
            match status {
                "new" => println!("[{}/{}] {display} {}", idx + 1, total, "(new)".cyan()),
                _ => println!("[{}/{}] {display}", idx + 1, total),
            }
        }
        outcomes.push(FileOutcome {
            path: display,
            status,
        });
    }

    let report = Report::from_outcomes(total, outcomes);
    if args.json {
        report.print_json()?;
    } else {
        println!("Done. Processed {} files.", report.total);
    }

    Ok(0)
}

// ── File discovery ────────────────────────────────────────

/// Collect every `*.json` under `base`, as paths relative to `base`, sorted.
fn collect_json_files(base: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !base.is_dir() {
        anyhow::bail!("directory not found: {}", base.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(base) {
        let entry = entry.with_context(|| format!("walking {}", base.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path.strip_prefix(base)?.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
