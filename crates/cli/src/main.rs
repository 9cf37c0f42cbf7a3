//! U-Sheetcut command-line runner

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use u_sheetcut_cli::{HistoryStore, DEFAULT_HISTORY_FILE};
use u_sheetcut_core::{OptimizationRequest, OptimizationResult, SolveSummary};
use u_sheetcut_cutting::{CuttingConfig, SheetFillingScheduler};

#[derive(Parser)]
#[command(name = "sheetcut")]
#[command(about = "Guillotine panel cutting optimizer")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a cutting list read from a JSON request file
    Optimize {
        /// Path to the request (parts with counts, sheet template)
        file: PathBuf,

        /// Output file for the result (JSON). Printed to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also derive the two-cuts-per-part saw sequence for each sheet
        #[arg(long)]
        saw: bool,

        /// Save the calculation to the history under this label
        #[arg(long)]
        save: Option<String>,

        /// History file
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history: PathBuf,
    },

    /// Run the built-in demo cutting list
    Sample {
        /// Also derive the two-cuts-per-part saw sequence for each sheet
        #[arg(long)]
        saw: bool,
    },

    /// Manage saved calculations
    History {
        #[command(subcommand)]
        action: HistoryAction,

        /// History file
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history: PathBuf,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved calculations, newest first
    List,
    /// Print a saved calculation
    Show { id: u64 },
    /// Delete a saved calculation
    Delete { id: u64 },
    /// Re-run a saved request and compare with the stored result
    Replay { id: u64 },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Optimize {
            file,
            output,
            saw,
            save,
            history,
        } => {
            let request = read_request(&file)?;
            let result = scheduler(saw).solve_request(&request)?;
            print_summary(&result);

            if let Some(label) = save {
                match HistoryStore::open(&history).and_then(|mut store| {
                    let id = store.save(&label, &request, &result)?;
                    Ok((id, store))
                }) {
                    Ok((id, store)) => {
                        eprintln!("Saved as record {} in {}", id, store.path().display())
                    }
                    Err(e) => log::error!("history saving failed: {}", e),
                }
            }

            write_result(&result, output.as_deref())?;
        }

        Commands::Sample { saw } => {
            let result = scheduler(saw).solve_request(&OptimizationRequest::sample())?;
            print_summary(&result);
            write_result(&result, None)?;
        }

        Commands::History { action, history } => {
            let mut store = HistoryStore::open(&history)?;
            match action {
                HistoryAction::List => {
                    let entries = store.list();
                    if entries.is_empty() {
                        println!("No saved calculations in {}", history.display());
                    }
                    for entry in entries {
                        println!(
                            "{:>5}  {}  {}",
                            entry.id,
                            entry.date.format("%Y-%m-%d %H:%M:%S"),
                            entry.summary
                        );
                    }
                }
                HistoryAction::Show { id } => {
                    let record = store.get(id)?;
                    println!("{}", serde_json::to_string_pretty(record)?);
                }
                HistoryAction::Delete { id } => {
                    store.delete(id)?;
                    println!("Deleted record {}", id);
                }
                HistoryAction::Replay { id } => {
                    let outcome = store.replay(id)?;
                    print_summary(&outcome.fresh);
                    if !outcome.matches {
                        bail!("record {} no longer reproduces its stored result", id);
                    }
                    println!("Record {} reproduces its stored result", id);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn scheduler(saw: bool) -> SheetFillingScheduler {
    SheetFillingScheduler::new(CuttingConfig::new().with_saw_instructions(saw))
}

fn read_request(path: &Path) -> anyhow::Result<OptimizationRequest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_result(result: &OptimizationResult, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Results saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_summary(result: &OptimizationResult) {
    let summary = SolveSummary::from(result);
    eprintln!(
        "Placed {}/{} parts on {} sheet(s), utilization {:.1}%",
        summary.total_placed,
        summary.total_requested,
        summary.sheets_used,
        summary.utilization_percent
    );
    if !result.unplaced.is_empty() {
        eprintln!("Parts larger than the sheet: {:?}", result.unplaced);
    }
}
