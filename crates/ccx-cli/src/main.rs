use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ccx_runner::{run_validation, Config};

#[derive(Parser)]
#[command(name = "ccx", version, about = "Cross-validate client identity documents")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate consistency across every client's documents under a root
    Validate {
        /// Root directory containing grouping directories
        root: PathBuf,

        /// Optional TOML config for discovery prefixes and output targets
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the valid-clients list target
        #[arg(long)]
        valid_out: Option<PathBuf>,

        /// Override the invalid-clients list target
        #[arg(long)]
        invalid_out: Option<PathBuf>,

        /// Override the JSON summary target
        #[arg(long)]
        summary_out: Option<PathBuf>,
    },

    /// Recursively expand zip archives (including archives inside archives)
    Unpack {
        /// Root directory to scan for .zip files
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate { root, config, valid_out, invalid_out, summary_out } => {
            let mut cfg = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::default_for_root(&root),
            };
            if let Some(p) = valid_out {
                cfg.outputs.valid_list = p;
            }
            if let Some(p) = invalid_out {
                cfg.outputs.invalid_list = p;
            }
            if let Some(p) = summary_out {
                cfg.outputs.summary = p;
            }

            let summary = run_validation(&root, cfg.clone())?;
            println!(
                "Validation complete: {} of {} clients have consistent information ({} skipped with too few documents).",
                summary.valid, summary.verdicts, summary.skipped
            );
            println!("Valid client list: {}", cfg.outputs.valid_list.display());
            println!("Invalid client list: {}", cfg.outputs.invalid_list.display());
            println!("Summary: {}", cfg.outputs.summary.display());
        }
        Command::Unpack { root } => {
            let report = ccx_archive::expand_all(&root)?;
            println!(
                "Expanded {} archives in {} passes ({} failed).",
                report.extracted.len(),
                report.passes,
                report.failed.len()
            );
            for failed in &report.failed {
                println!("  failed: {}", failed.display());
            }
        }
    }
    Ok(())
}
