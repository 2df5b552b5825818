//! Verify command - check alpha-beta against full minimax across positions

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::VerifyConfig,
        output::{create_progress, format_number, print_kv, print_section},
    },
    search::{reachable_positions, sample_positions, verify_positions},
};

#[derive(Parser, Debug)]
#[command(about = "Verify alpha-beta against full minimax")]
pub struct VerifyArgs {
    /// Check this many random positions instead of the full state space
    #[arg(long)]
    pub sample: Option<usize>,

    /// Random seed for sampling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&VerifyArgs> for VerifyConfig {
    fn from(args: &VerifyArgs) -> Self {
        VerifyConfig {
            sample: args.sample,
            seed: args.seed,
            progress: !args.no_progress && !args.json,
        }
    }
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let config = VerifyConfig::from(&args);
    let positions = match config.sample {
        Some(count) => sample_positions(count, config.seed),
        None => reachable_positions(),
    };

    let progress = if config.progress {
        Some(create_progress(positions.len() as u64)?)
    } else {
        None
    };
    if let Some(pb) = &progress {
        pb.set_message("alpha-beta vs minimax");
    }
    let report = verify_positions(&positions, progress.as_ref())?;
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("Verification");
        print_kv("Positions searched", &format_number(report.positions as u64));
        print_kv(
            "Positions with cutoffs",
            &format_number(report.cutoff_positions as u64),
        );
        print_kv("Alpha-beta nodes", &format_number(report.pruned_nodes.get()));
        print_kv("Minimax nodes", &format_number(report.unpruned_nodes.get()));
        print_kv(
            "Pruned away",
            &format!("{:.1}%", report.pruning_ratio() * 100.0),
        );
        print_kv(
            "Disagreements",
            &format_number(report.disagreements.len() as u64),
        );
    }

    if !report.is_consistent() {
        bail!(
            "{} position(s) where alpha-beta and minimax disagree",
            report.disagreements.len()
        );
    }
    Ok(())
}
