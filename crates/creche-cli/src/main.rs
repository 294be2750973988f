//! `creche` CLI — check a staffing plan against a child attendance plan.
//!
//! ## Usage
//!
//! ```sh
//! # Check two plans (JSON, as produced by the ingestion tools)
//! creche check --children enfants.json --staff planning.json
//!
//! # Machine-readable output
//! creche check --children enfants.json --staff planning.json --json
//! ```
//!
//! Exit code is 0 when the staffing plan satisfies every rule, 1 otherwise
//! (violations found, or the plans could not be read).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process;

use creche_engine::{check, ChildPlan, StaffPlan};

#[derive(Parser)]
#[command(name = "creche", version, about = "Weekly childcare staffing checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every rule over a pair of plans and report violations
    Check {
        /// Child attendance plan (JSON file)
        #[arg(long)]
        children: String,
        /// Staff work plan (JSON file)
        #[arg(long)]
        staff: String,
        /// Print diagnostics as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            children,
            staff,
            json,
        } => {
            let child_plan: ChildPlan = read_plan(&children)?;
            let staff_plan: StaffPlan = read_plan(&staff)?;

            let diagnostics = check(&child_plan, &staff_plan);

            if json {
                println!("{}", serde_json::to_string_pretty(&diagnostics)?);
            } else if diagnostics.is_empty() {
                println!("No violations found.");
            } else {
                println!(
                    "{} violation(s) found:",
                    diagnostics.len()
                );
                for diagnostic in &diagnostics {
                    println!("  {diagnostic}");
                }
            }

            if !diagnostics.is_empty() {
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_plan<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse plan: {}", path))
}
