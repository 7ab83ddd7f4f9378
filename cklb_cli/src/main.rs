//! `cklb` - STIG benchmark to CKLB checklist pipeline CLI

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use cklb_core::checklist::checklist_to_json;
use cklb_core::config::constants::store::DEFAULT_DB_FILE;
use cklb_core::merge::{merge_changes, ChangeSet};
use cklb_core::store::Db;
use cklb_core::{benchmark, benchmark_to_checklist};

#[derive(Parser)]
#[command(name = "cklb", version, about = "STIG benchmark to CKLB checklist pipeline")]
struct Cli {
    /// Path to the checklist database
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform a benchmark JSON document into a stored checklist
    Import {
        /// Benchmark JSON file
        benchmark: PathBuf,

        /// Profile id to select (repeatable, at least one required)
        #[arg(long = "profile", required = true)]
        profiles: Vec<String>,
    },

    /// Export a stored checklist as CKLB JSON
    Export {
        /// Checklist id
        id: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List stored checklists
    List,

    /// Set the status of one rule
    SetStatus {
        /// Rule uuid
        uuid: String,

        /// New status (not_reviewed, not_a_finding, open, not_applicable)
        status: String,
    },

    /// Delete every record from every store
    Clear,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let db = Db::open(&cli.db)?;

    match cli.command {
        Command::Import {
            benchmark: path,
            profiles,
        } => {
            let text = fs::read_to_string(&path)?;
            let document = benchmark::parse_benchmark(&text)?;
            let profile_ids: Vec<&str> = profiles.iter().map(String::as_str).collect();
            let checklist = benchmark_to_checklist(&document.benchmark, &profile_ids)?;
            db.import_checklist(&checklist)?;
            println!("Imported checklist {} ({})", checklist.id, checklist.title);
        }

        Command::Export { id, output } => {
            let checklist = db.export_checklist(&id)?;
            let json = checklist_to_json(&checklist)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    println!("Wrote checklist {} to {}", id, path.display());
                }
                None => println!("{json}"),
            }
        }

        Command::List => {
            let records = db.checklists().get_all()?;
            if records.is_empty() {
                println!("No checklists stored");
            }
            for record in records {
                println!("{}  {}", record.id, record.title);
            }
        }

        Command::SetStatus { uuid, status } => {
            let rule = db.rules().get(&uuid)?;
            let current = HashMap::from([(uuid.clone(), rule)]);

            let mut changes = ChangeSet::new();
            changes.record(&format!("rule.{uuid}.status"), &status)?;

            let updated = merge_changes(&current, &changes)?;
            if updated.is_empty() {
                println!("Rule {uuid} already has status {status}");
            } else {
                for rule in &updated {
                    db.rules().put(rule)?;
                }
                println!("Rule {uuid} set to {status}");
            }
        }

        Command::Clear => {
            db.checklist_stigs().clear()?;
            db.rules().clear()?;
            db.stigs().clear()?;
            db.checklists().clear()?;
            println!("Cleared all stores");
        }
    }

    Ok(())
}
