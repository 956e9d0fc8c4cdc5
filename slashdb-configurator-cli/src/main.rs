//! SlashDB source configurator host
//!
//! Lists the delta candidates of a source schema, or records one of them as
//! the configuration's delta field.
//!
//! Usage:
//!   slashdb-configurator candidates --schema schema.json
//!   slashdb-configurator select --schema schema.json --config config.json --value ModifiedDate

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use slashdb_configurator_cli::{candidates, load_schema, select};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "slashdb-configurator")]
#[command(about = "Pick the delta field of a SlashDB source")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the delta candidates of a schema as JSON
    Candidates {
        /// Path to the source schema JSON
        #[arg(short, long)]
        schema: PathBuf,
    },
    /// Store a candidate as the configuration's delta field
    Select {
        /// Path to the source schema JSON
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to the configuration JSON (created if missing)
        #[arg(short, long, default_value = "configuration.json")]
        config: PathBuf,

        /// Candidate value to store; `--noSelection--` clears it
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Candidates { schema } => {
            let list = candidates(load_schema(&schema)?);
            debug!(count = list.len(), "Derived candidates");
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Command::Select {
            schema,
            config,
            value,
        } => {
            let event = select(&schema, &config, &value)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
