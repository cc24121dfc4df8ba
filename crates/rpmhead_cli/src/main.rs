//! rpmhead CLI
//!
//! Command-line tools for producing RPM header tables.
//!
//! # Commands
//!
//! - `write` - Write the lead and signature table of a package
//! - `signature` - Write only the signature table
//! - `inspect` - Display the signature table's index records
//! - `dump` - Hex dump the signature table bytes

mod commands;

use clap::{Parser, Subcommand};
use commands::{PackageArgs, ValueArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// RPM header table tools.
#[derive(Parser)]
#[command(name = "rpmhead")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the lead followed by the signature table
    Write {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        package: PackageArgs,

        #[command(flatten)]
        values: ValueArgs,
    },

    /// Write only the signature table
    Signature {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        values: ValueArgs,
    },

    /// Display the signature table's index records
    Inspect {
        #[command(flatten)]
        values: ValueArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Hex dump the signature table bytes
    Dump {
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Write {
            output,
            package,
            values,
        } => {
            commands::write::run(&output, &package, &values)?;
        }
        Commands::Signature { output, values } => {
            commands::signature::run(&output, &values)?;
        }
        Commands::Inspect { values, format } => {
            commands::inspect::run(&values, &format)?;
        }
        Commands::Dump { values } => {
            commands::dump::run(&values)?;
        }
        Commands::Version => {
            println!("rpmhead CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("rpmhead core v{}", rpmhead_core::VERSION);
        }
    }

    Ok(())
}
