//! ddl-diff CLI
//!
//! Command-line tool generating additive migrations from two schema dumps.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use ddl_diff::prelude::*;

/// Additive MySQL schema migrations from two DDL dumps.
#[derive(Parser)]
#[command(name = "ddl-diff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ADD/MODIFY/CREATE statements migrating old to new.
    Diff {
        /// Dump of the current schema.
        #[arg(long, env = "DDL_DIFF_OLD", default_value = "input/old.sql")]
        old: PathBuf,

        /// Dump of the desired schema.
        #[arg(long, env = "DDL_DIFF_NEW", default_value = "input/new.sql")]
        new: PathBuf,

        /// Directory receiving the four artifact files.
        #[arg(short, long, env = "DDL_DIFF_OUTPUT_DIR", default_value = "output")]
        output_dir: PathBuf,

        /// Print the report without writing files.
        #[arg(long)]
        dry_run: bool,

        /// Also print the CREATE TABLE statements.
        #[arg(long)]
        print_create: bool,
    },

    /// Print the parsed schema model of a dump as JSON.
    Model {
        /// Dump to parse.
        input: PathBuf,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
}

fn read_dump(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Diff {
            old,
            new,
            output_dir,
            dry_run,
            print_create,
        } => {
            let old_ddl = read_dump(&old)?;
            let new_ddl = read_dump(&new)?;

            let diff = diff_schemas(&old_ddl, &new_ddl)?;
            info!(
                "{} new tables, {} new columns, {} modified columns",
                diff.create_statements.len(),
                diff.add_statements.len(),
                diff.modify_statements.len()
            );

            let artifacts = OutputArtifacts::from(&diff);
            if dry_run {
                info!("Dry run mode - no files written.");
            } else {
                artifacts.write_to(&output_dir)?;
            }

            println!("{}", diff.report());
            if print_create {
                println!("--- CREATE STATEMENTS ---");
                println!("{}", artifacts.create);
            }
        }

        Commands::Model { input, pretty } => {
            let model = SchemaModel::parse(&read_dump(&input)?);
            let json = if pretty {
                serde_json::to_string_pretty(&model)
            } else {
                serde_json::to_string(&model)
            }
            .map_err(DiffError::from)?;
            println!("{json}");
        }
    }

    Ok(())
}
