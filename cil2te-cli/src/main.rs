//! cil2te CLI: CIL-to-TE policy translation plus TE maintenance passes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cil2te_translation::commands::{check_file, convert_file, tidy_file};

#[derive(Parser)]
#[command(name = "cil2te", about = "Translate SELinux CIL policy to TE source statements", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a .cil policy file to a sibling .te file
    Convert {
        /// Input CIL policy file (must end in .cil)
        input: PathBuf,
    },
    /// Sort a .te file and comment out duplicate rules
    Tidy {
        /// Input TE policy file (must end in .te)
        input: PathBuf,
    },
    /// Report rule references to undeclared types or attributes in a .te file
    Check {
        /// Input TE policy file (must end in .te)
        input: PathBuf,
        /// Extra declarations file treated as already known (a base policy)
        #[arg(long)]
        conf: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Convert { input } => {
            log::debug!("converting {}", input.display());
            let output = convert_file(&input)?;
            println!(
                "Conversion complete. TE content has been written to '{}'.",
                output.display()
            );
            Ok(())
        }
        Commands::Tidy { input } => {
            let output = tidy_file(&input)?;
            println!("Tidied policy written to '{}'.", output.display());
            Ok(())
        }
        Commands::Check { input, conf } => {
            let findings = check_file(&input, conf.as_deref())?;
            if findings.is_empty() {
                println!("No undefined type or attribute references found.");
                return Ok(());
            }
            for finding in &findings {
                let lines = finding
                    .lines
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                println!(
                    "Error: Type '{}' not found as type or attribute on line {}",
                    finding.name, lines
                );
            }
            // A lint that found problems must not exit 0.
            std::process::exit(1);
        }
    }
}
