//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use super::workspace::Workspace;
use taskdist::output::OutputMode;

/// taskdist - Automatic task distribution
#[derive(Parser, Debug)]
#[command(
    name = "taskdist",
    version,
    about = "Automatic task distribution",
    long_about = "Assign open tasks to employees by specialization, skills and workload.\n\n\
                  Each task goes to the highest-scoring employee with spare capacity.\n\
                  Parsed CV data can add bonus points for skills not yet on file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./taskdist.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a sample config and workforce file in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Assign open tasks to employees
    Distribute {
        /// Which tasks to consider: pending, in-progress, or empty for all unassigned
        #[arg(short, long, default_value = "")]
        status: String,

        /// Add bonus points for skills found in parsed CVs
        #[arg(long)]
        cv: bool,

        /// Compute and show assignments without saving them
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview which tasks fit the skills found in parsed CVs (never saves)
    Analyze {
        /// Which tasks to consider: pending, in-progress, or empty for all unassigned
        #[arg(short, long, default_value = "")]
        status: String,

        /// Only use this employee's CV
        #[arg(short, long)]
        employee: Option<String>,
    },

    /// Serve the auto-distribute HTTP endpoint
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Distribute {
            status,
            cv,
            dry_run,
        }) => {
            let workspace = Workspace::open(cli.config.as_deref())?;
            commands::distribute(&workspace, &status, cv, dry_run, output_mode)
        },
        Some(Command::Analyze { status, employee }) => {
            let workspace = Workspace::open(cli.config.as_deref())?;
            commands::analyze(&workspace, &status, employee.as_deref(), output_mode)
        },
        #[cfg(feature = "server")]
        Some(Command::Serve { port, bind }) => {
            let workspace = Workspace::open(cli.config.as_deref())?;
            commands::serve(&workspace, bind.as_deref(), port)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taskdist v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskdist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'taskdist --help' for usage");
                println!("Run 'taskdist init' to get started");
            }
            Ok(())
        },
    }
}
