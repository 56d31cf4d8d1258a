use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "values-lint")]
#[command(version = crate::VERSION)]
#[command(about = "Validate Helm values files against deployment best practices")]
#[command(long_about = "Checks every *.yml file in a Helm values directory for service type, memory requests/limits, ingress TLS secret and production replica count problems. Stops at the first fatal finding.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate every *.yml values file in a directory (default command)
    Check {
        /// Directory containing the values files [default: helm/values]
        #[arg(value_name = "DIR")]
        path: Option<PathBuf>,
    },

    /// List the built-in rules
    Rules {
        /// Show a single rule by code (e.g. VL002)
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },
}

impl Cli {
    /// Command to run, `check` when none was given
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check { path: None })
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
