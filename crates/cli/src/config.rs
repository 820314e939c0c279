//! Command-line configuration and logging setup.

use clap::Parser;
use tracing::Level;

use crate::commands::Command;

/// Inspect and compare network flow keys.
#[derive(Debug, Parser)]
#[command(name = "flowkey", version, about)]
pub struct CliConfig {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install the subscriber, run the command and print its output.
    pub fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        let result = self.command.execute()?;
        for line in result.lines {
            println!("{line}");
        }
        Ok(())
    }
}
