//! Micro Monolith - Entry Point
//!
//! Composes the module graph from configuration, runs one facade operation
//! and prints its outcome as JSON.
//!
//! ## Commands
//!
//! | Command | Facade call |
//! |---------|-------------|
//! | `find-addresses` | `find_addresses` (empty criteria) |
//! | `user-stuff` | `do_user_stuff` (per-call sender) |
//! | `more-user-stuff [--to ADDR]` | `do_more_user_stuff` / `do_more_user_stuff_for` (bound sender) |
//! | `wiring` | validated construction order |

use clap::{Parser, Subcommand};
use mm::Operation;

/// Command line interface for Micro Monolith
#[derive(Parser, Debug)]
#[command(name = "micromonolith")]
#[command(about = "Micro Monolith - capability-wired modules behind one facade")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Facade operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up addresses with empty criteria
    FindAddresses,
    /// Send the user report through a per-call sender
    UserStuff,
    /// Send the user summary through the bound sender
    MoreUserStuff {
        /// Send a notice to this recipient instead
        #[arg(long)]
        to: Option<String>,
    },
    /// Print the validated construction order and bindings
    Wiring,
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::FindAddresses => Self::FindAddresses,
            Command::UserStuff => Self::UserStuff,
            Command::MoreUserStuff { to } => Self::MoreUserStuff { recipient: to },
            Command::Wiring => Self::Wiring,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let outcome = mm::run(cli.config.as_deref(), cli.command.into()).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
