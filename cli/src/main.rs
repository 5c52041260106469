use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod encrypt;
mod error;
mod key;
mod logging;
mod output;
mod utils;

use error::Result;

use key::KeyCommands;

#[derive(Parser)]
#[command(name = "pubseal")]
#[command(about = "Encrypt text for the holder of an RSA public key", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with RSA-OAEP (SHA-256) and print wrapped base64
    Encrypt {
        #[command(flatten)]
        config: encrypt::Config,
    },
    /// Public key operations
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encrypt { config } => {
            encrypt::execute(config).await?;
        }
        Commands::Key { command } => match command {
            KeyCommands::Inspect { config } => {
                key::inspect::execute(config)?;
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
