pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// Show what a PEM public key allows for RSA-OAEP (SHA-256)
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}
