use clap::Args;
use pem::{Label, Pem};
use pubseal::decoder::Decoder;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM file. If not specified, reads from stdin
    pub(crate) file: Option<String>,

    /// Output format (json, yaml, text)
    #[arg(short, long, default_value = "text")]
    pub(crate) output: OutputFormat,

    /// Print the key re-armored with 64-column lines instead of a summary
    #[arg(long)]
    pub(crate) pem: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let contents = read_text(config.file.as_deref())?;

    // Reject certificates and private keys with a clear message up front.
    let block = Pem::from_str(&contents)?;
    if block.label() != Label::PublicKey {
        return Err(Error::UnexpectedLabel(block.label()));
    }

    if config.pem {
        println!("{}", block);
        return Ok(());
    }

    let der: Vec<u8> = block.decode()?;
    let summary = oaep::inspect_der(&der)?;
    match config.output {
        OutputFormat::Text => {
            println!("Algorithm: {}", summary.algorithm);
            println!(
                "Modulus: {} bit ({} bytes)",
                summary.modulus_bits, summary.modulus_len
            );
            println!("Max plaintext: {} bytes", summary.max_plaintext_len);
            println!("Fingerprint (SHA-256): {}", summary.fingerprint);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&summary)?);
        }
    }

    Ok(())
}
