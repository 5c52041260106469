use clap::Args;
use tracing::debug;

use crate::error::Result;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM public key (-----BEGIN PUBLIC KEY-----)
    #[arg(short, long)]
    key: String,

    /// Text to encrypt. If not specified, reads from stdin as-is
    text: Option<String>,
}

pub(crate) async fn execute(config: Config) -> Result<()> {
    let public_key = read_text(Some(config.key.as_str()))?;
    let plaintext = match config.text {
        Some(text) => text,
        None => read_text(None)?,
    };
    debug!(key = %config.key, "encrypting text");

    let armored = oaep::encode_text(&public_key, &plaintext).await?;
    if armored.ends_with('\n') {
        print!("{armored}");
    } else {
        println!("{armored}");
    }

    Ok(())
}
