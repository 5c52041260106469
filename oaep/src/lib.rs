//! RSA-OAEP (SHA-256) encryption of text under PEM/SPKI public keys.
//!
//! The pipeline is:
//!
//! ```text
//! PEM text --decode_spki_pem--> SPKI DER --Provider--> key --encrypt--> Ciphertext --wrap_base64--> String
//! ```
//!
//! [`encode_text`] runs the whole thing on the tokio blocking pool and
//! resolves to base64 wrapped at 64 columns. Every failure comes back as an
//! [`Error`]; nothing is swallowed or logged in place of being returned.
//!
//! ```ignore
//! let armored = oaep::encode_text(public_key_pem, "hello world").await?;
//! ```

#![forbid(unsafe_code)]

mod encryptor;
pub mod error;
pub mod provider;
mod summary;

use tokio_util::sync::CancellationToken;

pub use encryptor::{Ciphertext, Encryptor};
pub use error::{Error, KeyImportError, Result};
pub use provider::{MAX_MODULUS_BITS, OaepPublicKey, Provider, RsaOaepKey, RustCryptoProvider};
pub use summary::{ALGORITHM, KeySummary};

/// SHA-256 output length in bytes.
pub const HASH_LEN: usize = 32;

/// Smallest modulus, in bytes, that fits an empty OAEP message.
pub const MIN_MODULUS_LEN: usize = 2 * HASH_LEN + 2;

/// Longest plaintext, in bytes, RSA-OAEP/SHA-256 accepts for a modulus of
/// `modulus_len` bytes: `k - 2 * hLen - 2`.
///
/// ```
/// assert_eq!(190, oaep::max_plaintext_len(256));
/// assert_eq!(0, oaep::max_plaintext_len(16));
/// ```
pub const fn max_plaintext_len(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(MIN_MODULUS_LEN)
}

/// Encrypt `plaintext` under `pem` with the default provider.
///
/// # Errors
///
/// See [`Encryptor::encrypt`].
pub fn encrypt(pem: &str, plaintext: &str) -> Result<Ciphertext> {
    Encryptor::<RustCryptoProvider>::default().encrypt(pem, plaintext)
}

/// Encrypt `plaintext` under `pem` and return wrapped base64.
///
/// # Errors
///
/// See [`Encryptor::encrypt`]. [`Error::Task`] if the blocking task fails.
pub async fn encode_text(pem: &str, plaintext: &str) -> Result<String> {
    Encryptor::<RustCryptoProvider>::default()
        .encode_text(pem, plaintext)
        .await
}

/// [`encode_text`] that stops with [`Error::Cancelled`] when `cancel` fires.
///
/// # Errors
///
/// See [`Encryptor::encode_text_with_cancel`].
pub async fn encode_text_with_cancel(
    pem: &str,
    plaintext: &str,
    cancel: &CancellationToken,
) -> Result<String> {
    Encryptor::<RustCryptoProvider>::default()
        .encode_text_with_cancel(pem, plaintext, cancel)
        .await
}

/// Summarize the key in `pem` with the default provider.
///
/// # Errors
///
/// See [`Encryptor::inspect`].
pub fn inspect(pem: &str) -> Result<KeySummary> {
    Encryptor::<RustCryptoProvider>::default().inspect(pem)
}

/// Summarize a key given as SPKI DER with the default provider.
///
/// # Errors
///
/// See [`Encryptor::inspect_der`].
pub fn inspect_der(der: &[u8]) -> Result<KeySummary> {
    Encryptor::<RustCryptoProvider>::default().inspect_der(der)
}
