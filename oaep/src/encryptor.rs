use std::convert::Infallible;

use pem::{decode_spki_pem, wrap_base64};
use pubseal::encoder::{EncodableTo, Encoder};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, KeyImportError, Result};
use crate::provider::{OaepPublicKey, Provider, RustCryptoProvider};
use crate::summary::KeySummary;
use crate::{MIN_MODULUS_LEN, max_plaintext_len};

/// Raw RSA-OAEP ciphertext, exactly one modulus long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl EncodableTo<Ciphertext> for String {}

impl Encoder<Ciphertext, String> for Ciphertext {
    type Error = Infallible;

    fn encode(&self) -> std::result::Result<String, Self::Error> {
        Ok(wrap_base64(&self.0))
    }
}

/// Encrypts text under PEM-armored RSA public keys.
///
/// The key is imported from the PEM string on every call and dropped when
/// the call returns; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Encryptor<P = RustCryptoProvider> {
    provider: P,
}

impl<P: Provider> Encryptor<P> {
    pub fn new(provider: P) -> Self {
        Encryptor { provider }
    }

    /// Decode the PEM armor and import the key through the provider.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPem`] for armor problems, [`Error::KeyImport`] when
    /// the provider rejects the DER or the modulus cannot hold any OAEP
    /// message.
    pub fn import(&self, pem: &str) -> Result<P::Key> {
        let der = decode_spki_pem(pem)?;
        self.import_der(&der)
    }

    fn import_der(&self, der: &[u8]) -> Result<P::Key> {
        debug!(der_len = der.len(), "importing SPKI public key");

        let key = self.provider.import_spki(der)?;
        if key.modulus_len() < MIN_MODULUS_LEN {
            return Err(KeyImportError::ModulusTooSmall {
                bits: key.modulus_bits(),
            }
            .into());
        }
        Ok(key)
    }

    /// Encrypt the UTF-8 bytes of `plaintext` with RSA-OAEP/SHA-256.
    ///
    /// Output is randomized: encrypting the same text twice gives
    /// different ciphertexts of the same length.
    ///
    /// # Errors
    ///
    /// Everything [`Encryptor::import`] returns, plus
    /// [`Error::PlaintextTooLarge`] when the text is longer than
    /// [`max_plaintext_len`] allows for the key.
    pub fn encrypt(&self, pem: &str, plaintext: &str) -> Result<Ciphertext> {
        let key = self.import(pem)?;
        let message = plaintext.as_bytes();

        let max = max_plaintext_len(key.modulus_len());
        if message.len() > max {
            return Err(Error::PlaintextTooLarge {
                length: message.len(),
                max,
            });
        }

        debug!(
            modulus_bits = key.modulus_bits(),
            plaintext_len = message.len(),
            "encrypting with RSA-OAEP/SHA-256"
        );
        let ciphertext = key.encrypt(message)?;
        Ok(Ciphertext(ciphertext))
    }

    /// Import the key and describe it without encrypting anything.
    ///
    /// # Errors
    ///
    /// Same as [`Encryptor::import`].
    pub fn inspect(&self, pem: &str) -> Result<KeySummary> {
        let der = decode_spki_pem(pem)?;
        self.inspect_der(&der)
    }

    /// [`Encryptor::inspect`] for SPKI DER that has already been unarmored.
    ///
    /// # Errors
    ///
    /// [`Error::KeyImport`] when the provider rejects the bytes.
    pub fn inspect_der(&self, der: &[u8]) -> Result<KeySummary> {
        let key = self.import_der(der)?;
        Ok(KeySummary::new(&key, der))
    }

    /// Encrypt on the blocking pool and return the wrapped base64 text.
    pub async fn encode_text(&self, pem: &str, plaintext: &str) -> Result<String> {
        self.encode_text_with_cancel(pem, plaintext, &CancellationToken::new())
            .await
    }

    /// Like [`Encryptor::encode_text`], but gives up with
    /// [`Error::Cancelled`] once `cancel` fires.
    ///
    /// A cancelled call never yields ciphertext, even if the blocking task
    /// finishes afterwards.
    pub async fn encode_text_with_cancel(
        &self,
        pem: &str,
        plaintext: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let encryptor = self.clone();
        let pem = pem.to_owned();
        let plaintext = plaintext.to_owned();
        let mut task = tokio::task::spawn_blocking(move || encryptor.encrypt(&pem, &plaintext));

        let ciphertext = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                task.abort();
                debug!("encryption cancelled");
                return Err(Error::Cancelled);
            }
            joined = &mut task => joined.map_err(|e| Error::Task(e.to_string()))??,
        };

        let Ok(armored) = ciphertext.encode();
        Ok(armored)
    }
}
