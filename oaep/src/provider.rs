//! Cryptographic providers.
//!
//! The encryptor never talks to an RSA implementation directly. It asks a
//! [`Provider`] to import SPKI DER bytes and gets back an encrypt-only
//! handle implementing [`OaepPublicKey`]. [`RustCryptoProvider`] is the
//! default, backed by the `rsa` crate.

use rsa::pkcs1;
use rsa::pkcs8::spki::{self, SubjectPublicKeyInfoRef};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, RsaPublicKey};
use sha2::Sha256;

use crate::error::{Error, KeyImportError, Result};
use crate::max_plaintext_len;

/// An imported public key restricted to RSA-OAEP/SHA-256 encryption.
///
/// Handles expose no key material and cannot decrypt, sign or export.
pub trait OaepPublicKey {
    /// Modulus length in bytes; also the ciphertext length.
    fn modulus_len(&self) -> usize;

    /// Modulus length in bits.
    fn modulus_bits(&self) -> usize;

    /// Encrypt `plaintext` with OAEP padding, SHA-256 for both the digest
    /// and MGF1, and an empty label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaintextTooLarge`] when the message does not fit,
    /// or [`Error::Encryption`] on any other provider failure.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;
}

/// Source of [`OaepPublicKey`] handles.
///
/// Providers are cloned into blocking tasks by the async entry points, so
/// they are expected to be cheap, stateless values.
pub trait Provider: Clone + Send + Sync + 'static {
    type Key: OaepPublicKey;

    /// Import DER-encoded SubjectPublicKeyInfo bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyImportError`] when the bytes are not an RSA SPKI.
    fn import_spki(&self, der: &[u8]) -> std::result::Result<Self::Key, KeyImportError>;
}

/// Largest modulus, in bits, [`RustCryptoProvider`] imports.
pub const MAX_MODULUS_BITS: usize = 16384;

/// [`Provider`] backed by the RustCrypto `rsa` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

/// RSA public key imported by [`RustCryptoProvider`].
#[derive(Debug, Clone)]
pub struct RsaOaepKey {
    inner: RsaPublicKey,
}

impl Provider for RustCryptoProvider {
    type Key = RsaOaepKey;

    fn import_spki(&self, der: &[u8]) -> std::result::Result<RsaOaepKey, KeyImportError> {
        if der.is_empty() {
            return Err(KeyImportError::Empty);
        }
        let spki = SubjectPublicKeyInfoRef::try_from(der)?;
        if spki.algorithm.oid != pkcs1::ALGORITHM_OID {
            return Err(KeyImportError::UnsupportedAlgorithm(
                spki.algorithm.oid.to_string(),
            ));
        }

        let key_bytes = spki
            .subject_public_key
            .as_bytes()
            .ok_or(KeyImportError::InvalidKey)?;
        let key =
            pkcs1::RsaPublicKey::try_from(key_bytes).map_err(|_| KeyImportError::InvalidKey)?;
        let n = BigUint::from_bytes_be(key.modulus.as_bytes());
        let e = BigUint::from_bytes_be(key.public_exponent.as_bytes());
        let inner = RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
            .map_err(|_| KeyImportError::InvalidKey)?;
        Ok(RsaOaepKey { inner })
    }
}

impl OaepPublicKey for RsaOaepKey {
    fn modulus_len(&self) -> usize {
        self.inner.size()
    }

    fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut rng = rand::thread_rng();
        self.inner
            .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| match e {
                rsa::Error::MessageTooLong => Error::PlaintextTooLarge {
                    length: plaintext.len(),
                    max: max_plaintext_len(self.modulus_len()),
                },
                other => Error::Encryption(other.to_string()),
            })
    }
}

impl From<spki::Error> for KeyImportError {
    fn from(e: spki::Error) -> Self {
        match e {
            spki::Error::KeyMalformed => KeyImportError::InvalidKey,
            other => KeyImportError::Der(other.to_string()),
        }
    }
}
