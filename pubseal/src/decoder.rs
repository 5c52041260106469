//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait turns a source type `T` into a destination type `D`.
//! pubseal uses it for every inbound step of the pipeline: PEM text into a
//! `Pem` block, a block into SPKI DER bytes.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - implemented on the source, performs the conversion
//! 2. `DecodableFrom<T>` - implemented on the destination, opts it in
//!
//! A conversion exists only when both halves are written down, so asking
//! for an unsupported target is a compile error instead of a runtime one.
//!
//! # Example
//!
//! ```ignore
//! use pubseal::decoder::Decoder;
//! use pem::Pem;
//!
//! let input = "-----BEGIN PUBLIC KEY-----\nMIIB...\n-----END PUBLIC KEY-----";
//! let pem: Pem = input.decode()?;
//! let der: Vec<u8> = pem.decode()?;
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// # Examples
///
/// ```no_run
/// use pubseal::decoder::{DecodableFrom, Decoder};
///
/// struct Hex(String);
///
/// #[derive(Debug)]
/// struct OddLength;
///
/// impl DecodableFrom<Hex> for Vec<u8> {}
///
/// impl Decoder<Hex, Vec<u8>> for Hex {
///     type Error = OddLength;
///
///     fn decode(&self) -> Result<Vec<u8>, Self::Error> {
///         if self.0.len() % 2 != 0 {
///             return Err(OddLength);
///         }
///         Ok(self.0.as_bytes().to_vec())
///     }
/// }
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods. Implement it on destination types:
///
/// ```no_run
/// use pubseal::decoder::DecodableFrom;
///
/// struct Armored;
/// struct Raw;
///
/// impl DecodableFrom<Armored> for Raw {}
/// ```
pub trait DecodableFrom<T> {}
