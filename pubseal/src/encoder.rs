//! Encoder trait for type-safe conversions.
//!
//! Mirror image of [`crate::decoder`]: the source type implements
//! `Encoder<T, E>` and the destination type opts in with `EncodableTo<T>`.

/// Encoder trait for converting from type `T` to type `E`.
///
/// # Examples
///
/// ```no_run
/// use pubseal::encoder::{EncodableTo, Encoder};
///
/// struct Raw(Vec<u8>);
///
/// impl EncodableTo<Raw> for String {}
///
/// impl Encoder<Raw, String> for Raw {
///     type Error = std::convert::Infallible;
///
///     fn encode(&self) -> Result<String, Self::Error> {
///         Ok(self.0.iter().map(|b| format!("{b:02x}")).collect())
///     }
/// }
/// ```
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
