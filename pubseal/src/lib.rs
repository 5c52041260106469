//! # pubseal
//!
//! Core conversion traits for the pubseal public-key encryption toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every step of
//! the encryption pipeline goes through:
//!
//! ```text
//! &str → Pem → Vec<u8> (SPKI DER) → imported key → Ciphertext → String
//! ```
//!
//! Each inbound step uses `Decoder` to convert from one type to the next,
//! and `Encoder` to turn raw results back into text.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only conversions somebody explicitly implemented can be called.
//!
//! ## Example
//!
//! ```ignore
//! use pubseal::decoder::Decoder;
//! use pubseal::encoder::Encoder;
//! use pem::Pem;
//!
//! let pem: Pem = "-----BEGIN PUBLIC KEY-----...".decode()?;
//! let der: Vec<u8> = pem.decode()?;
//!
//! let ciphertext = oaep::encrypt(input, "hello world")?;
//! let armored: String = ciphertext.encode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
