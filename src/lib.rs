//! # pico-aes
//!
//! A compact, self-contained software implementation of the AES block cipher
//! (FIPS 197) in ECB and CBC modes, for AES-128, AES-192, and AES-256.
//!
//! The library is aimed at embedded and resource-constrained use: every
//! operation works in place on a caller-supplied buffer, nothing is
//! allocated on the hot path, and the expanded round keys live in a fixed
//! 240-byte stack buffer that is wiped when the call returns.
//!
//! # Features
//!
//! - Single-block encryption and decryption via [`aes::encrypt_block`] and
//!   [`aes::decrypt_block`].
//! - In-place ECB mode via [`aes::ecb_encrypt`] and [`aes::ecb_decrypt`]
//!   (retained for compatibility; see the module docs for why ECB should
//!   not protect anything that matters).
//! - In-place CBC mode via [`aes::cbc_encrypt`] and [`aes::cbc_decrypt`].
//! - An optional per-round-stage observer for diagnostics, with zero
//!   overhead when unused.
//!
//! All entry points validate their inputs before touching the buffer and
//! report violations as [`Error::InvalidArgument`]; on failure the caller's
//! data is untouched.
//!
//! # Example
//!
//! ```
//! use pico_aes::aes::{cbc_encrypt, cbc_decrypt, Variant};
//!
//! let key = b"Very secret key.";
//! let iv = *b"Random Init Vec.";
//! let mut buf = *b"Exactly thirty-two bytes of text";
//!
//! cbc_encrypt(&mut buf, key, &iv, Variant::Aes128).expect("encryption failed");
//! cbc_decrypt(&mut buf, key, &iv, Variant::Aes128).expect("decryption failed");
//!
//! assert_eq!(&buf, b"Exactly thirty-two bytes of text");
//! ```
//!
//! # Disclaimer
//!
//! This is a table-driven software implementation. The S-box lookups are
//! data-dependent and therefore not constant-time against cache-timing
//! attacks; on hostile hosts, prefer a bitsliced or hardware-backed cipher.
//! The library provides no integrity protection, no padding scheme, and no
//! IV generation; those are the caller's responsibility.

pub mod aes;
pub mod error;

pub use error::{Error, Result};
