//! AES in ECB mode, in place.
//!
//! ECB encrypts every 16-byte block of the buffer independently with the
//! same schedule. Identical plaintext blocks therefore produce identical
//! ciphertext blocks, which leaks the structure of the data.
//!
//! # Security
//!
//! ECB is retained for compatibility with peers that require it and for
//! known-answer testing. It should not be used to protect structured or
//! repetitive data; prefer [`cbc_encrypt`](super::cbc_encrypt) with a
//! fresh IV.

use super::block::{cipher_block, inv_cipher_block};
use super::schedule::{KeySchedule, Variant};
use super::trace::NoTrace;
use super::{as_block, validate_buffer, validate_key, AES_BLOCK_SIZE};
use crate::error::Result;

/// Encrypt `buf` in place, block-wise.
///
/// `buf` must be non-empty, a multiple of 16 bytes, and at most
/// [`MAX_BUFFER_SIZE`](super::MAX_BUFFER_SIZE) bytes; `key` must match
/// `variant`. On error the buffer is untouched.
pub fn ecb_encrypt(buf: &mut [u8], key: &[u8], variant: Variant) -> Result<()> {
    validate_key(key, variant)?;
    validate_buffer(buf)?;

    let schedule = KeySchedule::expand(key, variant);
    for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        cipher_block(as_block(chunk), &schedule, &mut NoTrace);
    }
    Ok(())
}

/// Decrypt `buf` in place, block-wise.
///
/// Same contract as [`ecb_encrypt`].
pub fn ecb_decrypt(buf: &mut [u8], key: &[u8], variant: Variant) -> Result<()> {
    validate_key(key, variant)?;
    validate_buffer(buf)?;

    let schedule = KeySchedule::expand(key, variant);
    for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        inv_cipher_block(as_block(chunk), &schedule, &mut NoTrace);
    }
    Ok(())
}
