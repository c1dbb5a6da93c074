//! AES in CBC mode, in place.
//!
//! CBC chains the blocks of the buffer: each plaintext block is XORed with
//! the previous ciphertext block (the IV for the first) before encryption,
//! so identical plaintext blocks encrypt differently and a change to block
//! `i` perturbs every ciphertext block from `i` on.
//!
//! Decryption walks the buffer backwards. Working in place, a forward walk
//! would overwrite the ciphertext of block `i - 1` before block `i` needs
//! it for the XOR; running from the last block down leaves every previous
//! ciphertext intact until it has been consumed.
//!
//! The IV adds no secrecy, but it must be unpredictable per message for
//! CBC's guarantees to hold; generating it is the caller's concern.

use super::block::{cipher_block, inv_cipher_block};
use super::schedule::{KeySchedule, Variant};
use super::trace::NoTrace;
use super::{as_block, validate_buffer, validate_key, AES_BLOCK_SIZE};
use crate::error::Result;

/// Encrypt `buf` in place with IV chaining.
///
/// `buf` must be non-empty, a multiple of 16 bytes, and at most
/// [`MAX_BUFFER_SIZE`](super::MAX_BUFFER_SIZE) bytes; `key` must match
/// `variant`. On error the buffer is untouched.
pub fn cbc_encrypt(
    buf: &mut [u8],
    key: &[u8],
    iv: &[u8; AES_BLOCK_SIZE],
    variant: Variant,
) -> Result<()> {
    validate_key(key, variant)?;
    validate_buffer(buf)?;

    let schedule = KeySchedule::expand(key, variant);
    let mut chain = *iv;
    for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        let block = as_block(chunk);
        for (b, p) in block.iter_mut().zip(chain.iter()) {
            *b ^= *p;
        }
        cipher_block(block, &schedule, &mut NoTrace);
        chain.copy_from_slice(block);
    }
    Ok(())
}

/// Decrypt `buf` in place with IV chaining.
///
/// Same contract as [`cbc_encrypt`]. Blocks are processed last-to-first so
/// that each block's XOR still sees the original ciphertext of its
/// predecessor.
pub fn cbc_decrypt(
    buf: &mut [u8],
    key: &[u8],
    iv: &[u8; AES_BLOCK_SIZE],
    variant: Variant,
) -> Result<()> {
    validate_key(key, variant)?;
    validate_buffer(buf)?;

    let schedule = KeySchedule::expand(key, variant);
    let blocks = buf.len() / AES_BLOCK_SIZE;

    for idx in (1..blocks).rev() {
        let (head, tail) = buf.split_at_mut(idx * AES_BLOCK_SIZE);
        let block = as_block(&mut tail[..AES_BLOCK_SIZE]);
        let prev = &head[(idx - 1) * AES_BLOCK_SIZE..];

        inv_cipher_block(block, &schedule, &mut NoTrace);
        for (b, p) in block.iter_mut().zip(prev.iter()) {
            *b ^= *p;
        }
    }

    let first = as_block(&mut buf[..AES_BLOCK_SIZE]);
    inv_cipher_block(first, &schedule, &mut NoTrace);
    for (b, p) in first.iter_mut().zip(iv.iter()) {
        *b ^= *p;
    }
    Ok(())
}
