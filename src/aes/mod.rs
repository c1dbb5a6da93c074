//! AES (FIPS 197) in ECB and CBC modes, operating in place.
//!
//! The module is layered bottom-up: `tables` holds the S-boxes, round
//! constants, and GF(2⁸) arithmetic; `block` the per-round primitives and
//! the single-block ciphers; `schedule` the variant parameters and key
//! expansion; `ecb` and `cbc` assemble the block cipher into complete
//! operations over multi-block buffers.

mod block;
mod cbc;
mod ecb;
mod schedule;
mod tables;
mod trace;

pub use block::*;
pub use cbc::*;
pub use ecb::*;
pub use schedule::*;
pub use trace::*;

use crate::error::{Error, Result};

/// AES block size in bytes, fixed by the standard.
pub const AES_BLOCK_SIZE: usize = 16;

/// Upper bound on the buffer length accepted by the multi-block entry
/// points. This is a surface limit sized for small embedded payloads, not a
/// property of the algorithm; raising it requires no other change.
pub const MAX_BUFFER_SIZE: usize = 64;

/// View a block-sized chunk of a validated buffer as a 16-byte array.
///
/// Callers only pass chunks produced by block-aligned walks, so the
/// conversion cannot fail.
pub(crate) fn as_block(chunk: &mut [u8]) -> &mut [u8; AES_BLOCK_SIZE] {
    chunk.try_into().expect("chunk is exactly one block")
}

/// Check that the key length matches the selected variant.
pub(crate) fn validate_key(key: &[u8], variant: Variant) -> Result<()> {
    if key.len() != variant.key_len() {
        return Err(Error::InvalidArgument(
            "key length does not match the selected AES variant",
        ));
    }
    Ok(())
}

/// Check the multi-block buffer contract: non-empty, block-aligned, and at
/// most [`MAX_BUFFER_SIZE`] bytes. Runs before any mutation.
pub(crate) fn validate_buffer(buf: &[u8]) -> Result<()> {
    if buf.is_empty() {
        return Err(Error::InvalidArgument("buffer is empty"));
    }
    if buf.len() > MAX_BUFFER_SIZE {
        return Err(Error::InvalidArgument("buffer exceeds MAX_BUFFER_SIZE"));
    }
    if buf.len() % AES_BLOCK_SIZE != 0 {
        return Err(Error::InvalidArgument(
            "buffer length is not a multiple of the AES block size",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
