//! Single-block transforms.
//!
//! The 16-byte block is treated as a 4×4 matrix in column-major order: the
//! byte at row `r`, column `c` sits at offset `4·c + r`.
//!
//! ```text
//! s[0]  s[4]  s[8]   s[12]
//! s[1]  s[5]  s[9]   s[13]
//! s[2]  s[6]  s[10]  s[14]
//! s[3]  s[7]  s[11]  s[15]
//! ```
//!
//! All round primitives mutate the block in place; there is no separate
//! state copy. The forward cipher applies the initial AddRoundKey, `Nr - 1`
//! full rounds of SubBytes/ShiftRows/MixColumns/AddRoundKey, and a final
//! round without MixColumns. The inverse cipher mirrors it with the inverse
//! primitives, walking the round keys backwards.

use super::schedule::{KeySchedule, Variant};
use super::tables::{mul, INV_S_BOX, S_BOX};
use super::trace::{NoTrace, RoundObserver, Stage};
use super::{validate_key, AES_BLOCK_SIZE};
use crate::error::Result;

/// Replace each state byte with its S-box entry.
fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for b in state.iter_mut() {
        *b = S_BOX[*b as usize];
    }
}

/// Replace each state byte with its inverse S-box entry.
fn inv_sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for b in state.iter_mut() {
        *b = INV_S_BOX[*b as usize];
    }
}

/// Rotate row `r` of the state left by `r` positions.
fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    // Row 1: left by 1.
    let t = state[1];
    state[1] = state[5];
    state[5] = state[9];
    state[9] = state[13];
    state[13] = t;

    // Row 2: left by 2, two swaps.
    state.swap(2, 10);
    state.swap(6, 14);

    // Row 3: left by 3.
    let t = state[3];
    state[3] = state[15];
    state[15] = state[11];
    state[11] = state[7];
    state[7] = t;
}

/// Rotate row `r` of the state right by `r` positions.
fn inv_shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    // Row 1: right by 1.
    let t = state[13];
    state[13] = state[9];
    state[9] = state[5];
    state[5] = state[1];
    state[1] = t;

    // Row 2: right by 2, two swaps.
    state.swap(2, 10);
    state.swap(6, 14);

    // Row 3: right by 3.
    let t = state[3];
    state[3] = state[7];
    state[7] = state[11];
    state[11] = state[15];
    state[15] = t;
}

/// Multiply each state column by the MDS matrix [[2,3,1,1],[1,2,3,1],
/// [1,1,2,3],[3,1,1,2]] in GF(2⁸).
///
/// Uses the xor-chain formulation: with `tmp` the XOR of the whole column,
/// each output byte is the input XOR `tmp` XOR 2·(pairwise XOR), which
/// expands to exactly the matrix product.
fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for i in 0..4 {
        let col = &mut state[4 * i..4 * (i + 1)];
        let a0 = col[0];
        let tmp = col[0] ^ col[1] ^ col[2] ^ col[3];

        let mut tm = col[0] ^ col[1];
        tm = mul(tm, 0x02);
        col[0] ^= tm ^ tmp;

        tm = col[1] ^ col[2];
        tm = mul(tm, 0x02);
        col[1] ^= tm ^ tmp;

        tm = col[2] ^ col[3];
        tm = mul(tm, 0x02);
        col[2] ^= tm ^ tmp;

        tm = col[3] ^ a0;
        tm = mul(tm, 0x02);
        col[3] ^= tm ^ tmp;
    }
}

/// Multiply each state column by the inverse MDS matrix
/// [[0x0E,0x0B,0x0D,0x09],[0x09,0x0E,0x0B,0x0D],[0x0D,0x09,0x0E,0x0B],
/// [0x0B,0x0D,0x09,0x0E]] in GF(2⁸).
fn inv_mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for i in 0..4 {
        let col = &mut state[4 * i..4 * (i + 1)];
        let (a, b, c, d) = (col[0], col[1], col[2], col[3]);

        col[0] = mul(a, 0x0e) ^ mul(b, 0x0b) ^ mul(c, 0x0d) ^ mul(d, 0x09);
        col[1] = mul(a, 0x09) ^ mul(b, 0x0e) ^ mul(c, 0x0b) ^ mul(d, 0x0d);
        col[2] = mul(a, 0x0d) ^ mul(b, 0x09) ^ mul(c, 0x0e) ^ mul(d, 0x0b);
        col[3] = mul(a, 0x0b) ^ mul(b, 0x0d) ^ mul(c, 0x09) ^ mul(d, 0x0e);
    }
}

/// XOR the state with the round key for `round`.
fn add_round_key(state: &mut [u8; AES_BLOCK_SIZE], schedule: &KeySchedule, round: usize) {
    for (s, k) in state.iter_mut().zip(schedule.round_key(round)) {
        *s ^= *k;
    }
}

/// Forward cipher on one block with an already-expanded schedule.
pub(crate) fn cipher_block<O: RoundObserver>(
    state: &mut [u8; AES_BLOCK_SIZE],
    schedule: &KeySchedule,
    observer: &mut O,
) {
    let rounds = schedule.rounds();

    add_round_key(state, schedule, 0);
    observer.record(0, Stage::AddRoundKey, state);

    for round in 1..rounds {
        sub_bytes(state);
        observer.record(round, Stage::SubBytes, state);
        shift_rows(state);
        observer.record(round, Stage::ShiftRows, state);
        mix_columns(state);
        observer.record(round, Stage::MixColumns, state);
        add_round_key(state, schedule, round);
        observer.record(round, Stage::AddRoundKey, state);
    }

    // Final round has no MixColumns.
    sub_bytes(state);
    observer.record(rounds, Stage::SubBytes, state);
    shift_rows(state);
    observer.record(rounds, Stage::ShiftRows, state);
    add_round_key(state, schedule, rounds);
    observer.record(rounds, Stage::AddRoundKey, state);
}

/// Inverse cipher on one block with an already-expanded schedule.
pub(crate) fn inv_cipher_block<O: RoundObserver>(
    state: &mut [u8; AES_BLOCK_SIZE],
    schedule: &KeySchedule,
    observer: &mut O,
) {
    let rounds = schedule.rounds();

    add_round_key(state, schedule, rounds);
    observer.record(rounds, Stage::AddRoundKey, state);

    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        observer.record(round, Stage::InvShiftRows, state);
        inv_sub_bytes(state);
        observer.record(round, Stage::InvSubBytes, state);
        add_round_key(state, schedule, round);
        observer.record(round, Stage::AddRoundKey, state);
        inv_mix_columns(state);
        observer.record(round, Stage::InvMixColumns, state);
    }

    // Final round has no InvMixColumns.
    inv_shift_rows(state);
    observer.record(0, Stage::InvShiftRows, state);
    inv_sub_bytes(state);
    observer.record(0, Stage::InvSubBytes, state);
    add_round_key(state, schedule, 0);
    observer.record(0, Stage::AddRoundKey, state);
}

/// Encrypt a single 16-byte block in place.
///
/// The key length must match `variant`; callers holding fewer than 16
/// bytes of plaintext pad the block themselves before the call.
pub fn encrypt_block(block: &mut [u8; AES_BLOCK_SIZE], key: &[u8], variant: Variant) -> Result<()> {
    encrypt_block_traced(block, key, variant, &mut NoTrace)
}

/// Decrypt a single 16-byte block in place.
pub fn decrypt_block(block: &mut [u8; AES_BLOCK_SIZE], key: &[u8], variant: Variant) -> Result<()> {
    decrypt_block_traced(block, key, variant, &mut NoTrace)
}

/// [`encrypt_block`] with a round-stage observer.
pub fn encrypt_block_traced<O: RoundObserver>(
    block: &mut [u8; AES_BLOCK_SIZE],
    key: &[u8],
    variant: Variant,
    observer: &mut O,
) -> Result<()> {
    validate_key(key, variant)?;
    let schedule = KeySchedule::expand(key, variant);
    cipher_block(block, &schedule, observer);
    Ok(())
}

/// [`decrypt_block`] with a round-stage observer.
pub fn decrypt_block_traced<O: RoundObserver>(
    block: &mut [u8; AES_BLOCK_SIZE],
    key: &[u8],
    variant: Variant,
    observer: &mut O,
) -> Result<()> {
    validate_key(key, variant)?;
    let schedule = KeySchedule::expand(key, variant);
    inv_cipher_block(block, &schedule, observer);
    Ok(())
}
