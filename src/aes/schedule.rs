//! Cipher variants and the key-expansion schedule.
//!
//! [`Variant`] selects one of the three standard key sizes and carries the
//! derived parameters (Nk words of key, Nr rounds). [`KeySchedule`] runs the
//! FIPS 197 section 5.2 expansion once per cipher call and hands out the
//! per-round 16-byte keys.
//!
//! The expanded keys live in a single flat byte buffer rather than the
//! `(Nr+1)×4×4` array of the standard's presentation; round `r` occupies
//! bytes `16·r..16·(r+1)`, which lines up directly with the column-major
//! state for AddRoundKey. The buffer is sized for AES-256 (15 round keys)
//! and wiped on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::tables::{RCON, S_BOX};
use super::AES_BLOCK_SIZE;
use crate::error::{Error, Result};

/// Number of 32-bit columns in the AES state, fixed by the standard.
const NB: usize = 4;

/// Size of the largest expanded key: AES-256 needs 4·(14+1) words.
const MAX_SCHEDULE_BYTES: usize = 240;

/// The three standard AES key sizes.
///
/// The discriminants match the numeric wire tag (0, 1, 2) used by callers
/// that select the variant from serialized configuration; [`TryFrom<u8>`]
/// performs the checked conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 128-bit key, 10 rounds.
    Aes128 = 0,
    /// 192-bit key, 12 rounds.
    Aes192 = 1,
    /// 256-bit key, 14 rounds.
    Aes256 = 2,
}

impl Variant {
    /// Key length in bytes for this variant.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Nk: number of 32-bit words in the key.
    pub(crate) const fn nk(self) -> usize {
        match self {
            Variant::Aes128 => 4,
            Variant::Aes192 => 6,
            Variant::Aes256 => 8,
        }
    }

    /// Nr: number of cipher rounds.
    pub(crate) const fn rounds(self) -> usize {
        match self {
            Variant::Aes128 => 10,
            Variant::Aes192 => 12,
            Variant::Aes256 => 14,
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = Error;

    /// Convert a numeric variant tag. Tags at or above the variant count
    /// are rejected.
    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Variant::Aes128),
            1 => Ok(Variant::Aes192),
            2 => Ok(Variant::Aes256),
            _ => Err(Error::InvalidArgument("unknown AES variant tag")),
        }
    }
}

/// The expanded round-key schedule for one cipher call.
///
/// Built once per entry point, borrowed by every block operation of the
/// call, and zeroed when dropped so expanded key material does not linger
/// on the stack.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeySchedule {
    bytes: [u8; MAX_SCHEDULE_BYTES],
    rounds: usize,
}

impl KeySchedule {
    /// Run the key expansion for `key`, which the caller has already
    /// validated against `variant`.
    ///
    /// Words `0..Nk` are the key itself; each further word is the previous
    /// word, passed through RotWord/SubWord/Rcon at Nk boundaries (plus the
    /// extra SubWord at the half-way point for AES-256), XORed with the
    /// word Nk positions back.
    pub(crate) fn expand(key: &[u8], variant: Variant) -> Self {
        let nk = variant.nk();
        let rounds = variant.rounds();

        let mut bytes = [0u8; MAX_SCHEDULE_BYTES];
        bytes[..key.len()].copy_from_slice(key);

        let mut temp = [0u8; 4];
        for i in nk..NB * (rounds + 1) {
            temp.copy_from_slice(&bytes[(i - 1) * 4..i * 4]);

            if i % nk == 0 {
                temp.rotate_left(1);
                for b in temp.iter_mut() {
                    *b = S_BOX[*b as usize];
                }
                temp[0] ^= RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                for b in temp.iter_mut() {
                    *b = S_BOX[*b as usize];
                }
            }

            for j in 0..4 {
                bytes[i * 4 + j] = bytes[(i - nk) * 4 + j] ^ temp[j];
            }
        }
        temp.zeroize();

        KeySchedule { bytes, rounds }
    }

    /// Number of cipher rounds this schedule was built for.
    pub(crate) fn rounds(&self) -> usize {
        self.rounds
    }

    /// The 16-byte round key for `round`, in `0..=rounds()`.
    pub(crate) fn round_key(&self, round: usize) -> &[u8] {
        &self.bytes[round * AES_BLOCK_SIZE..(round + 1) * AES_BLOCK_SIZE]
    }
}
