//! Library-wide error and result types.

use thiserror::Error;

/// Result alias used throughout pico-aes.
pub type Result<T> = core::result::Result<T, Error>;

/// All errors the library can produce.
///
/// The cipher itself cannot fail on valid inputs and performs no I/O, so
/// the only failure class is an input rejected before any processing. The
/// carried message names the violated precondition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input failed validation. The caller's buffer has not been
    /// modified when this is returned.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
