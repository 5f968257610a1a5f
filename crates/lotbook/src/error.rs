//! Errors surfaced by the auction operations.

use {model::Phase, thiserror::Error};

/// Failure of a single operation.
///
/// All variants are fatal to the requesting call only: the call aborts with
/// no partial mutation and no retry machinery. Callers correct the input
/// and resubmit.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// Mismatched or empty input lengths, or a lookup of data that was
    /// never recorded.
    #[error("invalid input: {0}")]
    Validation(&'static str),
    /// The lot is not in the phase the operation requires.
    #[error("lot is {actual:?} but the operation requires {required:?}")]
    Phase { required: Phase, actual: Phase },
    /// Overflow detected while scoring a bid or advancing the bid counter.
    #[error("arithmetic overflow")]
    Arithmetic,
}
