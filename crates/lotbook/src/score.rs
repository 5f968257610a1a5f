//! Bid scoring.

use {alloy::primitives::U256, number::checked_sum};

/// A single value suitable for comparing and ranking bids.
///
/// The score of a bid is the sum of its per-asset amounts: every asset unit
/// counts equally, with no per-asset weighting. Summation is deterministic
/// and order-independent.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Score(pub U256);

impl Score {
    /// Scores the given amounts with checked addition. `None` if the sum
    /// overflows.
    pub fn of_amounts(amounts: &[U256]) -> Option<Self> {
        checked_sum(amounts.iter().copied()).map(Self)
    }
}

impl From<Score> for U256 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl From<U256> for Score {
    fn from(value: U256) -> Self {
        Self(value)
    }
}
