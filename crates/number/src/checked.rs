//! Overflow-checked folds over U256 amounts.

use alloy::primitives::U256;

/// Sums `amounts` with overflow-checked addition.
///
/// Returns `None` as soon as any partial sum overflows, leaving the caller
/// to fail the enclosing operation as a whole.
pub fn checked_sum(amounts: impl IntoIterator<Item = U256>) -> Option<U256> {
    amounts
        .into_iter()
        .try_fold(U256::ZERO, |total, amount| total.checked_add(amount))
}
