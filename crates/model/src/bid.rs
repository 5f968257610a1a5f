//! Module defining sealed-style bids.

use {
    crate::u256_decimal::DecimalU256,
    alloy::primitives::{Address, B256, U256},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// Index of a bid within its lot. Indices are dense and assigned in strict
/// submission order.
pub type BidIndex = u64;

/// The first index ever assigned to a bid. Index 0 is reserved and remains
/// permanently empty.
pub const FIRST_BID_INDEX: BidIndex = 1;

/// A participant's bid on a lot: one amount per part of the lot, in the
/// same order, plus an opaque commitment hash.
///
/// The commitment hash is never verified against a later reveal by this
/// core. It is stored verbatim and exposed through the query interface.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// The bidder.
    pub sender: Address,
    /// Per-asset amounts, positionally aligned with the lot's parts.
    #[serde_as(as = "Vec<DecimalU256>")]
    pub amounts: Vec<U256>,
    /// Sealed-bid commitment supplied by the bidder.
    pub commitment: B256,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn roundtrips_bid() {
        let bid = Bid {
            sender: Address::repeat_byte(0x42),
            amounts: vec![U256::from(1), U256::from(2)],
            commitment: B256::repeat_byte(0x07),
        };

        let serialized = serde_json::to_value(&bid).unwrap();
        assert_eq!(serialized["amounts"], json!(["1", "2"]));
        assert_eq!(serde_json::from_value::<Bid>(serialized).unwrap(), bid);
    }
}
