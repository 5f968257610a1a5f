//! Module defining auction lots.

use {
    crate::{
        bid::{Bid, BidIndex},
        u256_decimal::DecimalU256,
    },
    alloy::primitives::{Address, B256, U256},
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    std::collections::BTreeMap,
};

/// Identifier of a lot, chosen by its creator.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct LotId(pub u64);

impl std::fmt::Display for LotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One position of a lot: an asset on sale and the share of it included in
/// the bundle.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub asset: Address,
    #[serde_as(as = "DecimalU256")]
    pub share: U256,
}

/// Incrementally maintained summary of the highest-scoring bid of a lot.
///
/// Always equal to the streaming maximum over the recorded bids: the
/// highest score wins and ties keep the earliest bid.
#[serde_as]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    /// Index of the leading bid.
    pub index: BidIndex,
    /// Score of the leading bid.
    #[serde_as(as = "DecimalU256")]
    pub score: U256,
    /// Commitment hash of the leading bid.
    pub commitment: B256,
}

/// A bundle of asset shares up for auction during a fixed bidding window.
///
/// The owner and parts are fixed at creation; only the bid storage and the
/// winner summary mutate afterwards, and nothing is ever deleted.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// The participant that created the lot.
    pub owner: Address,
    /// What is being auctioned. Never empty.
    pub parts: Vec<Part>,
    /// Close of the bidding window.
    pub expiration: DateTime<Utc>,
    /// Recorded bids by index. Index 0 is reserved and never assigned; real
    /// bids start at [`crate::bid::FIRST_BID_INDEX`].
    pub bids: BTreeMap<BidIndex, Bid>,
    /// The index the next bid will be assigned. Monotonically increasing.
    pub next_bid_index: BidIndex,
    /// Summary of the current leader. `None` until the first bid lands.
    pub winner: Option<Winner>,
}

impl Lot {
    /// The phase of the lot at the given instant.
    ///
    /// A lot id that was never created has no [`Lot`] at all, which is the
    /// [`Phase::Uninitialized`] case; an existing lot is either still open
    /// for bids or expired.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if self.expiration > now {
            Phase::Alive
        } else {
            Phase::Expired
        }
    }
}

/// Lifecycle phase of a lot, derived from its expiration and the clock on
/// every access. There is no explicit transition call: a lot becomes
/// [`Phase::Alive`] when it is created and [`Phase::Expired`] with the
/// passage of time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No lot was ever created under the queried id.
    Uninitialized,
    /// The bidding window is open.
    Alive,
    /// The bidding window has closed.
    Expired,
}
