//! Append-only audit records emitted by state-mutating operations.
//!
//! Every successful `create_lot`/`create_bet` call appends exactly one
//! record; failed calls append nothing. The records are serializable so an
//! external indexer can persist the stream.

use {
    crate::{bid::BidIndex, lot::LotId, u256_decimal::DecimalU256},
    alloy::primitives::{Address, B256, U256},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// A lot was created.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotCreated {
    pub lot_id: LotId,
    pub owner: Address,
    pub assets: Vec<Address>,
    #[serde_as(as = "Vec<DecimalU256>")]
    pub shares: Vec<U256>,
    /// Reference amount supplied by the creator. Captured for the audit
    /// trail only; the auction logic never consults it.
    #[serde_as(as = "DecimalU256")]
    pub reference_amount: U256,
}

/// A bid was recorded on a lot.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidCreated {
    pub lot_id: LotId,
    pub sender: Address,
    pub bid_index: BidIndex,
    #[serde_as(as = "Vec<DecimalU256>")]
    pub amounts: Vec<U256>,
    pub commitment: B256,
}

/// Externally observable audit record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuditRecord {
    LotCreated(LotCreated),
    BidCreated(BidCreated),
}
