//! Contains models that are shared between the auction services and their
//! callers.

pub mod audit;
pub mod bid;
pub mod lot;
pub mod u256_decimal;

pub use {
    audit::AuditRecord,
    bid::{Bid, BidIndex, FIRST_BID_INDEX},
    lot::{Lot, LotId, Part, Phase, Winner},
};
