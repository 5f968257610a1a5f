//! Core of the sealed-style multi-asset auction services.
//!
//! A lot bundles several asset shares for sale. While the lot's bidding
//! window is open, participants submit bids; each bid is a vector of
//! per-asset amounts plus an opaque commitment hash. Once the window
//! closes, the lot exposes its highest-scoring bid as the winner.
//!
//! This crate is the in-process core behind a serializing transport layer:
//! every call either applies all of its effects or none, and submissions
//! to the same lot are applied one at a time.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod lotbook;
pub mod score;
pub mod store;
pub mod time;

pub use {
    audit::AuditLog,
    auth::Ownership,
    config::Config,
    error::Error,
    lotbook::Lotbook,
    score::Score,
    time::{Now, SystemClock},
};
