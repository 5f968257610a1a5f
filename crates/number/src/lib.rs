//! Checked arithmetic over auction amounts.
//!
//! Every helper is all-or-nothing: a single overflowing step fails the
//! whole computation so the enclosing operation can abort without leaving
//! partial state behind.

pub mod checked;

pub use checked::checked_sum;
