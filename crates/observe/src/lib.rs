//! This crate contains code that is required to provide or improve the
//! observability of the auction services. That currently means
//! initialization logic for logging.

pub mod tracing;
