//! Static configuration of the auction services.

use chrono::Duration;

/// Configuration of the [`crate::Lotbook`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Length of the bidding window granted to every newly created lot.
    /// The window starts at creation time and cannot be extended.
    pub bidding_window: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bidding_window: Duration::seconds(120),
        }
    }
}
