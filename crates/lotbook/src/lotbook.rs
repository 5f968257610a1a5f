//! Lot lifecycle operations: creation, bidding and queries.

use {
    crate::{
        audit::AuditLog,
        config::Config,
        error::Error,
        score::Score,
        store::Store,
        time::Now,
    },
    alloy::primitives::{Address, B256, U256},
    model::{
        AuditRecord,
        Bid,
        BidIndex,
        FIRST_BID_INDEX,
        Lot,
        LotId,
        Part,
        Phase,
        Winner,
        audit::{BidCreated, LotCreated},
    },
    std::sync::Arc,
};

/// The auction services: lot registry, bidding engine and query interface.
///
/// Cheap to clone; all clones share the same registry and audit log. Every
/// operation either applies all of its effects or none, and submissions to
/// the same lot are applied one at a time.
#[derive(Clone)]
pub struct Lotbook(Arc<Inner>);

struct Inner {
    store: Store,
    audit: AuditLog,
    clock: Arc<dyn Now>,
    config: Config,
}

impl Default for Lotbook {
    /// A lotbook with the default bidding window, driven by the wall
    /// clock.
    fn default() -> Self {
        Self::new(Config::default(), Arc::new(crate::time::SystemClock))
    }
}

impl Lotbook {
    pub fn new(config: Config, clock: Arc<dyn Now>) -> Self {
        Self(Arc::new(Inner {
            store: Store::default(),
            audit: AuditLog::default(),
            clock,
            config,
        }))
    }

    /// Creates a lot auctioning the given shares of the given assets,
    /// paired positionally, and opens its bidding window.
    ///
    /// The reference amount is captured in the audit record only. Lot ids
    /// are caller chosen and not checked for uniqueness: creating a lot
    /// under a taken id replaces the previous lot and its entire bid
    /// history.
    pub fn create_lot(
        &self,
        caller: Address,
        lot_id: LotId,
        assets: Vec<Address>,
        shares: Vec<U256>,
        reference_amount: U256,
    ) -> Result<LotId, Error> {
        if assets.is_empty() {
            return Err(Error::Validation("asset list is empty"));
        }
        if assets.len() != shares.len() {
            return Err(Error::Validation("asset and share lists differ in length"));
        }

        let parts = assets
            .iter()
            .zip(&shares)
            .map(|(&asset, &share)| Part { asset, share })
            .collect();
        let lot = Lot {
            owner: caller,
            parts,
            expiration: self.0.clock.now() + self.0.config.bidding_window,
            bids: Default::default(),
            next_bid_index: FIRST_BID_INDEX,
            winner: None,
        };
        if self.0.store.insert(lot_id, lot).is_some() {
            tracing::warn!(%lot_id, "replaced an existing lot and its bid history");
        }
        self.0.audit.record(AuditRecord::LotCreated(LotCreated {
            lot_id,
            owner: caller,
            assets,
            shares,
            reference_amount,
        }));
        Ok(lot_id)
    }

    /// Records a bid on the lot and updates its winner summary.
    ///
    /// Requires the lot to be alive and the amounts to align with the
    /// lot's parts. The bid's score is the checked sum of its amounts; an
    /// overflowing submission aborts as a whole, leaving no trace.
    pub fn create_bet(
        &self,
        caller: Address,
        lot_id: LotId,
        amounts: Vec<U256>,
        commitment: B256,
    ) -> Result<BidIndex, Error> {
        let Some(lot) = self.0.store.get(lot_id) else {
            return Err(Error::Phase {
                required: Phase::Alive,
                actual: Phase::Uninitialized,
            });
        };
        let mut lot = lot.write().unwrap();

        let actual = lot.phase(self.0.clock.now());
        if actual != Phase::Alive {
            return Err(Error::Phase {
                required: Phase::Alive,
                actual,
            });
        }
        if amounts.len() != lot.parts.len() {
            return Err(Error::Validation(
                "bid amounts do not align with the lot's parts",
            ));
        }

        // Every fallible step runs before the first mutation so a failed
        // submission leaves no trace.
        let score = Score::of_amounts(&amounts).ok_or(Error::Arithmetic)?;
        let index = lot.next_bid_index;
        let next_bid_index = index.checked_add(1).ok_or(Error::Arithmetic)?;

        lot.bids.insert(
            index,
            Bid {
                sender: caller,
                amounts: amounts.clone(),
                commitment,
            },
        );
        lot.next_bid_index = next_bid_index;

        // Streaming argmax: only a strictly greater score takes over, so
        // ties keep the earliest bid. The first bid leads unconditionally.
        let leads = match &lot.winner {
            None => true,
            Some(winner) => score > Score(winner.score),
        };
        if leads {
            lot.winner = Some(Winner {
                index,
                score: score.into(),
                commitment,
            });
        }

        self.0.audit.record(AuditRecord::BidCreated(BidCreated {
            lot_id,
            sender: caller,
            bid_index: index,
            amounts,
            commitment,
        }));
        Ok(index)
    }

    /// Score and commitment hash of the winning bid. Only available once
    /// the lot has expired.
    pub fn get_win_bet_info(&self, lot_id: LotId) -> Result<(Score, B256), Error> {
        self.with_expired(lot_id, |lot| {
            let winner = lot
                .winner
                .as_ref()
                .ok_or(Error::Validation("lot has no bids"))?;
            Ok((Score(winner.score), winner.commitment))
        })
    }

    /// Index of the winning bid. Only available once the lot has expired.
    pub fn get_winning_bet(&self, lot_id: LotId) -> Result<BidIndex, Error> {
        self.with_expired(lot_id, |lot| {
            let winner = lot
                .winner
                .as_ref()
                .ok_or(Error::Validation("lot has no bids"))?;
            Ok(winner.index)
        })
    }

    /// Sender of a recorded bid.
    ///
    /// Not phase gated: bid details are readable while the lot is still
    /// alive, which leaks sealed bids to anyone who can query.
    pub fn get_bet_sender(&self, lot_id: LotId, bid_index: BidIndex) -> Result<Address, Error> {
        self.with_bid(lot_id, bid_index, |bid| bid.sender)
    }

    /// Amounts of a recorded bid. Not phase gated, like
    /// [`Self::get_bet_sender`].
    pub fn get_bet_amounts(&self, lot_id: LotId, bid_index: BidIndex) -> Result<Vec<U256>, Error> {
        self.with_bid(lot_id, bid_index, |bid| bid.amounts.clone())
    }

    /// Commitment hash of a recorded bid. Not phase gated, like
    /// [`Self::get_bet_sender`].
    pub fn get_bet_secret_hash(&self, lot_id: LotId, bid_index: BidIndex) -> Result<B256, Error> {
        self.with_bid(lot_id, bid_index, |bid| bid.commitment)
    }

    /// The phase of the lot at this instant. Ids that were never created
    /// report [`Phase::Uninitialized`].
    pub fn phase(&self, lot_id: LotId) -> Phase {
        match self.0.store.get(lot_id) {
            Some(lot) => lot.read().unwrap().phase(self.0.clock.now()),
            None => Phase::Uninitialized,
        }
    }

    /// A consistent snapshot of the lot.
    pub fn lot(&self, lot_id: LotId) -> Option<Lot> {
        let lot = self.0.store.get(lot_id)?;
        let lot = lot.read().unwrap();
        Some(lot.clone())
    }

    /// The audit log fed by all state-mutating operations.
    pub fn audit(&self) -> &AuditLog {
        &self.0.audit
    }

    fn with_expired<T>(
        &self,
        lot_id: LotId,
        extract: impl FnOnce(&Lot) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let Some(lot) = self.0.store.get(lot_id) else {
            return Err(Error::Phase {
                required: Phase::Expired,
                actual: Phase::Uninitialized,
            });
        };
        let lot = lot.read().unwrap();
        let actual = lot.phase(self.0.clock.now());
        if actual != Phase::Expired {
            return Err(Error::Phase {
                required: Phase::Expired,
                actual,
            });
        }
        extract(&lot)
    }

    fn with_bid<T>(
        &self,
        lot_id: LotId,
        bid_index: BidIndex,
        extract: impl FnOnce(&Bid) -> T,
    ) -> Result<T, Error> {
        let Some(lot) = self.0.store.get(lot_id) else {
            return Err(Error::Validation("no lot under this id"));
        };
        let lot = lot.read().unwrap();
        let bid = lot
            .bids
            .get(&bid_index)
            .ok_or(Error::Validation("no bid at this index"))?;
        Ok(extract(bid))
    }
}
