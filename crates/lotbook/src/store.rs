//! In-memory lot registry with one exclusive lock per lot.

use {
    dashmap::DashMap,
    model::{Lot, LotId},
    std::sync::{Arc, RwLock},
};

/// Keyed store of all lots.
///
/// Mutating operations take a single lot's exclusive lock; reads take a
/// shared lock on a consistent snapshot and never block writers to other
/// lots. Entries are inserted or replaced, never removed.
#[derive(Default)]
pub struct Store {
    lots: DashMap<LotId, Arc<RwLock<Lot>>>,
}

impl Store {
    /// Stores `lot` under `id`, replacing any previous lot. Returns the
    /// replaced entry, if any.
    pub fn insert(&self, id: LotId, lot: Lot) -> Option<Arc<RwLock<Lot>>> {
        self.lots.insert(id, Arc::new(RwLock::new(lot)))
    }

    /// The lot stored under `id`.
    pub fn get(&self, id: LotId) -> Option<Arc<RwLock<Lot>>> {
        self.lots.get(&id).map(|entry| entry.value().clone())
    }
}
