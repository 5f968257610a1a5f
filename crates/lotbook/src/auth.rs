//! Administrative ownership capability.
//!
//! Deliberately kept out of the auction types: the bidding flow never
//! consults it, administrative operations take it as an explicit
//! collaborator and call [`Ownership::ensure_owner`] themselves.

use {alloy::primitives::Address, std::sync::Mutex, thiserror::Error};

/// Holder of the administrative owner identity.
pub struct Ownership {
    owner: Mutex<Option<Address>>,
}

impl Ownership {
    pub fn new(owner: Address) -> Self {
        Self {
            owner: Mutex::new(Some(owner)),
        }
    }

    /// The current owner. `None` once ownership has been renounced.
    pub fn owner(&self) -> Option<Address> {
        *self.owner.lock().unwrap()
    }

    /// Hands ownership to `new_owner`. Only the current owner may do this.
    pub fn transfer(&self, caller: Address, new_owner: Address) -> Result<(), NotOwner> {
        let mut owner = self.owner.lock().unwrap();
        if *owner != Some(caller) {
            return Err(NotOwner);
        }
        tracing::info!(?caller, ?new_owner, "ownership transferred");
        *owner = Some(new_owner);
        Ok(())
    }

    /// Gives up ownership for good. No owner exists afterwards, so every
    /// owner-gated operation fails from then on.
    pub fn renounce(&self, caller: Address) -> Result<(), NotOwner> {
        let mut owner = self.owner.lock().unwrap();
        if *owner != Some(caller) {
            return Err(NotOwner);
        }
        tracing::info!(?caller, "ownership renounced");
        *owner = None;
        Ok(())
    }

    /// Ensures `caller` currently holds ownership.
    pub fn ensure_owner(&self, caller: Address) -> Result<(), NotOwner> {
        if self.owner() == Some(caller) {
            Ok(())
        } else {
            Err(NotOwner)
        }
    }
}

/// The caller does not hold the administrative ownership.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("caller is not the owner")]
pub struct NotOwner;
