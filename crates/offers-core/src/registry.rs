//! # Offer Registry
//!
//! The one-offer-per-restaurant store.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Registry Operations                                 │
//! │                                                                         │
//! │  register(offer)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_registration(offer, directory)  ── Err ──► rejection returned │
//! │       │ Ok                                           (nothing stored)   │
//! │       ▼                                                                 │
//! │  offers.insert(restaurant_id, frozen offer)                             │
//! │       │                                                                 │
//! │       └── a prior offer for the restaurant is REPLACED (last write wins)│
//! │                                                                         │
//! │  lookup(restaurant_id) ──► Some(&RegisteredOffer) | None                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one registered offer per restaurant id
//! - Offers live for the process lifetime; no expiry, no deletion
//! - A rejected registration leaves the store untouched

use std::collections::HashMap;

use crate::directory::RegistrationDirectory;
use crate::error::RegistryResult;
use crate::types::{Offer, RegisteredOffer};
use crate::validation::validate_registration;

// =============================================================================
// Offer Store Trait
// =============================================================================

/// Read-only access to registered offers.
///
/// The engine depends on this seam rather than on [`OfferRegistry`] directly,
/// so tests can hand it a canned store (including states unreachable through
/// `register`, such as a force-stored negative offer).
pub trait OfferStore {
    /// Returns the currently registered offer for a restaurant, if any.
    fn lookup(&self, restaurant_id: i64) -> Option<&RegisteredOffer>;
}

// =============================================================================
// Offer Registry
// =============================================================================

/// In-memory store of offers keyed by restaurant id.
///
/// Owns the restaurant→offer map exclusively; the engine only ever reads it.
/// The registration-side directory is injected at construction, so swapping
/// the concrete lookups never touches the control flow here.
///
/// ## Usage
/// ```rust,ignore
/// let mut registry = OfferRegistry::new(directory);
/// registry.register(offer)?;
/// let current = registry.lookup(restaurant_id);
/// ```
#[derive(Debug)]
pub struct OfferRegistry<D> {
    /// Delegated registration checks.
    directory: D,

    /// The single source of truth: restaurant id → current offer.
    offers: HashMap<i64, RegisteredOffer>,
}

impl<D> OfferRegistry<D> {
    /// Creates an empty registry around the given directory.
    pub fn new(directory: D) -> Self {
        OfferRegistry {
            directory,
            offers: HashMap::new(),
        }
    }

    /// Returns the currently registered offer for a restaurant, or `None` if
    /// never registered.
    pub fn lookup(&self, restaurant_id: i64) -> Option<&RegisteredOffer> {
        self.offers.get(&restaurant_id)
    }

    /// Number of restaurants with a registered offer.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Checks if no offer has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl<D: RegistrationDirectory> OfferRegistry<D> {
    /// Validates and stores an offer.
    ///
    /// Runs the ordered registration rules; on success the offer is frozen
    /// into a [`RegisteredOffer`] and stored, replacing any prior offer for
    /// the same restaurant. On rejection nothing is stored.
    pub fn register(&mut self, offer: Offer) -> RegistryResult<()> {
        validate_registration(&offer, &self.directory)?;

        let stored = RegisteredOffer::from_offer(offer);
        self.offers.insert(stored.restaurant_id, stored);
        Ok(())
    }
}

impl<D> OfferStore for OfferRegistry<D> {
    fn lookup(&self, restaurant_id: i64) -> Option<&RegisteredOffer> {
        OfferRegistry::lookup(self, restaurant_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
