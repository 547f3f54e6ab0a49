//! # Offer Engine
//!
//! The apply path: resolve the restaurant's offer, check user eligibility,
//! compute the discounted total.
//!
//! ## Apply Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Apply Decision                                   │
//! │                                                                         │
//! │  apply(request)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.lookup(restaurant_id) ── None ──► cart value unchanged           │
//! │       │ Some(offer)                                                     │
//! │       ▼                                                                 │
//! │  segments_for(user_id) ∩ eligible_segments = ∅ ──► unchanged            │
//! │       │ intersects                                                      │
//! │       ▼                                                                 │
//! │  FLAT_AMOUNT  → cart - value                                            │
//! │  FLAT_PERCENT → cart - (cart × value) / 100   (truncating)              │
//! │  other        → unchanged                                               │
//! │                                                                         │
//! │  Every branch SUCCEEDS. A miss is a defined "no discount" outcome,      │
//! │  never an error, and the registry is never mutated.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::directory::UserSegmentProvider;
use crate::money::CartValue;
use crate::registry::OfferStore;
use crate::types::{ApplyRequest, ApplyResult, OfferType, RegisteredOffer};

// =============================================================================
// Offer Engine
// =============================================================================

/// Applies the current offer of a restaurant to an incoming cart.
///
/// Holds read-only borrows of the offer store and the segment provider; apply
/// has no side effects beyond reading them. Engines are cheap to construct,
/// so callers typically build one per request around whatever store guard
/// they hold.
pub struct OfferEngine<'a> {
    offers: &'a dyn OfferStore,
    segments: &'a dyn UserSegmentProvider,
}

impl<'a> OfferEngine<'a> {
    /// Creates an engine over a store and a segment provider.
    pub fn new(offers: &'a dyn OfferStore, segments: &'a dyn UserSegmentProvider) -> Self {
        OfferEngine { offers, segments }
    }

    /// Resolves and applies the offer for the request's restaurant.
    ///
    /// Returns the adjusted cart value, or the original value unchanged when
    /// no valid offer applies (no offer registered, user segments disjoint
    /// from the offer's, or unrecognized offer type). Always succeeds.
    pub fn apply(&self, request: &ApplyRequest) -> ApplyResult {
        let offer = match self.offers.lookup(request.restaurant_id) {
            Some(offer) => offer,
            None => return ApplyResult::unchanged(request.cart_value),
        };

        let user_segments = self.segments.segments_for(request.user_id);
        if !offer.qualifies(&user_segments) {
            return ApplyResult::unchanged(request.cart_value);
        }

        ApplyResult {
            cart_value: discounted_total(offer, CartValue::new(request.cart_value)).amount(),
        }
    }
}

// =============================================================================
// Discount Arithmetic
// =============================================================================

/// Computes the post-offer total for a qualifying request.
///
/// Pass-through arithmetic: no floor at zero, negative results are valid
/// outputs. An unrecognized offer type leaves the cart untouched.
fn discounted_total(offer: &RegisteredOffer, cart: CartValue) -> CartValue {
    match offer.offer_type {
        OfferType::FlatAmount => cart.less_flat_amount(offer.offer_value),
        OfferType::FlatPercent => cart.less_percent(offer.offer_value),
        OfferType::Other => cart,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Offer;
    use std::collections::{HashMap, HashSet};

    /// Canned offer store: whatever the test puts in, including states
    /// unreachable through register (negative or >100% values).
    #[derive(Default)]
    struct FixedStore {
        offers: HashMap<i64, RegisteredOffer>,
    }

    impl FixedStore {
        fn with(mut self, offer_type: OfferType, restaurant_id: i64, value: i64) -> Self {
            let stored = RegisteredOffer::from_offer(Offer {
                restaurant_id,
                offer_type,
                offer_value: value,
                eligible_segments: HashSet::from(["p1".to_string()]),
            });
            self.offers.insert(restaurant_id, stored);
            self
        }
    }

    impl OfferStore for FixedStore {
        fn lookup(&self, restaurant_id: i64) -> Option<&RegisteredOffer> {
            self.offers.get(&restaurant_id)
        }
    }

    /// User 1 is in "p1", user 2 in "p2"; everyone else has no segments.
    struct FixedSegments;

    impl UserSegmentProvider for FixedSegments {
        fn segments_for(&self, user_id: i64) -> HashSet<String> {
            match user_id {
                1 => HashSet::from(["p1".to_string()]),
                2 => HashSet::from(["p2".to_string()]),
                _ => HashSet::new(),
            }
        }
    }

    fn apply(store: &FixedStore, cart_value: i64, user_id: i64, restaurant_id: i64) -> i64 {
        OfferEngine::new(store, &FixedSegments)
            .apply(&ApplyRequest {
                cart_value,
                user_id,
                restaurant_id,
            })
            .cart_value
    }

    #[test]
    fn test_flat_amount_offer_applied() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 1, 10);
        assert_eq!(apply(&store, 200, 1, 1), 190);
    }

    #[test]
    fn test_flat_percent_offer_applied() {
        let store = FixedStore::default().with(OfferType::FlatPercent, 2, 10);
        assert_eq!(apply(&store, 200, 1, 2), 180);
    }

    #[test]
    fn test_no_offer_registered_passes_through() {
        let store = FixedStore::default();
        assert_eq!(apply(&store, 200, 1, 999), 200);
    }

    #[test]
    fn test_wrong_restaurant_passes_through() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 18, 5);
        assert_eq!(apply(&store, 200, 1, 19), 200);
    }

    #[test]
    fn test_segment_mismatch_passes_through() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 3, 10);
        // User 2 is in "p2"; the offer is for "p1" only
        assert_eq!(apply(&store, 200, 2, 3), 200);
    }

    #[test]
    fn test_unknown_user_never_qualifies() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 1, 10);
        assert_eq!(apply(&store, 200, 999, 1), 200);
    }

    #[test]
    fn test_zero_value_offer_leaves_cart_unchanged() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 4, 0);
        assert_eq!(apply(&store, 200, 1, 4), 200);
    }

    #[test]
    fn test_unrecognized_offer_type_passes_through() {
        let store = FixedStore::default().with(OfferType::Other, 6, 10);
        assert_eq!(apply(&store, 200, 1, 6), 200);
    }

    #[test]
    fn test_flat_amount_no_floor_at_zero() {
        let store = FixedStore::default().with(OfferType::FlatAmount, 8, 10);
        assert_eq!(apply(&store, 0, 1, 8), -10);
        assert_eq!(apply(&store, 1, 1, 8), -9);
    }

    #[test]
    fn test_force_stored_oversized_percent_goes_negative() {
        // Unreachable through register (rule 5), but the arithmetic is
        // pass-through if such an offer is ever in the store
        let store = FixedStore::default().with(OfferType::FlatPercent, 12, 150);
        assert_eq!(apply(&store, 200, 1, 12), -100);
    }

    #[test]
    fn test_force_stored_negative_value_increases_total() {
        // Likewise unreachable through register (rule 1)
        let store = FixedStore::default()
            .with(OfferType::FlatAmount, 5, -10)
            .with(OfferType::FlatPercent, 21, -10);
        assert_eq!(apply(&store, 200, 1, 5), 210);
        assert_eq!(apply(&store, 200, 1, 21), 220);
    }

    #[test]
    fn test_percent_applied_to_original_value_once() {
        let store = FixedStore::default().with(OfferType::FlatPercent, 15, 33);
        // (199 × 33) / 100 = 65 truncated; 199 - 65 = 134
        assert_eq!(apply(&store, 199, 1, 15), 134);
    }

    #[test]
    fn test_huge_cart_value_stays_positive() {
        let store = FixedStore::default().with(OfferType::FlatPercent, 23, 10);
        assert!(apply(&store, i32::MAX as i64, 1, 23) > 0);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let store = FixedStore::default().with(OfferType::FlatPercent, 9, 10);
        let first = apply(&store, 1_000_000, 1, 9);
        let second = apply(&store, 1_000_000, 1, 9);
        assert_eq!(first, 900_000);
        assert_eq!(first, second, "no hidden state mutation");
    }
}
