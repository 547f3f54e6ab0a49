//! # Validation Module
//!
//! The ordered registration rules.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Registration Checks (first failure wins)                   │
//! │                                                                         │
//! │  1. offer_value < 0                    → NegativeValue                  │
//! │  2. eligible_segments empty            → NoCustomerSegment              │
//! │  3. SegmentValidator says no           → InvalidSegment                 │
//! │  4. OfferExistsChecker says duplicate  → OfferAlreadyExists             │
//! │  5. FLAT_PERCENT value > 100           → PercentExceedsLimit            │
//! │  6. ActiveOfferChecker says inactive   → NoActiveOffer                  │
//! │  7. RestaurantExistenceChecker says no → RestaurantNotFound             │
//! │                                                                         │
//! │  All pass → the registry stores the offer (last write wins).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is part of the contract: a negative-value percent offer reports
//! `NegativeValue`, not `PercentExceedsLimit`, and delegated checks are never
//! consulted once an earlier rule has failed.

use crate::directory::RegistrationDirectory;
use crate::error::{RegistrationError, RegistryResult};
use crate::types::{Offer, OfferType};
use crate::MAX_FLAT_PERCENT;

/// Runs the ordered registration rules against a candidate offer.
///
/// Returns `Ok(())` if the offer is storable, or the first failing rule's
/// rejection. Short-circuits: later rules (including delegated directory
/// calls) are not evaluated after a failure.
///
/// ## Example
/// ```rust,ignore
/// validation::validate_registration(&offer, &directory)?;
/// // safe to store
/// ```
pub fn validate_registration<D>(offer: &Offer, directory: &D) -> RegistryResult<()>
where
    D: RegistrationDirectory + ?Sized,
{
    // Rule 1: negative values are not registrable
    if offer.offer_value < 0 {
        return Err(RegistrationError::NegativeValue {
            value: offer.offer_value,
        });
    }

    // Rule 2: at least one customer segment
    if offer.eligible_segments.is_empty() {
        return Err(RegistrationError::NoCustomerSegment);
    }

    // Rule 3: segments must be valid for the restaurant
    if !directory.is_valid_segment(offer.restaurant_id, &offer.eligible_segments) {
        return Err(RegistrationError::InvalidSegment {
            restaurant_id: offer.restaurant_id,
        });
    }

    // Rule 4: no duplicate offer of this type
    if directory.offer_exists(offer.restaurant_id, &offer.offer_type) {
        return Err(RegistrationError::OfferAlreadyExists {
            restaurant_id: offer.restaurant_id,
        });
    }

    // Rule 5: percentage offers cap at 100
    if offer.offer_type == OfferType::FlatPercent && offer.offer_value > MAX_FLAT_PERCENT {
        return Err(RegistrationError::PercentExceedsLimit {
            value: offer.offer_value,
        });
    }

    // Rule 6: restaurant must have an active offer window
    if !directory.has_active_offer(offer.restaurant_id) {
        return Err(RegistrationError::NoActiveOffer {
            restaurant_id: offer.restaurant_id,
        });
    }

    // Rule 7: restaurant must exist
    if !directory.restaurant_exists(offer.restaurant_id) {
        return Err(RegistrationError::RestaurantNotFound {
            restaurant_id: offer.restaurant_id,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
