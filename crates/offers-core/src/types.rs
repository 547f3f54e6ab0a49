//! # Domain Types
//!
//! Core domain types for the cart-offer system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │     Offer       │   │  RegisteredOffer  │   │  ApplyRequest   │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  restaurant_id  │   │  id (UUID)        │   │  cart_value     │     │
//! │  │  offer_type     │   │  restaurant_id    │   │  user_id        │     │
//! │  │  offer_value    │   │  offer fields...  │   │  restaurant_id  │     │
//! │  │  segments       │   │  registered_at    │   └─────────────────┘     │
//! │  └─────────────────┘   └───────────────────┘                           │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   OfferType     │   │   ApplyResult   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  FLAT_AMOUNT    │   │  cart_value     │                             │
//! │  │  FLAT_PERCENT   │   └─────────────────┘                             │
//! │  │  (other)        │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A stored offer has:
//! - `id`: UUID v4 - immutable, for audit trails and log correlation
//! - Business key: `restaurant_id` - at most one offer per restaurant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// =============================================================================
// Offer Type
// =============================================================================

/// The kind of discount an offer grants.
///
/// Unrecognized wire values deserialize to [`OfferType::Other`] instead of
/// failing: an unknown type is a defined "no discount" outcome at apply time,
/// not a marshaling error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferType {
    /// Subtract a fixed amount from the cart value.
    FlatAmount,
    /// Subtract a percentage of the cart value.
    FlatPercent,
    /// Any unrecognized offer type; applies as no discount.
    #[serde(other)]
    Other,
}

// =============================================================================
// Offer
// =============================================================================

/// A candidate promotional offer scoped to one restaurant.
///
/// This is the value object a caller submits for registration. No range
/// validation happens at construction; the ordered registration rules in
/// [`crate::validation`] decide whether it is storable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Restaurant the offer belongs to.
    pub restaurant_id: i64,

    /// Discount kind.
    pub offer_type: OfferType,

    /// Percent or absolute amount depending on `offer_type`. Signed; the
    /// registration rules reject negatives.
    pub offer_value: i64,

    /// Customer segments the offer is eligible for. Insertion order is
    /// irrelevant; may be empty (and is then rejected at registration).
    pub eligible_segments: HashSet<String>,
}

// =============================================================================
// Registered Offer
// =============================================================================

/// An offer accepted by the registry.
/// Uses the snapshot pattern: the offer fields are frozen at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredOffer {
    /// Unique identifier (UUID v4), assigned at registration.
    pub id: String,

    /// Restaurant the offer belongs to (business key, unique in the registry).
    pub restaurant_id: i64,

    /// Discount kind at registration (frozen).
    pub offer_type: OfferType,

    /// Discount value at registration (frozen).
    pub offer_value: i64,

    /// Eligible segments at registration (frozen).
    pub eligible_segments: HashSet<String>,

    /// When the offer was registered. A later registration for the same
    /// restaurant replaces this record (last write wins).
    pub registered_at: DateTime<Utc>,
}

impl RegisteredOffer {
    /// Freezes an accepted offer into its stored form.
    pub fn from_offer(offer: Offer) -> Self {
        RegisteredOffer {
            id: Uuid::new_v4().to_string(),
            restaurant_id: offer.restaurant_id,
            offer_type: offer.offer_type,
            offer_value: offer.offer_value,
            eligible_segments: offer.eligible_segments,
            registered_at: Utc::now(),
        }
    }

    /// Checks whether a user with the given segments qualifies for this
    /// offer (any shared segment qualifies).
    pub fn qualifies(&self, user_segments: &HashSet<String>) -> bool {
        !self.eligible_segments.is_disjoint(user_segments)
    }
}

// =============================================================================
// Apply Request / Result
// =============================================================================

/// A request to apply the restaurant's current offer to a cart.
///
/// `user_id` is not validated for existence: an unknown user simply has no
/// segments and never qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyRequest {
    /// Pre-discount cart total; may be any sign.
    pub cart_value: i64,

    /// The requesting user.
    pub user_id: i64,

    /// Restaurant whose offer should be considered.
    pub restaurant_id: i64,
}

/// The outcome of an apply request: the original cart value unchanged, or
/// the discounted value. Always a success; there is no apply-path error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResult {
    /// Post-decision cart total. Negative results are valid outputs.
    pub cart_value: i64,
}

impl ApplyResult {
    /// The "no discount" outcome: cart value passed through unchanged.
    #[inline]
    pub const fn unchanged(cart_value: i64) -> Self {
        ApplyResult { cart_value }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
