//! # Directory Capabilities
//!
//! Trait seams for the delegated external checks.
//!
//! ## Why Traits Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Capability Injection                                 │
//! │                                                                         │
//! │  offers-core (this crate)            offers-service / production        │
//! │  ────────────────────────            ───────────────────────────        │
//! │                                                                         │
//! │  SegmentValidator          ◄──────── StaticDirectory (canned tables)    │
//! │  OfferExistsChecker        ◄──────── ...or a real lookup service        │
//! │  ActiveOfferChecker        ◄──────── backed by network/disk, wrapped    │
//! │  RestaurantExistenceChecker◄──────── with call-scoped timeouts          │
//! │  UserSegmentProvider       ◄──────── and translated errors              │
//! │                                                                         │
//! │  The registry and engine depend ONLY on these traits. Swapping the     │
//! │  concrete directory never touches their control flow.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All five lookups are fast, synchronous, in-memory calls in this core. An
//! implementation that backs them with I/O is responsible for its own
//! timeouts and for translating failures into registry/engine-level answers.

use std::collections::HashSet;

use crate::types::OfferType;

// =============================================================================
// Registration-Side Capabilities
// =============================================================================

/// Validates an offer's eligible segments for a restaurant.
pub trait SegmentValidator {
    /// Returns true if the restaurant recognizes at least one of the given
    /// segments.
    fn is_valid_segment(&self, restaurant_id: i64, segments: &HashSet<String>) -> bool;
}

/// Detects duplicate offers in the wider platform.
pub trait OfferExistsChecker {
    /// Returns true if an offer of this type already exists for the
    /// restaurant outside this registry.
    fn offer_exists(&self, restaurant_id: i64, offer_type: &OfferType) -> bool;
}

/// Answers whether a restaurant is inside an active offer window.
pub trait ActiveOfferChecker {
    /// Returns true if the restaurant currently has an active offer window.
    fn has_active_offer(&self, restaurant_id: i64) -> bool;
}

/// Answers whether a restaurant exists at all.
pub trait RestaurantExistenceChecker {
    /// Returns true if the restaurant exists on the platform.
    fn restaurant_exists(&self, restaurant_id: i64) -> bool;
}

// =============================================================================
// Apply-Side Capability
// =============================================================================

/// Resolves the customer segments a user belongs to.
pub trait UserSegmentProvider {
    /// Returns the user's segment set. Unknown users yield an empty set and
    /// therefore never qualify for an offer.
    fn segments_for(&self, user_id: i64) -> HashSet<String>;
}

// =============================================================================
// Registration Directory Bundle
// =============================================================================

/// The four registration-side capabilities bundled into one bound, so the
/// registry can take a single directory value.
///
/// Blanket-implemented for any type providing all four checks.
pub trait RegistrationDirectory:
    SegmentValidator + OfferExistsChecker + ActiveOfferChecker + RestaurantExistenceChecker
{
}

impl<T> RegistrationDirectory for T where
    T: SegmentValidator
        + OfferExistsChecker
        + ActiveOfferChecker
        + RestaurantExistenceChecker
        + ?Sized
{
}
