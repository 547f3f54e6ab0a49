//! # offers-core: Pure Decision Logic for Cart Offers
//!
//! This crate is the **heart** of the cart-offer system. It decides whether a
//! promotional offer is valid to register for a restaurant and whether it is
//! valid to apply to an incoming cart, and it computes the discounted total.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Offers Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Transport Shell (out of scope)                  │   │
//! │  │        POST /offer ──► register    POST /apply ──► apply        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    offers-service                               │   │
//! │  │    shared registry, stub directory, logging, config             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ offers-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ registry  │  │  engine   │  │   │
//! │  │   │   Offer   │  │ CartValue │  │  store +  │  │  lookup + │  │   │
//! │  │   │  requests │  │ discounts │  │  validate │  │  discount │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Offer, ApplyRequest, ApplyResult, ...)
//! - [`money`] - CartValue type with integer discount arithmetic
//! - [`error`] - Typed registration rejections
//! - [`directory`] - Capability traits for the delegated external checks
//! - [`validation`] - The ordered registration rules
//! - [`registry`] - One-offer-per-restaurant store
//! - [`engine`] - Apply-path eligibility and discount computation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every decision is deterministic given the injected
//!    directory answers - same input = same output
//! 2. **No I/O**: Directory lookups are trait calls; concrete services live
//!    in offers-service
//! 3. **Integer Arithmetic**: Cart values are signed integers; percent math
//!    uses truncating integer division, never floats
//! 4. **Rejections Are Values**: Registration failures are returned as typed
//!    errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashSet;
//! use offers_core::{
//!     ActiveOfferChecker, ApplyRequest, Offer, OfferEngine, OfferExistsChecker,
//!     OfferRegistry, OfferType, RestaurantExistenceChecker, SegmentValidator,
//!     UserSegmentProvider,
//! };
//!
//! // A directory that answers yes to everything and puts every user in "p1".
//! struct OpenDirectory;
//! impl SegmentValidator for OpenDirectory {
//!     fn is_valid_segment(&self, _: i64, _: &HashSet<String>) -> bool { true }
//! }
//! impl OfferExistsChecker for OpenDirectory {
//!     fn offer_exists(&self, _: i64, _: &OfferType) -> bool { false }
//! }
//! impl ActiveOfferChecker for OpenDirectory {
//!     fn has_active_offer(&self, _: i64) -> bool { true }
//! }
//! impl RestaurantExistenceChecker for OpenDirectory {
//!     fn restaurant_exists(&self, _: i64) -> bool { true }
//! }
//! impl UserSegmentProvider for OpenDirectory {
//!     fn segments_for(&self, _: i64) -> HashSet<String> {
//!         HashSet::from(["p1".to_string()])
//!     }
//! }
//!
//! let mut registry = OfferRegistry::new(OpenDirectory);
//! registry
//!     .register(Offer {
//!         restaurant_id: 1,
//!         offer_type: OfferType::FlatAmount,
//!         offer_value: 10,
//!         eligible_segments: HashSet::from(["p1".to_string()]),
//!     })
//!     .unwrap();
//!
//! let engine = OfferEngine::new(&registry, &OpenDirectory);
//! let result = engine.apply(&ApplyRequest {
//!     cart_value: 200,
//!     user_id: 1,
//!     restaurant_id: 1,
//! });
//! assert_eq!(result.cart_value, 190);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod directory;
pub mod engine;
pub mod error;
pub mod money;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use offers_core::Offer` instead of
// `use offers_core::types::Offer`

pub use directory::{
    ActiveOfferChecker, OfferExistsChecker, RegistrationDirectory, RestaurantExistenceChecker,
    SegmentValidator, UserSegmentProvider,
};
pub use engine::OfferEngine;
pub use error::{RegistrationError, RegistryResult};
pub use money::CartValue;
pub use registry::{OfferRegistry, OfferStore};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum value accepted for a `FLAT_PERCENT` offer.
///
/// ## Business Reason
/// A percentage discount above 100% would drive any positive cart negative
/// at registration time; such offers are rejected before they are stored.
pub const MAX_FLAT_PERCENT: i64 = 100;
