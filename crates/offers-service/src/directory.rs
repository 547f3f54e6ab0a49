//! # Static Directory
//!
//! Deterministic, table-driven answers for the five capability traits.
//!
//! ## What This Stands In For
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Directory Lookups in Production                        │
//! │                                                                         │
//! │  is_valid_segment      ──► segment service        (network)             │
//! │  offer_exists          ──► offer catalog service  (network)             │
//! │  has_active_offer      ──► campaign scheduler     (network)             │
//! │  restaurant_exists     ──► restaurant directory   (network)             │
//! │  segments_for          ──► user profile service   (network)             │
//! │                                                                         │
//! │  Here: in-memory tables with canned answers. A production              │
//! │  implementation swaps in real services behind the same traits,         │
//! │  wrapping calls with timeouts and translating failures; the registry   │
//! │  and engine never notice the difference.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{HashMap, HashSet};
use tracing::trace;

use offers_core::{
    ActiveOfferChecker, OfferExistsChecker, OfferType, RestaurantExistenceChecker,
    SegmentValidator, UserSegmentProvider,
};

use crate::config::DirectoryConfig;

// =============================================================================
// Static Directory
// =============================================================================

/// In-memory directory with deterministic answers keyed on restaurant and
/// user ids.
///
/// ## Usage
/// ```rust
/// use offers_service::StaticDirectory;
/// use offers_core::{RestaurantExistenceChecker, UserSegmentProvider};
///
/// let directory = StaticDirectory::default();
/// assert!(directory.restaurant_exists(1));
/// assert!(!directory.restaurant_exists(999));
/// assert!(directory.segments_for(1).contains("p1"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    /// Segments the platform recognizes.
    valid_segments: HashSet<String>,

    /// Restaurants that do not exist.
    missing_restaurants: HashSet<i64>,

    /// Restaurants outside an active offer window.
    inactive_restaurants: HashSet<i64>,

    /// (restaurant, offer type) pairs that already have an offer elsewhere
    /// on the platform. Empty by default; populated in tests of rule 4.
    existing_offers: HashSet<(i64, OfferType)>,

    /// User id → segment set.
    user_segments: HashMap<i64, HashSet<String>>,
}

impl StaticDirectory {
    /// Builds a directory from config tables.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        StaticDirectory {
            valid_segments: config.valid_segments.iter().cloned().collect(),
            missing_restaurants: config.missing_restaurants.iter().copied().collect(),
            inactive_restaurants: config.inactive_restaurants.iter().copied().collect(),
            existing_offers: HashSet::new(),
            user_segments: config
                .parsed_user_segments()
                .into_iter()
                .map(|(user_id, segments)| (user_id, segments.into_iter().collect()))
                .collect(),
        }
    }

    /// Marks a restaurant as outside any active offer window.
    pub fn with_inactive_restaurant(mut self, restaurant_id: i64) -> Self {
        self.inactive_restaurants.insert(restaurant_id);
        self
    }

    /// Marks an offer type as already existing for a restaurant.
    pub fn with_existing_offer(mut self, restaurant_id: i64, offer_type: OfferType) -> Self {
        self.existing_offers.insert((restaurant_id, offer_type));
        self
    }

    /// Puts a user in the given segments, replacing any prior entry.
    pub fn with_user(mut self, user_id: i64, segments: &[&str]) -> Self {
        self.user_segments
            .insert(user_id, segments.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// The default directory uses the default config tables.
impl Default for StaticDirectory {
    fn default() -> Self {
        StaticDirectory::from_config(&DirectoryConfig::default())
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl SegmentValidator for StaticDirectory {
    fn is_valid_segment(&self, restaurant_id: i64, segments: &HashSet<String>) -> bool {
        let valid = segments.iter().any(|s| self.valid_segments.contains(s));
        trace!(restaurant_id, valid, "segment validity lookup");
        valid
    }
}

impl OfferExistsChecker for StaticDirectory {
    fn offer_exists(&self, restaurant_id: i64, offer_type: &OfferType) -> bool {
        self.existing_offers.contains(&(restaurant_id, *offer_type))
    }
}

impl ActiveOfferChecker for StaticDirectory {
    fn has_active_offer(&self, restaurant_id: i64) -> bool {
        !self.inactive_restaurants.contains(&restaurant_id)
    }
}

impl RestaurantExistenceChecker for StaticDirectory {
    fn restaurant_exists(&self, restaurant_id: i64) -> bool {
        !self.missing_restaurants.contains(&restaurant_id)
    }
}

impl UserSegmentProvider for StaticDirectory {
    fn segments_for(&self, user_id: i64) -> HashSet<String> {
        // Unknown users have no segments and never qualify
        self.user_segments.get(&user_id).cloned().unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
