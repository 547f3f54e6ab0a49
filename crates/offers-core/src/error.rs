//! # Error Types
//!
//! Typed registration rejections for offers-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  offers-core errors (this file)                                        │
//! │  └── RegistrationError - one variant per ordered registration rule     │
//! │                                                                         │
//! │  offers-service errors (separate crate)                                │
//! │  └── ServiceError      - config load/parse failures                    │
//! │                                                                         │
//! │  NOT errors (defined "no discount" outcomes):                          │
//! │  • no offer registered for the restaurant                              │
//! │  • requesting user's segments do not match                             │
//! │  • unrecognized offer type                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (restaurant id, offending value)
//! 3. Rejections are returned values, never panics or aborts
//! 4. The apply path has no error class at all - every miss degrades to
//!    "cart value unchanged"

use thiserror::Error;

// =============================================================================
// Registration Error
// =============================================================================

/// A rejected offer registration.
///
/// Each variant corresponds to one rule of the ordered registration check
/// (see [`crate::validation::validate_registration`]). The first failing rule
/// wins; the offer is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Rule 1: negative offer values are not registrable.
    #[error("negative offer value {value} is not registrable")]
    NegativeValue { value: i64 },

    /// Rule 2: an offer must name at least one customer segment.
    #[error("offer has no customer segment")]
    NoCustomerSegment,

    /// Rule 3: the segment directory does not recognize any of the offer's
    /// segments for this restaurant.
    #[error("invalid segment for restaurant {restaurant_id}")]
    InvalidSegment { restaurant_id: i64 },

    /// Rule 4: the offer directory already has this offer type for this
    /// restaurant.
    #[error("offer already exists for restaurant {restaurant_id}")]
    OfferAlreadyExists { restaurant_id: i64 },

    /// Rule 5: a percentage offer cannot exceed 100%.
    #[error("percentage {value} exceeds 100")]
    PercentExceedsLimit { value: i64 },

    /// Rule 6: the restaurant has no active offer window.
    #[error("restaurant {restaurant_id} has no active offer")]
    NoActiveOffer { restaurant_id: i64 },

    /// Rule 7: the restaurant does not exist.
    #[error("restaurant {restaurant_id} does not exist")]
    RestaurantNotFound { restaurant_id: i64 },
}

impl RegistrationError {
    /// A short, stable reason code for logging and transport mapping.
    ///
    /// The shell maps a rejection to a non-success response carrying this
    /// code; the human-readable `Display` message is for logs.
    pub const fn code(&self) -> &'static str {
        match self {
            RegistrationError::NegativeValue { .. } => "negative_value",
            RegistrationError::NoCustomerSegment => "no_customer_segment",
            RegistrationError::InvalidSegment { .. } => "invalid_segment",
            RegistrationError::OfferAlreadyExists { .. } => "offer_already_exists",
            RegistrationError::PercentExceedsLimit { .. } => "percent_exceeds_limit",
            RegistrationError::NoActiveOffer { .. } => "no_active_offer",
            RegistrationError::RestaurantNotFound { .. } => "restaurant_not_found",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RegistrationError.
pub type RegistryResult<T> = Result<T, RegistrationError>;

// =============================================================================
// Unit Tests
// =============================================================================
