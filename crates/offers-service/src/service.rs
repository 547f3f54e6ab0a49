//! # Offer Service
//!
//! The shared registry and the two operations exposed to the transport shell.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<RwLock<T>>` because:
//! 1. Shell handlers may call register and apply concurrently
//! 2. `register` mutates the store, `apply` only reads it
//! 3. A concurrent register/apply pair must observe a consistent
//!    before-or-after view, never a partially-written offer
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Operations                                  │
//! │                                                                         │
//! │  Shell Request            OfferService              Registry State      │
//! │  ─────────────            ────────────              ──────────────      │
//! │                                                                         │
//! │  POST /offer ───────────► register() ── write lock ─► insert/replace    │
//! │                               │                                         │
//! │                               └─ rejection logged, returned as a value  │
//! │                                                                         │
//! │  POST /apply ───────────► apply() ───── read lock ──► (read only)       │
//! │                               │                                         │
//! │                               └─ always succeeds, value passed through  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use offers_core::{
    ApplyRequest, ApplyResult, Offer, OfferEngine, OfferRegistry, RegistrationDirectory,
    RegistryResult, UserSegmentProvider,
};

// =============================================================================
// Offer Service
// =============================================================================

/// Owns the shared offer registry and the directory, and exposes the two
/// core-facing operations the shell calls.
///
/// Cloning is cheap (the registry is behind an `Arc`); clones share state,
/// so one service instance can back every shell handler.
///
/// ## Usage
/// ```rust
/// use offers_core::{ApplyRequest, Offer, OfferType};
/// use offers_service::{OfferService, StaticDirectory};
/// use std::collections::HashSet;
///
/// let service = OfferService::new(StaticDirectory::default());
///
/// service
///     .register(Offer {
///         restaurant_id: 1,
///         offer_type: OfferType::FlatAmount,
///         offer_value: 10,
///         eligible_segments: HashSet::from(["p1".to_string()]),
///     })
///     .unwrap();
///
/// let result = service.apply(&ApplyRequest {
///     cart_value: 200,
///     user_id: 1,
///     restaurant_id: 1,
/// });
/// assert_eq!(result.cart_value, 190);
/// ```
#[derive(Debug)]
pub struct OfferService<D> {
    registry: Arc<RwLock<OfferRegistry<D>>>,
    directory: D,
}

impl<D: Clone> Clone for OfferService<D> {
    fn clone(&self) -> Self {
        OfferService {
            registry: Arc::clone(&self.registry),
            directory: self.directory.clone(),
        }
    }
}

impl<D> OfferService<D>
where
    D: RegistrationDirectory + UserSegmentProvider + Clone,
{
    /// Creates a service around a directory. The registry starts empty.
    pub fn new(directory: D) -> Self {
        OfferService {
            registry: Arc::new(RwLock::new(OfferRegistry::new(directory.clone()))),
            directory,
        }
    }

    /// Registers an offer, replacing any prior offer for the restaurant.
    ///
    /// Rejections come back as values; the shell maps them to a non-success
    /// response. Takes the write lock for the duration of validate-and-store.
    pub fn register(&self, offer: Offer) -> RegistryResult<()> {
        let restaurant_id = offer.restaurant_id;
        let mut registry = self.registry.write().expect("offer registry lock poisoned");

        match registry.register(offer) {
            Ok(()) => {
                info!(restaurant_id, "offer registered");
                Ok(())
            }
            Err(rejection) => {
                debug!(restaurant_id, rule = rejection.code(), "offer rejected");
                Err(rejection)
            }
        }
    }

    /// Applies the restaurant's current offer to a cart. Always succeeds;
    /// the result carries the possibly unchanged cart value.
    pub fn apply(&self, request: &ApplyRequest) -> ApplyResult {
        let registry = self.registry.read().expect("offer registry lock poisoned");
        let result = OfferEngine::new(&*registry, &self.directory).apply(request);

        debug!(
            restaurant_id = request.restaurant_id,
            user_id = request.user_id,
            cart_value = request.cart_value,
            adjusted = result.cart_value,
            "apply evaluated"
        );
        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticDirectory;
    use offers_core::{OfferType, RegistrationError};
    use std::collections::HashSet;

    fn offer(restaurant_id: i64, offer_type: OfferType, value: i64, names: &[&str]) -> Offer {
        Offer {
            restaurant_id,
            offer_type,
            offer_value: value,
            eligible_segments: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn apply(service: &OfferService<StaticDirectory>, cart: i64, user: i64, restaurant: i64) -> i64 {
        service
            .apply(&ApplyRequest {
                cart_value: cart,
                user_id: user,
                restaurant_id: restaurant,
            })
            .cart_value
    }

    #[test]
    fn test_register_and_apply_flat_amount() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(1, OfferType::FlatAmount, 10, &["p1"]))
            .unwrap();
        assert_eq!(apply(&service, 200, 1, 1), 190);
    }

    #[test]
    fn test_register_and_apply_flat_percent() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(2, OfferType::FlatPercent, 10, &["p1"]))
            .unwrap();
        assert_eq!(apply(&service, 200, 1, 2), 180);
    }

    #[test]
    fn test_apply_without_offer_passes_through() {
        let service = OfferService::new(StaticDirectory::default());
        assert_eq!(apply(&service, 200, 1, 999), 200);
    }

    #[test]
    fn test_segment_mismatch_passes_through() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(3, OfferType::FlatAmount, 10, &["p2"]))
            .unwrap();
        // User 1 is in p1 only
        assert_eq!(apply(&service, 200, 1, 3), 200);
    }

    #[test]
    fn test_multi_segment_offer_any_match_qualifies() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(10, OfferType::FlatAmount, 20, &["p1", "p2"]))
            .unwrap();
        assert_eq!(apply(&service, 200, 1, 10), 180);
        assert_eq!(apply(&service, 200, 2, 10), 180);
        assert_eq!(apply(&service, 200, 999, 10), 200);
    }

    #[test]
    fn test_replacement_uses_only_latest_offer() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(24, OfferType::FlatAmount, 5, &["p1"]))
            .unwrap();
        service
            .register(offer(24, OfferType::FlatPercent, 10, &["p1"]))
            .unwrap();
        assert_eq!(apply(&service, 200, 1, 24), 180);
    }

    #[test]
    fn test_rejections_surface_as_values() {
        let service = OfferService::new(StaticDirectory::default());

        assert_eq!(
            service.register(offer(5, OfferType::FlatAmount, -10, &["p1"])),
            Err(RegistrationError::NegativeValue { value: -10 })
        );
        assert_eq!(
            service.register(offer(12, OfferType::FlatPercent, 150, &["p1"])),
            Err(RegistrationError::PercentExceedsLimit { value: 150 })
        );
        assert_eq!(
            service.register(offer(999, OfferType::FlatAmount, 10, &["p1"])),
            Err(RegistrationError::RestaurantNotFound { restaurant_id: 999 })
        );

        // None of the rejected offers are applied
        assert_eq!(apply(&service, 200, 1, 5), 200);
        assert_eq!(apply(&service, 200, 1, 12), 200);
    }

    #[test]
    fn test_duplicate_platform_offer_rejected() {
        let directory = StaticDirectory::default().with_existing_offer(11, OfferType::FlatAmount);
        let service = OfferService::new(directory);
        assert_eq!(
            service.register(offer(11, OfferType::FlatAmount, 10, &["p1"])),
            Err(RegistrationError::OfferAlreadyExists { restaurant_id: 11 })
        );
    }

    #[test]
    fn test_inactive_restaurant_rejected() {
        let directory = StaticDirectory::default().with_inactive_restaurant(6);
        let service = OfferService::new(directory);
        assert_eq!(
            service.register(offer(6, OfferType::FlatAmount, 10, &["p1"])),
            Err(RegistrationError::NoActiveOffer { restaurant_id: 6 })
        );
    }

    #[test]
    fn test_clones_share_registry_state() {
        let service = OfferService::new(StaticDirectory::default());
        let handler_copy = service.clone();

        handler_copy
            .register(offer(1, OfferType::FlatAmount, 10, &["p1"]))
            .unwrap();
        assert_eq!(apply(&service, 200, 1, 1), 190);
    }

    #[test]
    fn test_concurrent_register_and_apply() {
        let service = OfferService::new(StaticDirectory::default());
        service
            .register(offer(1, OfferType::FlatAmount, 10, &["p1"]))
            .unwrap();

        let writer = {
            let service = service.clone();
            std::thread::spawn(move || {
                for value in 1..=50 {
                    service
                        .register(offer(1, OfferType::FlatAmount, value, &["p1"]))
                        .unwrap();
                }
            })
        };

        // Every observed total reflects a fully registered offer
        for _ in 0..200 {
            let total = apply(&service, 200, 1, 1);
            assert!((150..=199).contains(&total), "saw torn offer: {total}");
        }
        writer.join().unwrap();
        assert_eq!(apply(&service, 200, 1, 1), 150);
    }

    #[test]
    fn test_services_do_not_share_state() {
        let a = OfferService::new(StaticDirectory::default());
        let b = OfferService::new(StaticDirectory::default());

        a.register(offer(1, OfferType::FlatAmount, 10, &["p1"]))
            .unwrap();
        assert_eq!(apply(&a, 200, 1, 1), 190);
        assert_eq!(apply(&b, 200, 1, 1), 200);
    }
}
