//! # offers-service: Wiring Around the Pure Offer Engine
//!
//! Everything the transport shell needs that offers-core deliberately does
//! not do: concrete directory lookups, configuration, structured logging,
//! and a registry that is safe to share across concurrent callers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Transport Shell (out of scope)                          │
//! │        POST /offer ──► register    POST /apply ──► apply                │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │                ★ offers-service (THIS CRATE) ★                          │
//! │                                                                         │
//! │   ┌──────────────┐  ┌─────────────────┐  ┌───────────────────────┐     │
//! │   │ OfferService │  │ StaticDirectory │  │   DirectoryConfig     │     │
//! │   │ Arc<RwLock<  │  │ canned tables:  │  │  TOML-shaped tables   │     │
//! │   │  registry>>  │  │ segments, users │  │  with safe defaults   │     │
//! │   └──────┬───────┘  └────────┬────────┘  └───────────────────────┘     │
//! │          │                   │                                          │
//! └──────────┼───────────────────┼──────────────────────────────────────────┘
//!            │                   │ implements the capability traits
//! ┌──────────▼───────────────────▼──────────────────────────────────────────┐
//! │                        offers-core (pure)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - `DirectoryConfig`: serde/TOML-shaped directory tables
//! - [`directory`] - `StaticDirectory`: deterministic capability answers
//! - [`error`] - config load/parse failures
//! - [`service`] - `OfferService`: shared registry + register/apply

pub mod config;
pub mod directory;
pub mod error;
pub mod service;

pub use config::DirectoryConfig;
pub use directory::StaticDirectory;
pub use error::{ServiceError, ServiceResult};
pub use service::OfferService;
