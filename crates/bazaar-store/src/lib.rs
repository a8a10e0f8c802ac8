//! # bazaar-store: Shared Store for Bazaar
//!
//! This crate provides the in-memory state container every role view reads
//! from and writes to.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Data Flow                                 │
//! │                                                                         │
//! │  Customer view      Vendor view          Admin view                     │
//! │  place_order        add_product          approve_product                │
//! │  catalogue          transition_order     update_order_status            │
//! │       │                  │                    │                         │
//! │       ▼                  ▼                    ▼                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bazaar-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │   Queries     │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │  (query.rs)   │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ vendors       │◄───│ approved      │    │ 2 vendors    │  │   │
//! │  │   │ products      │    │ per vendor    │    │ 3 products   │  │   │
//! │  │   │ orders        │    │ pending       │    │ 1 order      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bazaar_store::{Store, StoreConfig};
//!
//! let mut store = Store::with_seed(StoreConfig::default());
//!
//! let order = store.place_order("p1", "Dana").unwrap();
//! assert_eq!(store.orders()[0].id, order.id);
//!
//! // p2 is still waiting for approval
//! assert!(store.place_order("p2", "Dana").is_err());
//! ```
//!
//! The store is a plain owned value. Hand `&Store` to readers and
//! `&mut Store` to writers; independent stores never share state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod ids;
pub mod query;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use query::OrderDetails;
pub use store::Store;
