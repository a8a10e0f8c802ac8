//! # State Module
//!
//! Everything a console session owns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  AppState                                                       │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐   │
//! │  │    Store     │  │   ConfigState    │  │   Option<Role>   │   │
//! │  │  vendors     │  │  store_name      │  │  active view     │   │
//! │  │  products    │  │  currency        │  │  (None = all)    │   │
//! │  │  orders      │  │  defaults        │  │                  │   │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A session is single-threaded and owns its state outright, so no locks.

mod config;

pub use config::ConfigState;

use bazaar_core::Role;
use bazaar_store::Store;

/// State for one console session.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub config: ConfigState,

    /// Restricts commands to one view when set.
    pub role: Option<Role>,
}

impl AppState {
    pub fn new(store: Store, config: ConfigState) -> Self {
        AppState {
            store,
            config,
            role: None,
        }
    }

    /// A session over the seed fixture.
    pub fn seeded(config: ConfigState) -> Self {
        let store = Store::with_seed(config.store_config());
        AppState::new(store, config)
    }
}
