//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Two State Types?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬───────────────────┐                       │
//! │          ▼                                      ▼                       │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │   StoreState     │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  store_name      │              │
//! │  │    Storefront    │                 │  seed_count      │              │
//! │  │  >>              │                 │  admin_password  │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare exactly which state they need, so config-only commands
//! never touch the store lock.

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;
