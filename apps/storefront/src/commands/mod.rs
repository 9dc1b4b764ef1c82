//! # Commands Module
//!
//! All commands exposed to the storefront shell.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product grid, search, lookup
//! ├── cart.rs      ◄─── Cart manipulation and panel
//! ├── checkout.rs  ◄─── Checkout form → order
//! ├── admin.rs     ◄─── Login, product editor, orders table
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell line                                                             │
//! │  ──────────                                                             │
//! │  > add 3                                                                │
//! │         │                                                               │
//! │         │ (clap parses the tokenized line)                              │
//! │         ▼                                                               │
//! │  Rust command                                                           │
//! │  ────────────                                                           │
//! │  fn add_to_cart(                                                        │
//! │      store: &StoreState,     ◄── Shared store                           │
//! │      product_id: ProductId,  ◄── From the line                          │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (text render, or JSON with --json)                            │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn get_cart(store: &StoreState)
//!
//! // Store plus the configured authenticator
//! fn login(store: &StoreState, auth: &dyn Authenticator, password: &str)
//!
//! // Only needs config
//! fn get_config(config: &ConfigState)
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
