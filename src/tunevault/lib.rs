//! # Tunevault Architecture
//!
//! Tunevault is a **UI-agnostic local storage library** for a music player:
//! typed access to a bundled JSON catalog, per-device overrides of it, and a
//! JSON state mirror an external process can read to see what the app
//! believes is happening. There is no network, no playback engine, and no
//! screen code here.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Provider (provider.rs)                                     │
//! │  - StorageContext: bundle dir + device dir + config         │
//! │  - Repositories: every repository and the mirror, built     │
//! │    eagerly from one context                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repositories (repo/*.rs)  │  State Mirror (mirror/)        │
//! │  - typed queries/mutations │  - twelve state documents      │
//! │  - load-and-cache core     │  - append / single-slot /      │
//! │  - domain id generation    │    membership update shapes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - two tiers: writable device copy over read-only bundle    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two-Tier Rule
//!
//! Every collection resolves to exactly one source: the device file if it
//! exists, else the bundled fixture. The first save of a collection copies
//! it to the device tier; from then on the bundled fixture is dead to that
//! collection. Bundled files are never written. See [`store`] for the
//! resolution contract and [`repo`] for the caching contract layered on
//! top of it.
//!
//! ## Module Overview
//!
//! - [`provider`]: context and eager construction of the whole layer
//! - [`repo`]: one typed repository per catalog collection
//! - [`mirror`]: the state-mirror documents and their update methods
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: catalog record types (`Song`, `Playlist`, ...)
//! - [`ident`]: identifier schemes (`CR001`, `comment_<millis>`, ...)
//! - [`playback`]: the once-per-second progress clock
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod ident;
pub mod mirror;
pub mod model;
pub mod playback;
pub mod provider;
pub mod repo;
pub mod store;
