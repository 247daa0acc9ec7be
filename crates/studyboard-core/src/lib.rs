//! # Studyboard Core
//!
//! Shared, WASM-safe logic for Studyboard: canvas geometry, alignment
//! guides, and in-conversation search with cyclic navigation.
//!
//! This crate contains no filesystem I/O, async runtime, or other
//! native-only dependencies. Every function is synchronous and operates
//! on caller-supplied snapshots; nothing here holds global state.

pub mod guides;
pub mod models;
pub mod search;
pub mod session;

pub use guides::{compute_guides, compute_snap, Snap};
pub use models::{GuideSet, Message, Rect, Role, SearchResult};
pub use search::{search, search_with, SearchParams};
pub use session::SearchSession;
