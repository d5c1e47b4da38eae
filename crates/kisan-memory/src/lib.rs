//! # kisan-memory
//!
//! Persistent preference storage for Kisan (SQLite-backed).

pub mod store;

pub use store::Store;
