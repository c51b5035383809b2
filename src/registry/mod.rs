//! # Registry Infrastructure
//!
//! General-purpose keyed registry used for the leaderboard catalog.
//!
//! ## Overview
//!
//! A [`Registry`] maps stable string keys to shared entries and remembers the
//! order keys were registered in. It is filled once at startup and read
//! concurrently afterwards, so it carries no interior locking: build it
//! mutably, then wrap it in an `Arc`.
//!
//! ## Usage
//!
//! ```rust
//! use brawls_stats::registry::Registry;
//!
//! # fn main() -> Result<(), brawls_stats::error::StatsError> {
//! let mut registry = Registry::new();
//! registry.register("total_experience", "Total Experience Leaderboard")?;
//!
//! assert!(registry.register("total_experience", "again").is_err());
//! assert_eq!(registry.all_ids(), vec!["total_experience"]);
//! # Ok(())
//! # }
//! ```

pub mod keyed_registry;

pub use keyed_registry::{Registry, RegistryStats};
