//! # Database Operations
//!
//! Connection pool construction and health checks. The statistics store is
//! read-only from this crate's point of view; queries are built with
//! [`crate::query_builder`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brawls_stats::config::DatabaseConfig;
//! use brawls_stats::database::DatabaseConnection;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::new(&DatabaseConfig::default()).await?;
//! assert!(db.health_check().await?);
//! # Ok(())
//! # }
//! ```

pub mod connection;

pub use connection::{health_check, DatabaseConnection};
