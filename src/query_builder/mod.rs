//! # Query Builder System
//!
//! Composable, parameterized SELECT building for the statistics store.
//!
//! ## Key Components
//!
//! - [`builder`] - Core query builder with SQL generation and execution
//! - [`conditions`] - Predicates for WHERE and HAVING clauses
//! - [`expression`] - Aggregate expressions (count-if, sum-if, guarded ratio)
//! - [`joins`] - JOIN clause management
//! - [`pagination`] - LIMIT/OFFSET handling
//! - [`params`] - Bind parameters and placeholder numbering
//!
//! ## Example Usage
//!
//! ```rust
//! use brawls_stats::query_builder::{Condition, Expr, QueryBuilder};
//!
//! let hit_ratio = Expr::percentage(
//!     Expr::count_of_events("arrow_hit", "dodgebolt"),
//!     Expr::count_of_events("arrow_fired", "dodgebolt"),
//! );
//!
//! let statement = QueryBuilder::new("\"StatisticEvents\"")
//!     .select(&["player_id"])
//!     .select_expr(hit_ratio, "value")
//!     .group_by(&["player_id"])
//!     .having(Condition::gt(
//!         Expr::count_of_events("arrow_fired", "dodgebolt"),
//!         Expr::literal(15),
//!     ))
//!     .build();
//!
//! assert_eq!(statement.params.len(), 6);
//! ```

pub mod builder;
pub mod conditions;
pub mod expression;
pub mod joins;
pub mod pagination;
pub mod params;

pub use builder::{QueryBuilder, SelectItem};
pub use conditions::{CompareOp, Condition};
pub use expression::{Expr, ValueAggregate};
pub use joins::{Join, JoinType};
pub use pagination::Pagination;
pub use params::{SqlValue, SqlWriter, Statement};
