//! Query Builder Tests Module
//!
//! SQL rendering checks plus execution of built statements against the
//! statistics schema.

pub mod builder;
pub mod conditions;
pub mod pagination;
