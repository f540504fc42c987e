//! Derived views over the canonical collection.
//!
//! # Responsibility
//! - Expose the pure search/filter/pagination pipeline and dashboard
//!   counters.
//! - Never mutate the collection it reads.

pub mod pipeline;
