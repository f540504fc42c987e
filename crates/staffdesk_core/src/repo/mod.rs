//! Repository layer abstractions and store-backed implementations.
//!
//! # Responsibility
//! - Define canonical CRUD access to the employee collection.
//! - Isolate key-value persistence details from service orchestration.
//!
//! # Invariants
//! - Repository writes validate candidates before touching the store.
//! - Every mutation is a full read-modify-write of the whole collection.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   store transport errors.

pub mod employee_repo;
pub mod seed;
