//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the canonical employee record and its candidate (draft) form.
//! - Own form validation rules and the image upload pre-check.
//!
//! # Invariants
//! - Every employee is identified by a stable `EMP`-prefixed id.
//! - A draft becomes an `Employee` only by passing validation.

pub mod employee;
pub mod validation;
