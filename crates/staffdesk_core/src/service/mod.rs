//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and query-pipeline calls into use-case level
//!   APIs for the presentation layer.
//! - Keep UI layers decoupled from storage details.

pub mod employee_service;
