//! # cv-core
//!
//! Core types and utilities for Convai RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Error types (query construction, configuration, transport)
//! - Result type alias
//! - Client configuration
//! - Pagination defaults

pub mod error;
pub mod result;
pub mod pagination;
pub mod config;

pub use error::*;
pub use result::*;
pub use pagination::*;
