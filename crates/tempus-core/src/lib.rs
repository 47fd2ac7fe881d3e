//! # tempus-core
//!
//! Error types and shared definitions for tempus-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace – the error enum, the `Result` alias, and the `ensure!` /
//! `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
