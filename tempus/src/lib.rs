//! # tempus
//!
//! Civil-calendar and duration arithmetic with explicit per-field
//! precision.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tempus-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! tempus = "0.1"
//! ```
//!
//! ```rust
//! use tempus::time::DateTime;
//!
//! let dt = DateTime::from_ymd(2024, 2, 29);
//! assert!(dt.validate());
//! assert_eq!(dt.yearday, 60);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub use tempus_core as core;

/// Date, span, calendar, holiday, season, query, and formatting types.
pub use tempus_time as time;
