//! unixtime Core - clock state and timestamp logic with no terminal dependencies
//!
//! This crate contains the period table, the timestamp formatter, the clock
//! engine and the ports (interfaces) the engine and presentation layer talk
//! through. Wall-clock access, the system clipboard and zone naming are
//! supplied by adapters in the binary crate.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
