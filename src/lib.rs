//! unixtime application library
//!
//! Exposes the binary's modules for testing: CLI and config handling, the
//! ticker-driven clock session, host adapters and the MVU terminal UI.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod session;
pub mod ticker;
pub mod tui;
