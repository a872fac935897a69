//! pinlog - Map-pinned activity log
//!
//! Logs activities at map points, derives pace or speed from distance and
//! duration, and keeps the whole log in a persisted snapshot that is restored
//! on the next start.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PinlogError;
