//! Core domain types
//!
//! Pure types describing a constellation by modulation family and bit depth.
//! Only `config` touches the filesystem.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
