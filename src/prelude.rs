//! Prelude module for easter_date crate.
//!
//! Re-exports the derive_more macros used across modules.

pub use derive_more::Display;
