//! Core types for Bowlería.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod key;
pub mod money;

pub use key::{OrderId, ProductKey};
pub use money::Money;
