//! # Taskboard Core
//!
//! Core types, errors, and domain projections for the Taskboard service.
//! This crate provides the foundational abstractions shared by the
//! configuration and caching layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
