//! # Taskboard Domain
//!
//! Domain projections and value objects. Projections are the cacheable
//! shapes of entities owned by the relational store; this crate does not
//! own the underlying entities.

pub mod projections;
pub mod value_objects;

pub use projections::*;
pub use value_objects::*;
