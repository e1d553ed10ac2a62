//! # Taskboard Config
//!
//! Configuration management for the Taskboard service.
//! Supports layered configuration from files, environment variables,
//! and runtime refresh.

mod app_config;
mod loader;
mod telemetry;

pub use app_config::*;
pub use loader::*;
pub use telemetry::*;
