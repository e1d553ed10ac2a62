//! Value objects shared across projections.

pub mod role;
pub mod task_status;

pub use role::Role;
pub use task_status::TaskStatus;
