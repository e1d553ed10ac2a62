//! Cacheable projections of store-owned entities.

pub mod task;
pub mod user;

pub use task::TaskProjection;
pub use user::UserProjection;
