//! Routes served by the hosting server itself

pub mod health;

pub use health::{HealthResponse, health_check};
