//! Access control: client guard decisions and coarse path filtering

pub mod guard;
pub mod routes;

pub use guard::{Access, GuardDecision, LoginSurface, RolePolicy, evaluate};
pub use routes::{FilterOutcome, PathClass, RouteTable, login_redirect, next_location};
