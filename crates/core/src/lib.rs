//! Tillpoint core types and session primitives
//!
//! Everything in this crate is platform neutral: it compiles for the native
//! hosting server and for the `wasm32` front-end alike.

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(all(feature = "tracing", not(target_arch = "wasm32")))]
pub mod tracing;

pub use access::{Access, GuardDecision, LoginSurface, RolePolicy};
pub use api::{ApiError, ErrorCode};
pub use config::ApiConfig;
pub use error::{CoreError, CoreResult};
pub use session::{AuthEvent, AuthPhase, AuthState};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use types::{AdminPrincipal, Principal, SessionToken, StaffPrincipal, StaffRole, StoredSession, UserType};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
