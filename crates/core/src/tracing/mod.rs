//! Tracing setup for native binaries

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::init_tracing;
