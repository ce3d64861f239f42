//! Hosting server settings

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tillpoint_core::access::RouteTable;

/// Prefix of environment overrides, e.g. `TILLPOINT__SERVER__BIND_ADDR`
pub const ENV_PREFIX: &str = "TILLPOINT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    /// Path lists for the coarse session filter
    #[serde(default)]
    pub routes: RouteTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Directory holding the built front-end bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// File served for client-side routes
    #[serde(default = "default_static_index")]
    pub static_index: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bind_addr() -> SocketAddr {
    ([127, 0, 0, 1], 8080).into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_static_index() -> String {
    "index.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            static_index: default_static_index(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Defaults, then the optional file, then `TILLPOINT__*` environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("routes.public")
                .with_list_parse_key("routes.client_protected")
                .with_list_parse_key("routes.admin_protected")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Path of the SPA entry point
    pub fn index_path(&self) -> PathBuf {
        self.server.static_dir.join(&self.server.static_index)
    }
}
