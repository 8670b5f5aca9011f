// ABOUTME: Shared types and host selection for sshtile.
// ABOUTME: Defines host names, natural sorting, ssh config loading and settings.

pub mod filter;
pub mod host;
pub mod settings;
pub mod ssh_config;

pub use filter::{FilterError, HostFilter};
pub use host::{sort_hosts, HostName, HostNameKey};
pub use settings::{Settings, SettingsError};
pub use ssh_config::{HostMap, HostsError};
