// ABOUTME: Reads host aliases and their addresses from an OpenSSH client config.
// ABOUTME: Only `Host` blocks with a `HostName` line yield connectable hosts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::HostName;

/// Host aliases mapped to the address from their `HostName` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostMap {
    hosts: BTreeMap<HostName, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    #[error("Failed to read ssh config {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HostMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the default ssh config path (~/.ssh/config)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".ssh").join("config"))
    }

    /// Load hosts from an ssh config file
    pub fn load(path: &Path) -> Result<Self, HostsError> {
        let content = std::fs::read_to_string(path).map_err(|source| HostsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let hosts = Self::parse(&content);
        tracing::info!("Loaded {} hosts from {}", hosts.len(), path.display());
        Ok(hosts)
    }

    /// Parse ssh config text. Lines that are not understood are skipped.
    pub fn parse(content: &str) -> Self {
        let mut map = Self::new();
        let mut current: Option<HostName> = None;

        for line in content.lines() {
            let Some((keyword, value)) = split_directive(line) else {
                continue;
            };

            if keyword.eq_ignore_ascii_case("host") {
                current = value
                    .split_whitespace()
                    .next()
                    .filter(|alias| !is_pattern(alias))
                    .map(HostName::from);
                if current.is_none() {
                    tracing::debug!("Skipping host pattern block: {}", value);
                }
            } else if keyword.eq_ignore_ascii_case("match") {
                current = None;
            } else if keyword.eq_ignore_ascii_case("hostname") {
                let Some(host) = current.take() else {
                    continue;
                };
                let Some(address) = value.split_whitespace().next() else {
                    continue;
                };
                if map.hosts.contains_key(&host) {
                    tracing::warn!("Duplicate host {} ignored, keeping first address", host);
                    continue;
                }
                map.hosts.insert(host, address.to_string());
            }
        }

        map
    }

    pub fn address(&self, host: &str) -> Option<&str> {
        self.hosts.get(host).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &HostName> {
        self.hosts.keys()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl FromIterator<(HostName, String)> for HostMap {
    fn from_iter<I: IntoIterator<Item = (HostName, String)>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

/// Split `Keyword value` or `Keyword=value`, skipping blanks and comments
fn split_directive(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (keyword, rest) = line.split_at(end);
    let value = rest
        .trim_start()
        .strip_prefix('=')
        .unwrap_or(rest)
        .trim();
    Some((keyword, value))
}

fn is_pattern(alias: &str) -> bool {
    alias.contains(['*', '?']) || alias.starts_with('!')
}
