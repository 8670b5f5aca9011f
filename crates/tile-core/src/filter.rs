// ABOUTME: Case-insensitive regular expression filter over host aliases.

use regex::{Regex, RegexBuilder};

use crate::{HostMap, HostName};

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid host pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub struct HostFilter {
    regex: Regex,
}

impl HostFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// True if the pattern matches anywhere in the name
    pub fn matches(&self, host: &str) -> bool {
        self.regex.is_match(host)
    }

    /// All known hosts the pattern matches, in map order
    pub fn select(&self, hosts: &HostMap) -> Vec<HostName> {
        let selected: Vec<HostName> = hosts
            .names()
            .filter(|host| self.matches(host.as_str()))
            .cloned()
            .collect();
        tracing::debug!(
            "Pattern {:?} selected {} of {} hosts",
            self.regex.as_str(),
            selected.len(),
            hosts.len()
        );
        selected
    }
}
