// ABOUTME: Host alias names and their natural sort order.
// ABOUTME: Trailing digit runs compare numerically so web2 sorts before web10.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The alias a host is known by in the ssh config
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostName(String);

impl HostName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sort key splitting off the trailing digit run
    pub fn key(&self) -> HostNameKey<'_> {
        HostNameKey::new(&self.0)
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HostName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for HostName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HostName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for HostName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Natural sort key: everything before the trailing digit run, then that run as a number.
///
/// The number is kept as its digit string (leading zeros stripped) and compared by
/// length first, so suffixes of any length order correctly without overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostNameKey<'a> {
    prefix: &'a str,
    digits: &'a str,
}

impl<'a> HostNameKey<'a> {
    pub fn new(name: &'a str) -> Self {
        let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = name[prefix.len()..].trim_start_matches('0');
        Self { prefix, digits }
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Numeric suffix, 0 when the name has no trailing digits.
    /// Returns None when the value does not fit in a u64.
    pub fn suffix(&self) -> Option<u64> {
        if self.digits.is_empty() {
            return Some(0);
        }
        self.digits.parse().ok()
    }
}

impl Ord for HostNameKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix
            .cmp(other.prefix)
            .then_with(|| self.digits.len().cmp(&other.digits.len()))
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl PartialOrd for HostNameKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order hosts by prefix, then by numeric suffix.
/// Hosts with equal keys (e.g. `web1` and `web01`) keep their input order.
pub fn sort_hosts(hosts: impl IntoIterator<Item = HostName>) -> Vec<HostName> {
    let mut hosts: Vec<HostName> = hosts.into_iter().collect();
    hosts.sort_by(|a, b| a.key().cmp(&b.key()));
    hosts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        sort_hosts(names.iter().map(|n| HostName::from(*n)))
            .into_iter()
            .map(|h| h.as_str().to_string())
            .collect()
    }

    #[test]
    fn key_splits_trailing_digits() {
        let key = HostNameKey::new("web12");
        assert_eq!(key.prefix(), "web");
        assert_eq!(key.suffix(), Some(12));
    }

    #[test]
    fn key_keeps_embedded_digits_in_prefix() {
        let key = HostNameKey::new("web2-node07");
        assert_eq!(key.prefix(), "web2-node");
        assert_eq!(key.suffix(), Some(7));
    }

    #[test]
    fn key_without_trailing_digits() {
        let key = HostNameKey::new("2cool");
        assert_eq!(key.prefix(), "2cool");
        assert_eq!(key.suffix(), Some(0));
    }

    #[test]
    fn key_all_digits() {
        let key = HostNameKey::new("42");
        assert_eq!(key.prefix(), "");
        assert_eq!(key.suffix(), Some(42));
    }

    #[test]
    fn key_huge_suffix_does_not_fit_u64() {
        let key = HostNameKey::new("db123456789012345678901234567890");
        assert_eq!(key.prefix(), "db");
        assert_eq!(key.suffix(), None);
    }

    #[test]
    fn empty_input() {
        assert!(sort_hosts(Vec::new()).is_empty());
    }

    #[test]
    fn numeric_suffix_sorts_numerically() {
        assert_eq!(sorted(&["web10", "web2"]), ["web2", "web10"]);
    }

    #[test]
    fn prefix_dominates_suffix() {
        assert_eq!(sorted(&["web2", "app1"]), ["app1", "web2"]);
    }

    #[test]
    fn bare_name_sorts_before_numbered() {
        assert_eq!(sorted(&["host1", "host"]), ["host", "host1"]);
    }

    #[test]
    fn prefix_comparison_is_case_sensitive() {
        assert_eq!(sorted(&["web1", "Web2"]), ["Web2", "web1"]);
    }

    #[test]
    fn huge_suffixes_compare_numerically() {
        assert_eq!(
            sorted(&["n100000000000000000000", "n99999999999999999999"]),
            ["n99999999999999999999", "n100000000000000000000"]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        assert_eq!(sorted(&["web01", "web1", "web001"]), ["web01", "web1", "web001"]);
        assert_eq!(sorted(&["web1", "web01"]), ["web1", "web01"]);
    }

    fn host_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-cA-C0-9.-]{0,8}", 0..24)
    }

    proptest! {
        #[test]
        fn sort_is_a_permutation(names in host_names()) {
            let out = sort_hosts(names.iter().cloned().map(HostName::from));
            let mut expected = names.clone();
            expected.sort();
            let mut actual: Vec<String> = out.iter().map(|h| h.as_str().to_string()).collect();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn sort_output_is_ordered_by_key(names in host_names()) {
            let out = sort_hosts(names.into_iter().map(HostName::from));
            for pair in out.windows(2) {
                prop_assert!(pair[0].key() <= pair[1].key());
            }
        }

        #[test]
        fn sort_is_deterministic(names in host_names()) {
            let first = sort_hosts(names.iter().cloned().map(HostName::from));
            let second = sort_hosts(names.into_iter().map(HostName::from));
            prop_assert_eq!(first, second);
        }
    }
}
