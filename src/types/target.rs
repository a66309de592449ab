//! Scan target resolution.
//!
//! A target is given as an IP literal or a hostname. Hostnames are resolved
//! once, before any probe runs, and the first address matching the
//! protocol's address family is kept.

use crate::scanner::Protocol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// A single host that has been resolved to an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub original: String,
    /// The resolved IP address.
    pub ip: IpAddr,
}

/// Error type for target parsing and resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("invalid target: {0}")]
    InvalidFormat(String),
    #[error("failed to resolve hostname '{0}': {1}")]
    DnsResolutionFailed(String, String),
    #[error("no {1} address found for '{0}'")]
    NoAddressesFound(String, Protocol),
}

impl ScanTarget {
    pub fn new(original: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            original: original.into(),
            ip,
        }
    }

    /// Resolve `host` to an address usable with `protocol`.
    pub async fn resolve(host: &str, protocol: Protocol) -> Result<Self, TargetError> {
        let host = host.trim();

        if let Ok(ip) = host.parse::<IpAddr>() {
            if !protocol.accepts(&ip) {
                return Err(TargetError::NoAddressesFound(host.to_string(), protocol));
            }
            return Ok(Self::new(host, ip));
        }

        if !is_valid_hostname(host) {
            return Err(TargetError::InvalidFormat(host.to_string()));
        }

        let resolver =
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

        let response = resolver
            .lookup_ip(host)
            .await
            .map_err(|e| TargetError::DnsResolutionFailed(host.to_string(), e.to_string()))?;

        let ip = response
            .iter()
            .find(|ip| protocol.accepts(ip))
            .ok_or_else(|| TargetError::NoAddressesFound(host.to_string(), protocol))?;

        tracing::debug!(host, %ip, "resolved scan target");
        Ok(Self::new(host, ip))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.ip.to_string() {
            write!(f, "{}", self.ip)
        } else {
            write!(f, "{} ({})", self.original, self.ip)
        }
    }
}

/// Check if a string is a valid hostname.
fn is_valid_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }

    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.ends_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn test_resolve_ipv4_literal() {
        let target = ScanTarget::resolve("192.168.1.75", Protocol::Tcp).await.unwrap();
        assert_eq!(target.ip, IpAddr::V4(Ipv4Addr::new(192, 168, 1, 75)));
        assert_eq!(target.to_string(), "192.168.1.75");
    }

    #[tokio::test]
    async fn test_resolve_ipv6_literal() {
        let target = ScanTarget::resolve("::1", Protocol::Tcp6).await.unwrap();
        assert_eq!(target.ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn test_family_mismatch() {
        let result = ScanTarget::resolve("127.0.0.1", Protocol::Tcp6).await;
        assert!(matches!(result, Err(TargetError::NoAddressesFound(_, _))));
    }

    #[tokio::test]
    async fn test_invalid_target() {
        let result = ScanTarget::resolve("not a host!", Protocol::Tcp).await;
        assert!(matches!(result, Err(TargetError::InvalidFormat(_))));
    }

    #[test]
    fn test_display_with_hostname() {
        let target = ScanTarget::new("localhost", IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(target.to_string(), "localhost (127.0.0.1)");
    }

    #[test]
    fn test_valid_hostname() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("my-server"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("-invalid.com"));
        assert!(!is_valid_hostname("bad..dots"));
    }
}
