//! Scanner module - port probing and range scanning.
//!
//! A [`Prober`] makes one bounded connection attempt. A [`RangeScanner`]
//! drives a prober across a [`ScanInterval`], either one port at a time or
//! with one tokio task per port, and hands back a complete [`ScanResultSet`].

pub mod range;
pub mod tcp;
pub mod traits;

use crate::error::{ScanError, ScanResult};
use crate::types::{ScanInterval, ScanResultSet};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

pub use range::{ConcurrentScanner, SequentialScanner};
pub use tcp::TcpProber;
pub use traits::{BoxedRangeScanner, Prober, RangeScanner};

/// Transport protocol used for probing.
///
/// Only TCP is supported. `tcp4` and `tcp6` restrict the target to one
/// address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Tcp,
    Tcp4,
    Tcp6,
}

impl Protocol {
    /// Check whether `ip` belongs to this protocol's address family.
    pub fn accepts(&self, ip: &IpAddr) -> bool {
        match self {
            Self::Tcp => true,
            Self::Tcp4 => ip.is_ipv4(),
            Self::Tcp6 => ip.is_ipv6(),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Tcp4 => write!(f, "tcp4"),
            Self::Tcp6 => write!(f, "tcp6"),
        }
    }
}

impl FromStr for Protocol {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "tcp4" => Ok(Self::Tcp4),
            "tcp6" => Ok(Self::Tcp6),
            _ => Err(ScanError::UnsupportedProtocol(s.to_string())),
        }
    }
}

/// How the ports of an interval are scheduled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// One task per port, all in flight at once.
    #[default]
    Concurrent,
    /// One port at a time, in increasing order.
    Sequential,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concurrent => write!(f, "concurrent"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Build the range scanner for `mode` around `prober`.
pub fn build_scanner<P>(mode: ScanMode, prober: P, progress: Option<ProgressBar>) -> BoxedRangeScanner
where
    P: Prober + 'static,
{
    match mode {
        ScanMode::Sequential => {
            let scanner = SequentialScanner::new(prober);
            Box::new(match progress {
                Some(pb) => scanner.with_progress(pb),
                None => scanner,
            })
        }
        ScanMode::Concurrent => {
            let scanner = ConcurrentScanner::new(prober);
            Box::new(match progress {
                Some(pb) => scanner.with_progress(pb),
                None => scanner,
            })
        }
    }
}

/// Validate `[bottom, top)` and scan it.
///
/// An inverted interval fails with [`ScanError::InvalidInterval`] before any
/// probe is issued. Individual probe failures never surface here; they are
/// recorded as closed ports.
pub async fn scan_range(
    scanner: &dyn RangeScanner,
    bottom: u32,
    top: u32,
) -> ScanResult<ScanResultSet> {
    let interval = ScanInterval::new(bottom, top)?;
    Ok(scanner.scan(interval).await)
}
