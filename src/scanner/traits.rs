//! Scanner trait abstraction.
//!
//! `Prober` is a single connection attempt; `RangeScanner` drives a prober
//! over a whole interval. Both scan variants implement `RangeScanner`, so
//! callers and tests can swap them freely.

use crate::scanner::ScanMode;
use crate::types::{Port, ScanInterval, ScanResultSet};
use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// A single-port reachability check.
///
/// Implementations absorb every failure (refusal, timeout, unreachable
/// network) into `false`; there is no error channel.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Get the target IP address.
    fn target(&self) -> IpAddr;

    /// Get the per-probe timeout.
    fn timeout(&self) -> Duration;

    /// Attempt one connection; `true` if it was established in time.
    async fn probe(&self, port: Port) -> bool;
}

#[async_trait]
impl<P: Prober + ?Sized> Prober for Arc<P> {
    fn target(&self) -> IpAddr {
        (**self).target()
    }

    fn timeout(&self) -> Duration {
        (**self).timeout()
    }

    async fn probe(&self, port: Port) -> bool {
        (**self).probe(port).await
    }
}

/// Probes every port of an interval and returns the completed result set.
///
/// The interval has already been validated, so a scan cannot fail: it always
/// yields exactly one entry per port.
#[async_trait]
pub trait RangeScanner: Send + Sync {
    fn mode(&self) -> ScanMode;

    async fn scan(&self, interval: ScanInterval) -> ScanResultSet;
}

/// A boxed range scanner for dynamic dispatch.
pub type BoxedRangeScanner = Box<dyn RangeScanner>;
