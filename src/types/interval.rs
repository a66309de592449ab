//! Half-open port intervals.
//!
//! `ScanInterval` describes `[bottom, top)`. The upper bound is a `u32` so
//! the interval `[65535, 65536)` can still reach the last port.

use crate::error::{ScanError, ScanResult};
use crate::types::Port;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated half-open interval of ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct ScanInterval {
    bottom: u32,
    top: u32,
}

impl ScanInterval {
    /// One past the highest port number.
    pub const END: u32 = Port::MAX as u32 + 1;

    /// The well-known ports, `[0, 1024)`.
    pub const WELL_KNOWN: Self = Self { bottom: 0, top: 1024 };

    /// Build an interval, failing if `bottom > top` or `top` exceeds 65536.
    pub fn new(bottom: u32, top: u32) -> ScanResult<Self> {
        if bottom > top {
            return Err(ScanError::InvalidInterval { bottom, top });
        }
        if top > Self::END {
            return Err(ScanError::IntervalOutOfRange(top));
        }
        Ok(Self { bottom, top })
    }

    pub const fn bottom(&self) -> u32 {
        self.bottom
    }

    pub const fn top(&self) -> u32 {
        self.top
    }

    /// Number of ports in the interval.
    pub const fn len(&self) -> usize {
        (self.top - self.bottom) as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bottom == self.top
    }

    /// Iterate over the ports in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        // top <= 65536, so every value below it fits in a u16
        (self.bottom..self.top).map(|p| Port::new(p as u16))
    }
}

impl fmt::Display for ScanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.bottom, self.top)
    }
}

/// Parses `"<bottom>-<top>"`, e.g. `"0-101"` for ports 0 through 100.
impl FromStr for ScanInterval {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (bottom, top) = s
            .split_once('-')
            .ok_or_else(|| ScanError::InvalidIntervalFormat(s.to_string()))?;

        let bottom: u32 = bottom
            .trim()
            .parse()
            .map_err(|_| ScanError::InvalidIntervalFormat(s.to_string()))?;
        let top: u32 = top
            .trim()
            .parse()
            .map_err(|_| ScanError::InvalidIntervalFormat(s.to_string()))?;

        Self::new(bottom, top)
    }
}

#[derive(Serialize, Deserialize)]
struct RawInterval(String);

impl TryFrom<RawInterval> for ScanInterval {
    type Error = ScanError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        raw.0.parse()
    }
}

impl From<ScanInterval> for RawInterval {
    fn from(interval: ScanInterval) -> Self {
        RawInterval(format!("{}-{}", interval.bottom, interval.top))
    }
}
