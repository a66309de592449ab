//! Port identifier newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A TCP port number.
///
/// Every `u16` is a valid port here, including 0: the scanner probes whatever
/// interval it is given and leaves it to the OS to refuse the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Lowest port number.
    pub const MIN: u16 = 0;
    /// Highest port number.
    pub const MAX: u16 = 65535;

    #[inline]
    pub const fn new(port: u16) -> Self {
        Self(port)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}
