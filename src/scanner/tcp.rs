//! TCP connect prober.
//!
//! Completes a full handshake through the operating system's socket API
//! and closes the connection straight away. No data is exchanged.

use crate::scanner::traits::Prober;
use crate::types::Port;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// TCP connect prober for a single host.
///
/// Does not require elevated privileges.
#[derive(Debug, Clone)]
pub struct TcpProber {
    target: IpAddr,
    timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP prober.
    ///
    /// # Arguments
    /// * `target` - Resolved address of the host to probe
    /// * `timeout` - Connection timeout per port
    pub fn new(target: IpAddr, timeout: Duration) -> Self {
        Self { target, timeout }
    }
}

#[async_trait]
impl Prober for TcpProber {
    fn target(&self) -> IpAddr {
        self.target
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn probe(&self, port: Port) -> bool {
        let addr = SocketAddr::new(self.target, port.as_u16());

        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                tracing::trace!(%addr, "connection established");
                true
            }
            Ok(Err(e)) => {
                tracing::trace!(%addr, error = %e, "connection failed");
                false
            }
            Err(_) => {
                tracing::trace!(%addr, timeout_ms = self.timeout.as_millis() as u64, "connection timed out");
                false
            }
        }
    }
}
