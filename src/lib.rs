//! # portsweep - A Concurrent TCP Port Range Scanner
//!
//! portsweep probes a half-open interval of TCP ports on a single host and
//! classifies each one as open (a connection was established within the
//! timeout) or closed (anything else).
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsweep::scanner::{build_scanner, scan_range, ScanMode, TcpProber};
//! use std::net::IpAddr;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let target: IpAddr = "192.168.1.75".parse().unwrap();
//!     let prober = TcpProber::new(target, Duration::from_secs(1));
//!     let scanner = build_scanner(ScanMode::Concurrent, prober, None);
//!
//!     let results = scan_range(scanner.as_ref(), 0, 101).await.unwrap();
//!     for port in results.open_ports() {
//!         println!("port {} is open", port);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Ports, intervals, result sets and targets
//! - [`scanner`] - The `Prober` and `RangeScanner` traits and their implementations
//! - [`config`] - Settings file and XDG paths
//! - [`storage`] - Timestamped result files
//! - [`output`] - Console reporting
//! - [`error`] - Error types
//! - [`logging`] - `tracing` subscriber setup

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigError, ScanError, StorageError};
pub use scanner::{Prober, Protocol, RangeScanner, ScanMode};
pub use types::{Port, ScanInterval, ScanResultSet, ScanTarget};
