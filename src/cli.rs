//! Command-line interface definitions for portsweep.
//!
//! Uses `clap` derive macros for declarative argument parsing. Every option
//! is optional and overrides the corresponding value in [`AppSettings`].

use crate::config::AppSettings;
use crate::scanner::{Protocol, ScanMode};
use crate::types::ScanInterval;
use clap::Parser;
use std::path::PathBuf;

/// Probe a range of TCP ports on a single host.
#[derive(Parser, Debug)]
#[command(name = "portsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP port range scanner", long_about = None)]
pub struct Cli {
    /// Host to scan (IP address or hostname)
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Transport protocol: tcp, tcp4 or tcp6
    #[arg(short = 'P', long)]
    pub protocol: Option<Protocol>,

    /// Half-open port interval, e.g. "0-101" scans ports 0 through 100
    #[arg(short = 'r', long, value_name = "BOTTOM-TOP")]
    pub range: Option<ScanInterval>,

    /// Connection timeout per port in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Probe ports all at once or one at a time
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Directory for result files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Don't write a result file
    #[arg(long)]
    pub no_save: bool,

    /// Only list open ports on the console
    #[arg(long)]
    pub open_only: bool,

    /// Path to a settings file
    #[arg(long, value_name = "PATH", env = "PORTSWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store the effective settings (file plus overrides) before scanning
    #[arg(long)]
    pub save_settings: bool,

    /// Show scan progress and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Overlay command-line values on top of loaded settings.
    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(target) = &self.target {
            settings.target = target.clone();
        }
        if let Some(protocol) = self.protocol {
            settings.protocol = protocol;
        }
        if let Some(range) = self.range {
            settings.range = range;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_ms = timeout;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(dir) = &self.output_dir {
            settings.results_dir = dir.clone();
        }
        if self.no_save {
            settings.save_results = false;
        }
        settings
    }
}
