//! Configuration management for portsweep.
//!
//! Provides XDG-compliant settings storage. Every value the scanner needs
//! (target, protocol, interval, timeout) comes from here or the command line.

mod settings;

pub use settings::{AppSettings, Paths};
