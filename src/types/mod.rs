//! Core type definitions using newtype patterns for type safety.
//!
//! These types keep raw integers and strings out of the scanner API: a
//! `ScanInterval` can only exist once its bounds have been validated.

mod interval;
mod port;
mod results;
mod target;

pub use interval::ScanInterval;
pub use port::Port;
pub use results::ScanResultSet;
pub use target::{ScanTarget, TargetError};
