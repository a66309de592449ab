//! The per-port outcome map produced by a range scan.

use crate::types::Port;
use std::collections::HashMap;

/// Mapping from port to "open" status.
///
/// Keys are unique and unordered. The set is only mutated by the scanner that
/// owns it; callers receive it once every probe has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResultSet {
    ports: HashMap<Port, bool>,
}

impl ScanResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ports: HashMap::with_capacity(capacity),
        }
    }

    /// Record the outcome for a port, replacing any earlier entry.
    pub(crate) fn insert(&mut self, port: Port, open: bool) {
        self.ports.insert(port, open);
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Outcome for a port, or `None` if it was not scanned.
    pub fn get(&self, port: Port) -> Option<bool> {
        self.ports.get(&port).copied()
    }

    /// Iterate in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Port, bool)> + '_ {
        self.ports.iter().map(|(&port, &open)| (port, open))
    }

    /// All entries sorted by port.
    pub fn sorted(&self) -> Vec<(Port, bool)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(port, _)| port);
        entries
    }

    /// Open ports in ascending order.
    pub fn open_ports(&self) -> Vec<Port> {
        self.filtered(true)
    }

    /// Closed ports in ascending order.
    pub fn closed_ports(&self) -> Vec<Port> {
        self.filtered(false)
    }

    pub fn open_count(&self) -> usize {
        self.ports.values().filter(|&&open| open).count()
    }

    pub fn closed_count(&self) -> usize {
        self.len() - self.open_count()
    }

    fn filtered(&self, open: bool) -> Vec<Port> {
        let mut ports: Vec<Port> = self
            .iter()
            .filter(|&(_, o)| o == open)
            .map(|(port, _)| port)
            .collect();
        ports.sort_unstable();
        ports
    }
}

impl FromIterator<(Port, bool)> for ScanResultSet {
    fn from_iter<I: IntoIterator<Item = (Port, bool)>>(iter: I) -> Self {
        Self {
            ports: iter.into_iter().collect(),
        }
    }
}
