//! Sequential and concurrent range scanners.
//!
//! The concurrent scanner spawns one task per port with no cap on how many
//! are in flight. Every task writes into a single shared result set behind
//! one mutex; the lock is taken after the probe resolves and released right
//! after the insert, so it is never held across a connection attempt.

use crate::scanner::traits::{Prober, RangeScanner};
use crate::scanner::ScanMode;
use crate::types::{Port, ScanInterval, ScanResultSet};
use async_trait::async_trait;
use futures::future::join_all;
use indicatif::ProgressBar;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Probes one port at a time in increasing order.
pub struct SequentialScanner<P> {
    prober: P,
    progress: Option<ProgressBar>,
}

impl<P: Prober> SequentialScanner<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober,
            progress: None,
        }
    }

    /// Tick `progress` once per completed probe.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }
}

#[async_trait]
impl<P: Prober> RangeScanner for SequentialScanner<P> {
    fn mode(&self) -> ScanMode {
        ScanMode::Sequential
    }

    async fn scan(&self, interval: ScanInterval) -> ScanResultSet {
        let start = Instant::now();
        tracing::debug!(
            target_ip = %self.prober.target(),
            %interval,
            timeout_ms = self.prober.timeout().as_millis() as u64,
            "starting sequential scan"
        );

        let mut results = ScanResultSet::with_capacity(interval.len());
        for port in interval.iter() {
            let open = self.prober.probe(port).await;
            results.insert(port, open);
            tick(self.progress.as_ref(), port, open);
        }

        tracing::debug!(
            ports = results.len(),
            open = results.open_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sequential scan complete"
        );
        results
    }
}

/// Probes every port of the interval at once, one task per port.
pub struct ConcurrentScanner<P> {
    prober: Arc<P>,
    progress: Option<ProgressBar>,
}

impl<P: Prober + 'static> ConcurrentScanner<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
            progress: None,
        }
    }

    /// Tick `progress` once per completed probe.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }
}

#[async_trait]
impl<P: Prober + 'static> RangeScanner for ConcurrentScanner<P> {
    fn mode(&self) -> ScanMode {
        ScanMode::Concurrent
    }

    async fn scan(&self, interval: ScanInterval) -> ScanResultSet {
        let start = Instant::now();
        tracing::debug!(
            target_ip = %self.prober.target(),
            %interval,
            tasks = interval.len(),
            timeout_ms = self.prober.timeout().as_millis() as u64,
            "starting concurrent scan"
        );

        let results = Arc::new(Mutex::new(ScanResultSet::with_capacity(interval.len())));

        let (ports, handles): (Vec<Port>, Vec<_>) = interval
            .iter()
            .map(|port| {
                let prober = Arc::clone(&self.prober);
                let results = Arc::clone(&results);
                let progress = self.progress.clone();

                let handle = tokio::spawn(async move {
                    let open = prober.probe(port).await;
                    lock(&results).insert(port, open);
                    tick(progress.as_ref(), port, open);
                });
                (port, handle)
            })
            .unzip();

        // Barrier: nothing is returned until every task has reported.
        for (port, outcome) in ports.into_iter().zip(join_all(handles).await) {
            if let Err(e) = outcome {
                tracing::error!(%port, error = %e, "probe task failed, recording port as closed");
                lock(&results).insert(port, false);
            }
        }

        let results = match Arc::try_unwrap(results) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => lock(&shared).clone(),
        };

        tracing::debug!(
            ports = results.len(),
            open = results.open_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "concurrent scan complete"
        );
        results
    }
}

/// Acquire the result set lock, recovering from a poisoned mutex.
///
/// A panicking task cannot leave the map half-written: `insert` is a single
/// `HashMap` operation.
fn lock(results: &Mutex<ScanResultSet>) -> MutexGuard<'_, ScanResultSet> {
    results.lock().unwrap_or_else(PoisonError::into_inner)
}

fn tick(progress: Option<&ProgressBar>, port: Port, open: bool) {
    if let Some(pb) = progress {
        pb.inc(1);
        if open {
            pb.set_message(format!("Found open port: {}", port));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::build_scanner;
    use std::collections::HashSet;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Reports a fixed set of ports as open and counts its calls.
    struct MockProber {
        open: HashSet<u16>,
        calls: Arc<AtomicUsize>,
        jitter: bool,
    }

    impl MockProber {
        fn new(open: impl IntoIterator<Item = u16>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let prober = Self {
                open: open.into_iter().collect(),
                calls: Arc::clone(&calls),
                jitter: false,
            };
            (prober, calls)
        }

        /// Delay each probe a little so tasks finish out of port order.
        fn with_jitter(mut self) -> Self {
            self.jitter = true;
            self
        }
    }

    #[async_trait]
    impl Prober for MockProber {
        fn target(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }

        async fn probe(&self, port: Port) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.jitter {
                let delay = u64::from(7 - port.as_u16() % 7);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            self.open.contains(&port.as_u16())
        }
    }

    struct PanickingProber;

    #[async_trait]
    impl Prober for PanickingProber {
        fn target(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }

        async fn probe(&self, port: Port) -> bool {
            if port.as_u16() == 3 {
                panic!("probe blew up");
            }
            true
        }
    }

    fn interval(bottom: u32, top: u32) -> ScanInterval {
        ScanInterval::new(bottom, top).unwrap()
    }

    fn assert_complete(results: &ScanResultSet, interval: ScanInterval) {
        assert_eq!(results.len(), interval.len());
        for port in interval.iter() {
            assert!(results.get(port).is_some(), "port {} missing", port);
        }
    }

    #[tokio::test]
    async fn test_sequential_completeness() {
        let (prober, calls) = MockProber::new([]);
        let scanner = SequentialScanner::new(prober);
        let range = interval(0, 101);

        let results = scanner.scan(range).await;

        assert_complete(&results, range);
        assert_eq!(calls.load(Ordering::SeqCst), 101);
    }

    #[tokio::test]
    async fn test_concurrent_completeness() {
        let (prober, calls) = MockProber::new([]);
        let scanner = ConcurrentScanner::new(prober.with_jitter());
        let range = interval(0, 101);

        let results = scanner.scan(range).await;

        assert_complete(&results, range);
        assert_eq!(calls.load(Ordering::SeqCst), 101);
    }

    #[tokio::test]
    async fn test_classification() {
        let open = [22u16, 80, 443];
        let range = interval(0, 500);

        let (prober, _) = MockProber::new(open);
        let sequential = SequentialScanner::new(prober).scan(range).await;
        let (prober, _) = MockProber::new(open);
        let concurrent = ConcurrentScanner::new(prober.with_jitter()).scan(range).await;

        for results in [&sequential, &concurrent] {
            let found: Vec<u16> = results.open_ports().iter().map(|p| p.as_u16()).collect();
            assert_eq!(found, open.to_vec());
            assert_eq!(results.closed_count(), 497);
        }
    }

    #[tokio::test]
    async fn test_sequential_concurrent_equivalence() {
        let open = [1u16, 2, 3, 50, 99];
        let range = interval(0, 100);

        let (prober, _) = MockProber::new(open);
        let sequential = SequentialScanner::new(prober).scan(range).await;
        let (prober, _) = MockProber::new(open);
        let concurrent = ConcurrentScanner::new(prober.with_jitter()).scan(range).await;

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_repeated_scans_are_identical() {
        let (prober, calls) = MockProber::new([10u16, 20]);
        let scanner = ConcurrentScanner::new(prober.with_jitter());
        let range = interval(0, 64);

        let first = scanner.scan(range).await;
        let second = scanner.scan(range).await;

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 128);
    }

    #[tokio::test]
    async fn test_empty_interval() {
        for mode in [ScanMode::Sequential, ScanMode::Concurrent] {
            let (prober, calls) = MockProber::new([5u16]);
            let scanner = build_scanner(mode, prober, None);

            let results = scanner.scan(interval(5, 5)).await;

            assert!(results.is_empty(), "{} scan returned entries", mode);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_single_port_zero() {
        for mode in [ScanMode::Sequential, ScanMode::Concurrent] {
            let (prober, calls) = MockProber::new([]);
            let scanner = build_scanner(mode, prober, None);

            let results = scanner.scan(interval(0, 1)).await;

            assert_eq!(results.len(), 1, "{} scan", mode);
            assert_eq!(results.get(Port::new(0)), Some(false));
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_large_interval_multi_thread() {
        let open: Vec<u16> = (0..1000).filter(|p| p % 3 == 0).collect();
        let (prober, calls) = MockProber::new(open.clone());
        let scanner = ConcurrentScanner::new(prober.with_jitter());
        let range = interval(0, 1000);

        let results = scanner.scan(range).await;

        assert_complete(&results, range);
        assert_eq!(calls.load(Ordering::SeqCst), 1000);
        assert_eq!(results.open_count(), open.len());
    }

    #[tokio::test]
    async fn test_panicking_probe_is_recorded_closed() {
        let scanner = ConcurrentScanner::new(PanickingProber);
        let range = interval(0, 6);

        let results = scanner.scan(range).await;

        assert_complete(&results, range);
        assert_eq!(results.get(Port::new(3)), Some(false));
        assert_eq!(results.open_count(), 5);
    }

    #[tokio::test]
    async fn test_progress_ticks_per_port() {
        let (prober, _) = MockProber::new([7u16]);
        let progress = ProgressBar::hidden();
        let scanner = ConcurrentScanner::new(prober).with_progress(progress.clone());

        scanner.scan(interval(0, 25)).await;

        assert_eq!(progress.position(), 25);
    }

    #[test]
    fn test_scanner_modes() {
        let (prober, _) = MockProber::new([]);
        assert_eq!(SequentialScanner::new(prober).mode(), ScanMode::Sequential);
        let (prober, _) = MockProber::new([]);
        assert_eq!(ConcurrentScanner::new(prober).mode(), ScanMode::Concurrent);
    }
}
