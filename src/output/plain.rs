//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::scanner::{Protocol, ScanMode};
use crate::storage::format_line;
use crate::types::{ScanInterval, ScanResultSet, ScanTarget};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

/// Print the closed and open port listings followed by a summary.
pub fn print_results(
    ip: IpAddr,
    results: &ScanResultSet,
    elapsed: Duration,
    open_only: bool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !open_only {
        write_listing(&mut out, ip, results, false)?;
    }
    write_listing(&mut out, ip, results, true)?;
    write_summary(&mut out, results, elapsed)?;
    out.flush()
}

/// Write every open (or every closed) port, in ascending order.
pub fn write_listing<W: Write>(
    out: &mut W,
    ip: IpAddr,
    results: &ScanResultSet,
    open: bool,
) -> io::Result<()> {
    let (label, ports) = if open {
        ("open", results.open_ports())
    } else {
        ("close", results.closed_ports())
    };

    writeln!(
        out,
        "{}",
        style(format!("The ip: {} has the following {} ports:", ip, label)).bold()
    )?;
    for port in ports {
        writeln!(out, "{}", format_line(port, open))?;
    }
    Ok(())
}

/// Write the one-line open/closed tally.
pub fn write_summary<W: Write>(
    out: &mut W,
    results: &ScanResultSet,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} {} ports scanned in {:.2}s: {} open, {} closed",
        style("Statistics:").bold(),
        results.len(),
        elapsed.as_secs_f64(),
        style(results.open_count()).green().bold(),
        style(results.closed_count()).red()
    )
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(
    target: &ScanTarget,
    protocol: Protocol,
    mode: ScanMode,
    interval: ScanInterval,
) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portsweep").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(target).white().bold()
    );
    println!(
        "{} Protocol: {}, mode: {}",
        style("•").dim(),
        style(protocol).yellow(),
        style(mode).yellow()
    );
    println!(
        "{} Scanning {} ports in {}...",
        style("•").dim(),
        style(interval.len()).white().bold(),
        interval
    );
    println!();
}

/// Progress bar ticked once per completed probe.
pub fn scan_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Announce where the result file was written.
pub fn print_saved(path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    print_success(&format!("Scan results saved to file: {}", name));
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;
    use std::net::Ipv4Addr;

    fn sample() -> ScanResultSet {
        [
            (Port::new(22), true),
            (Port::new(21), false),
            (Port::new(80), true),
            (Port::new(23), false),
        ]
        .into_iter()
        .collect()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_open_listing() {
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 75));
        let text = render(|out| write_listing(out, ip, &sample(), true));

        assert_eq!(
            text,
            "The ip: 192.168.1.75 has the following open ports:\n\
             port: 22, open: true\n\
             port: 80, open: true\n"
        );
    }

    #[test]
    fn test_closed_listing() {
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        let text = render(|out| write_listing(out, ip, &sample(), false));

        assert!(text.starts_with("The ip: 127.0.0.1 has the following close ports:\n"));
        assert!(text.contains("port: 21, open: false\nport: 23, open: false\n"));
        assert!(!text.contains("open: true"));
    }

    #[test]
    fn test_summary() {
        let text = render(|out| write_summary(out, &sample(), Duration::from_millis(1500)));
        assert!(text.contains("4 ports scanned in 1.50s: 2 open, 2 closed"));
    }
}
