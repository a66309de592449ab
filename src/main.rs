use anyhow::Context;
use clap::Parser;
use portsweep::cli::Cli;
use portsweep::config::{AppSettings, Paths};
use portsweep::output;
use portsweep::scanner::{build_scanner, ScanMode, TcpProber};
use portsweep::storage::ResultFileWriter;
use portsweep::types::ScanTarget;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Above this many simultaneous sockets the OS file descriptor limit is a
/// real risk; ports that hit it are reported closed.
const WIDE_FAN_OUT: usize = 4096;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    portsweep::logging::init(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => AppSettings::load().context("failed to load settings")?,
    };
    let settings = cli.apply(settings);

    if cli.save_settings {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Paths::new()
                .context("failed to locate settings directory")?
                .settings_file(),
        };
        settings
            .save_to(&path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
        if !cli.quiet {
            output::print_success(&format!("Settings saved to {}", path.display()));
        }
    }

    let target = ScanTarget::resolve(&settings.target, settings.protocol)
        .await
        .context("failed to resolve target")?;
    let interval = settings.range;

    if !cli.quiet {
        output::print_scan_header(&target, settings.protocol, settings.mode, interval);
    }
    if settings.mode == ScanMode::Concurrent && interval.len() > WIDE_FAN_OUT {
        output::print_warning(&format!(
            "opening {} sockets at once; ports beyond the file descriptor limit will show as closed",
            interval.len()
        ));
    }

    let progress = cli.verbose.then(|| output::scan_progress(interval.len()));
    let prober = TcpProber::new(target.ip, Duration::from_millis(settings.timeout_ms));
    let scanner = build_scanner(settings.mode, prober, progress.clone());

    let start = Instant::now();
    let results = scanner.scan(interval).await;
    let elapsed = start.elapsed();

    if let Some(pb) = progress {
        pb.finish_with_message("Scan complete");
    }

    if settings.save_results {
        let writer = ResultFileWriter::new(&settings.results_dir)
            .context("failed to prepare results directory")?;
        let path = writer.write(&results).context("failed to save scan results")?;
        if !cli.quiet {
            output::print_saved(&path);
        }
    } else if !cli.quiet {
        output::print_info("Result file disabled, listing results only");
    }

    output::print_results(target.ip, &results, elapsed, cli.open_only)
        .context("failed to print results")?;

    Ok(())
}
