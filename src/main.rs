//! WebSnap - Website Screenshot Tool
//!
//! Main entry point for the CLI application.

use anyhow::bail;
use clap::Parser;
use std::path::Path;

use websnap::cli::Args;
use websnap::core::CaptureOptions;
use websnap::{Config, WebSnap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::default_config_toml());
        return Ok(());
    }

    // Build configuration
    let mut config = Config::load();
    args.apply_to(&mut config);

    let client = WebSnap::with_config(config).await?;

    if client.config().capture.debug {
        eprintln!(
            "[websnap] using browser: {}",
            client.browser_version().await?
        );
    }

    let mut options = CaptureOptions::from_config(client.config());

    // Single capture mode
    if args.urls.len() == 1 {
        if let Some(ref output) = args.output {
            options.output = Some(output.clone());
        } else if let Some(ref dir) = args.dir {
            // Treat -d like a one-entry batch target
            let url = WebSnap::validate_url(&args.urls[0])?;
            options.output = Some(dir.join(websnap::capture::output::filename_for(&url)));
        }

        let report = client.capture(&args.urls[0], &options).await?;
        println!(
            "{} -> {} ({} bytes, {}ms)",
            report.url,
            report.output.display(),
            report.bytes,
            report.elapsed.as_millis()
        );
        return Ok(());
    }

    // Batch mode
    if args.output.is_some() {
        bail!("-o/--output applies to a single URL; use -d/--dir for batches");
    }

    let dir = args.dir.clone().unwrap_or_else(|| Path::new(".").to_path_buf());
    let outcomes = client.capture_all(&args.urls, &dir, &options).await?;

    let mut failures = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => println!(
                "{} -> {} ({} bytes)",
                report.url,
                report.output.display(),
                report.bytes
            ),
            Err(reason) => {
                failures += 1;
                eprintln!("{}: FAILED: {}", outcome.url, reason);
            }
        }
    }

    if failures > 0 {
        bail!("{}/{} captures failed", failures, outcomes.len());
    }

    Ok(())
}
