//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::core::Config;

/// WebSnap - Website Screenshot Tool
#[derive(Parser, Debug)]
#[command(name = "websnap")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URLs to capture. One URL captures a single screenshot; several run
    /// as a batch.
    #[arg(required_unless_present = "print_config")]
    pub urls: Vec<String>,

    /// Output file for a single capture
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output directory for batch captures (default: current directory)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Capture the full page height instead of the viewport
    #[arg(long)]
    pub full_page: bool,

    /// Time budget per capture in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Settle time after load before capturing, in milliseconds
    #[arg(long)]
    pub wait_ms: Option<u64>,

    /// Maximum captures in flight during a batch
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Path to a Chrome/Chromium binary
    #[arg(long)]
    pub chrome: Option<String>,

    /// Check URL reachability over HTTP before launching the browser
    #[arg(long)]
    pub preflight: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.capture.width = width;
        }
        if let Some(height) = self.height {
            config.capture.height = height;
        }
        if self.full_page {
            config.capture.full_page = true;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.capture.timeout_ms = timeout_ms;
        }
        if let Some(wait_ms) = self.wait_ms {
            config.capture.wait_ms = wait_ms;
        }
        if let Some(concurrency) = self.concurrency {
            config.batch.concurrency = concurrency;
        }
        if let Some(ref chrome) = self.chrome {
            config.browser.binary = Some(chrome.clone());
        }
        if self.preflight {
            config.browser.preflight = true;
        }
        if self.debug {
            config.capture.debug = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_applied() {
        let args = Args::parse_from([
            "websnap",
            "https://example.com",
            "--width",
            "1920",
            "--height",
            "1080",
            "--full-page",
            "--timeout-ms",
            "5000",
        ]);

        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.capture.width, 1920);
        assert_eq!(config.capture.height, 1080);
        assert!(config.capture.full_page);
        assert_eq!(config.capture.timeout_ms, 5000);
    }

    #[test]
    fn test_multiple_urls_parse() {
        let args = Args::parse_from(["websnap", "https://a.com", "https://b.com", "-d", "shots"]);
        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.dir, Some(PathBuf::from("shots")));
    }

    #[test]
    fn test_print_config_needs_no_urls() {
        let args = Args::parse_from(["websnap", "--print-config"]);
        assert!(args.print_config);
        assert!(args.urls.is_empty());
    }
}
