//! Shared types used across WebSnap modules
//!
//! Contains capture options, viewport geometry, and capture reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::Config;

/// Viewport geometry for the headless browser window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Format as Chrome's `--window-size` argument value
    pub fn as_window_size(&self) -> String {
        format!("{},{}", self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Options for a single capture
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Where to write the image. When None the path is derived from the URL.
    pub output: Option<PathBuf>,
    /// Browser window size
    pub viewport: Viewport,
    /// Capture the full scrollable page height
    pub full_page: bool,
    /// Settle time after load before capturing
    pub wait: Duration,
    /// Overall time budget for the capture
    pub timeout: Duration,
}

impl CaptureOptions {
    /// Build options from configured defaults
    pub fn from_config(config: &Config) -> Self {
        Self {
            output: None,
            viewport: Viewport::new(config.capture.width, config.capture.height),
            full_page: config.capture.full_page,
            wait: Duration::from_millis(config.capture.wait_ms),
            timeout: config.capture_timeout(),
        }
    }

    /// Set the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set the viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            output: None,
            viewport: Viewport::default(),
            full_page: false,
            wait: Duration::ZERO,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Result of a completed capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureReport {
    /// The URL that was captured
    pub url: String,
    /// Where the image was written
    pub output: PathBuf,
    /// Size of the written image in bytes
    pub bytes: u64,
    /// Wall-clock time the capture took
    pub elapsed: Duration,
}

/// Outcome of one URL within a batch capture
#[derive(Debug)]
pub struct CaptureOutcome {
    /// The URL this outcome belongs to
    pub url: String,
    /// The report on success, or the error message on failure
    pub result: std::result::Result<CaptureReport, String>,
}

impl CaptureOutcome {
    /// Record a successful capture
    pub fn ok(report: CaptureReport) -> Self {
        Self {
            url: report.url.clone(),
            result: Ok(report),
        }
    }

    /// Record a failed capture
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            result: Err(error.into()),
        }
    }

    /// Whether the capture succeeded
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_window_size() {
        let vp = Viewport::new(1920, 1080);
        assert_eq!(vp.as_window_size(), "1920,1080");
    }

    #[test]
    fn test_default_options() {
        let opts = CaptureOptions::default();
        assert_eq!(opts.viewport, Viewport::default());
        assert!(!opts.full_page);
        assert_eq!(opts.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.capture.width = 800;
        config.capture.height = 600;
        config.capture.timeout_ms = 10000;

        let opts = CaptureOptions::from_config(&config);
        assert_eq!(opts.viewport, Viewport::new(800, 600));
        assert_eq!(opts.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_outcome_constructors() {
        let outcome = CaptureOutcome::failed("https://example.com", "boom");
        assert!(!outcome.is_ok());
        assert_eq!(outcome.url, "https://example.com");
    }
}
