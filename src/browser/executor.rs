//! Chrome executor - wraps the headless Chrome/Chromium CLI
//!
//! Provides an async interface to Chrome's built-in screenshot mode.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use url::Url;

use crate::core::{CaptureOptions, Result, WebSnapError};

/// Chrome binary names probed from PATH, in order of preference
const CHROME_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Chrome network error markers that indicate a navigation failure
const NAVIGATION_ERROR_MARKERS: &[&str] = &[
    "ERR_NAME_NOT_RESOLVED",
    "ERR_CONNECTION_REFUSED",
    "ERR_CONNECTION_TIMED_OUT",
    "ERR_ADDRESS_UNREACHABLE",
    "ERR_INTERNET_DISCONNECTED",
    "ERR_SSL_PROTOCOL_ERROR",
    "ERR_CERT_",
];

/// Executor for screenshot capture via the Chrome CLI
#[derive(Debug)]
pub struct ChromeExecutor {
    /// Resolved browser binary
    binary: String,
    /// Extra arguments appended to every invocation
    extra_args: Vec<String>,
    /// Print the spawned command line to stderr
    debug: bool,
}

impl ChromeExecutor {
    /// Locate a usable Chrome binary and build an executor.
    ///
    /// An explicit binary override wins; otherwise well-known names are
    /// probed from PATH.
    pub async fn locate(binary: Option<&str>) -> Result<Self> {
        if let Some(path) = binary {
            if Self::probe(path).await {
                return Ok(Self::with_binary(path));
            }
            return Err(WebSnapError::browser(format!(
                "Configured browser binary '{}' is not runnable",
                path
            )));
        }

        for candidate in CHROME_CANDIDATES {
            if Self::probe(candidate).await {
                return Ok(Self::with_binary(*candidate));
            }
        }

        Err(WebSnapError::ChromeNotFound)
    }

    fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            extra_args: Vec::new(),
            debug: false,
        }
    }

    /// Set extra Chrome arguments
    pub fn set_extra_args(&mut self, args: Vec<String>) {
        self.extra_args = args;
    }

    /// Set debug output
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// The resolved binary name or path
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Check if any known Chrome binary is installed
    pub async fn is_available() -> bool {
        for candidate in CHROME_CANDIDATES {
            if Self::probe(candidate).await {
                return true;
            }
        }
        false
    }

    /// Check a binary by running `--version`
    async fn probe(binary: &str) -> bool {
        Command::new(binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Capture a screenshot of `url` into `output`.
    ///
    /// Runs Chrome's headless screenshot mode under the options' time
    /// budget. The caller is responsible for URL validation and for
    /// creating the output directory.
    pub async fn capture(&self, url: &Url, output: &Path, options: &CaptureOptions) -> Result<()> {
        let mut cmd = Command::new(&self.binary);

        let viewport = if options.full_page {
            // Headless Chrome screenshots the window, not the document.
            // Approximate full-page capture with a tall window.
            format!("{},{}", options.viewport.width, options.viewport.height * 4)
        } else {
            options.viewport.as_window_size()
        };

        cmd.arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--hide-scrollbars")
            .arg("--no-first-run")
            .arg(format!("--window-size={}", viewport))
            .arg(format!("--screenshot={}", output.display()));

        if !options.wait.is_zero() {
            cmd.arg(format!(
                "--virtual-time-budget={}",
                options.wait.as_millis()
            ));
        }

        cmd.args(&self.extra_args);
        cmd.arg(url.as_str());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        if self.debug {
            eprintln!("[websnap] running: {} ... {}", self.binary, url);
        }

        let result = tokio::time::timeout(options.timeout, cmd.output()).await;

        let output_data = match result {
            Err(_) => {
                return Err(WebSnapError::timeout(
                    format!("capturing {}", url),
                    options.timeout,
                ));
            }
            Ok(run) => run.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    WebSnapError::ChromeNotFound
                } else {
                    WebSnapError::browser(format!("Failed to run {}: {}", self.binary, e))
                }
            })?,
        };

        let stderr = String::from_utf8_lossy(&output_data.stderr);

        // Chrome reports net:: failures on stderr, sometimes with exit code 0
        if let Some(reason) = Self::navigation_failure(&stderr) {
            return Err(WebSnapError::navigation(format!(
                "{} while loading {}",
                reason, url
            )));
        }

        if !output_data.status.success() {
            return Err(WebSnapError::browser(format!(
                "{} exited with {}: {}",
                self.binary,
                output_data.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    /// Extract a navigation failure marker from Chrome's stderr, if any
    fn navigation_failure(stderr: &str) -> Option<&'static str> {
        NAVIGATION_ERROR_MARKERS
            .iter()
            .find(|marker| stderr.contains(**marker))
            .copied()
    }

    /// Report the browser's version string
    pub async fn version(&self) -> Result<String> {
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            Command::new(&self.binary).arg("--version").output(),
        )
        .await;

        match result {
            Err(_) => Err(WebSnapError::timeout(
                "querying browser version",
                Duration::from_secs(10),
            )),
            Ok(output) => {
                let output = output?;
                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_failure_detection() {
        let stderr = "[1016/120000.000000:ERROR:network] net::ERR_NAME_NOT_RESOLVED";
        assert_eq!(
            ChromeExecutor::navigation_failure(stderr),
            Some("ERR_NAME_NOT_RESOLVED")
        );
        assert_eq!(ChromeExecutor::navigation_failure("all good"), None);
    }

    #[test]
    fn test_executor_binary() {
        let executor = ChromeExecutor::with_binary("chromium");
        assert_eq!(executor.binary(), "chromium");
        assert!(!executor.debug);
    }
}
