//! The WebSnap client
//!
//! Owns a resolved browser executor and turns URLs into screenshot files.

use std::path::Path;
use std::time::Instant;
use url::Url;

use crate::browser::ChromeExecutor;
use crate::capture::output::{ensure_parent_dir, resolve_output};
use crate::core::{CaptureOptions, CaptureReport, Config, Result, WebSnapError};

/// Website screenshot client
#[derive(Debug)]
pub struct WebSnap {
    config: Config,
    executor: ChromeExecutor,
    http: reqwest::Client,
}

impl WebSnap {
    /// Create a client with default configuration
    pub async fn new() -> Result<Self> {
        Self::with_config(Config::load()).await
    }

    /// Create a client with custom configuration.
    ///
    /// Fails with [`WebSnapError::ChromeNotFound`] when no browser binary
    /// can be located.
    pub async fn with_config(config: Config) -> Result<Self> {
        let mut executor = ChromeExecutor::locate(config.browser.binary.as_deref()).await?;
        executor.set_extra_args(config.browser.extra_args.clone());
        executor.set_debug(config.capture.debug);

        let http = reqwest::Client::builder()
            .timeout(config.capture_timeout())
            .build()?;

        Ok(Self {
            config,
            executor,
            http,
        })
    }

    /// The crate version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved browser binary
    pub fn browser_binary(&self) -> &str {
        self.executor.binary()
    }

    /// Report the underlying browser's version string
    pub async fn browser_version(&self) -> Result<String> {
        self.executor.version().await
    }

    /// Parse and validate a target URL
    pub fn validate_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw)
            .map_err(|e| WebSnapError::invalid_url(raw, e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(WebSnapError::invalid_url(
                raw,
                format!("unsupported scheme '{}'", scheme),
            )),
        }
    }

    /// Capture a screenshot of `url` with the given options
    pub async fn capture(&self, url: &str, options: &CaptureOptions) -> Result<CaptureReport> {
        let parsed = Self::validate_url(url)?;
        let output = resolve_output(&parsed, options.output.as_deref(), None);
        self.capture_to(&parsed, &output, options).await
    }

    /// Capture a screenshot into an already-resolved output path
    pub(crate) async fn capture_to(
        &self,
        url: &Url,
        output: &Path,
        options: &CaptureOptions,
    ) -> Result<CaptureReport> {
        ensure_parent_dir(output)?;

        let start = Instant::now();

        if self.config.browser.preflight {
            self.preflight(url).await?;
        }

        self.executor.capture(url, output, options).await?;

        let metadata = std::fs::metadata(output).map_err(|_| {
            WebSnapError::capture(format!("Browser produced no output file for {}", url))
        })?;

        if metadata.len() == 0 {
            return Err(WebSnapError::capture(format!(
                "Browser produced an empty screenshot for {}",
                url
            )));
        }

        if self.config.capture.debug {
            eprintln!(
                "[websnap] captured {} -> {} ({} bytes)",
                url,
                output.display(),
                metadata.len()
            );
        }

        Ok(CaptureReport {
            url: url.to_string(),
            output: output.to_path_buf(),
            bytes: metadata.len(),
            elapsed: start.elapsed(),
        })
    }

    /// Pre-flight reachability check before the browser is launched.
    ///
    /// Any HTTP response counts as reachable; error pages can still be
    /// screenshotted. Only connection-level failures are reported.
    async fn preflight(&self, url: &Url) -> Result<()> {
        match self.http.head(url.as_str()).send().await {
            Ok(_) => Ok(()),
            Err(e) if e.is_timeout() => Err(WebSnapError::timeout(
                format!("pre-flight check for {}", url),
                self.config.capture_timeout(),
            )),
            Err(e) => Err(WebSnapError::navigation(format!(
                "{} is unreachable: {}",
                url, e
            ))),
        }
    }
}

/// Capture a single screenshot with default options.
///
/// Convenience wrapper around [`WebSnap::capture`] for one-off use.
pub async fn screenshot(url: &str, output: impl Into<std::path::PathBuf>) -> Result<CaptureReport> {
    let client = WebSnap::new().await?;
    let options = CaptureOptions::from_config(client.config()).with_output(output);
    client.capture(url, &options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http() {
        assert!(WebSnap::validate_url("http://example.com").is_ok());
        assert!(WebSnap::validate_url("https://example.com/a/b?q=1").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        let err = WebSnap::validate_url("not a url").unwrap_err();
        assert!(matches!(err, WebSnapError::InvalidUrl { .. }));
    }

    #[test]
    fn test_validate_url_rejects_file_scheme() {
        let err = WebSnap::validate_url("file:///etc/passwd").unwrap_err();
        match err {
            WebSnapError::InvalidUrl { reason, .. } => {
                assert!(reason.contains("unsupported scheme"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(WebSnap::version(), env!("CARGO_PKG_VERSION"));
    }
}
