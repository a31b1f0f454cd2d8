//! Batch capture
//!
//! Bounded-concurrency screenshotting of many URLs into one directory.

use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

use crate::capture::client::WebSnap;
use crate::capture::output::resolve_output;
use crate::core::{CaptureOptions, CaptureOutcome, Result, WebSnapError};

impl WebSnap {
    /// Capture screenshots for every URL in `urls`, writing into `dir`.
    ///
    /// Captures run concurrently up to the configured batch limit. With
    /// `continue_on_error` set (the default), individual failures are
    /// recorded in their outcome and the batch keeps going; otherwise the
    /// first failure fails the whole batch. Outcomes are returned in input
    /// order.
    pub async fn capture_all(
        &self,
        urls: &[String],
        dir: &Path,
        options: &CaptureOptions,
    ) -> Result<Vec<CaptureOutcome>> {
        std::fs::create_dir_all(dir)?;

        let concurrency = self.config().batch.concurrency.max(1);

        let mut outcomes: Vec<(usize, CaptureOutcome)> = stream::iter(urls.iter().enumerate())
            .map(|(index, url)| async move {
                (index, self.capture_one_of_batch(url, dir, options).await)
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        outcomes.sort_by_key(|(index, _)| *index);
        let outcomes: Vec<CaptureOutcome> =
            outcomes.into_iter().map(|(_, outcome)| outcome).collect();

        if !self.config().batch.continue_on_error {
            if let Some(failed) = outcomes.iter().find(|o| !o.is_ok()) {
                let reason = failed
                    .result
                    .as_ref()
                    .err()
                    .cloned()
                    .unwrap_or_default();
                return Err(WebSnapError::capture(format!(
                    "Batch aborted, {} failed: {}",
                    failed.url, reason
                )));
            }
        }

        Ok(outcomes)
    }

    async fn capture_one_of_batch(
        &self,
        url: &str,
        dir: &Path,
        options: &CaptureOptions,
    ) -> CaptureOutcome {
        let parsed = match Self::validate_url(url) {
            Ok(parsed) => parsed,
            Err(e) => return CaptureOutcome::failed(url, e.to_string()),
        };

        let output = resolve_output(&parsed, None, Some(dir));

        match self.capture_to(&parsed, &output, options).await {
            Ok(report) => CaptureOutcome::ok(report),
            Err(e) => CaptureOutcome::failed(url, e.to_string()),
        }
    }
}

/// Capture screenshots for several URLs with default options.
///
/// Convenience wrapper around [`WebSnap::capture_all`]; images land in
/// `dir` with filenames derived from each URL.
pub async fn screenshot_multiple(
    urls: &[String],
    dir: impl Into<PathBuf>,
) -> Result<Vec<CaptureOutcome>> {
    let client = WebSnap::new().await?;
    let options = CaptureOptions::from_config(client.config());
    client.capture_all(urls, &dir.into(), &options).await
}
