//! Output path handling
//!
//! Derives screenshot filenames from URLs and prepares output directories.

use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::Result;

/// Maximum length for a derived filename stem
const MAX_STEM_LEN: usize = 120;

/// Derive a filesystem-safe filename for a URL, e.g.
/// `https://example.com/pricing` -> `example.com_pricing.png`
pub fn filename_for(url: &Url) -> String {
    let host = url.host_str().unwrap_or("page");
    let path = url.path().trim_matches('/');

    let mut stem = String::with_capacity(host.len() + path.len() + 1);
    stem.push_str(host);
    if !path.is_empty() {
        stem.push('_');
        stem.push_str(path);
    }

    let mut sanitized: String = stem
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    sanitized.truncate(MAX_STEM_LEN);

    format!("{}.png", sanitized)
}

/// Resolve the final output path for a capture.
///
/// An explicit path wins; otherwise the filename is derived from the URL,
/// placed under `dir` when given or the current directory.
pub fn resolve_output(url: &Url, explicit: Option<&Path>, dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let filename = filename_for(url);
    match dir {
        Some(d) => d.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Create the parent directory of an output path if needed
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_for_root() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(filename_for(&url), "example.com.png");
    }

    #[test]
    fn test_filename_for_path() {
        let url = Url::parse("https://example.com/docs/getting-started").unwrap();
        assert_eq!(filename_for(&url), "example.com_docs_getting-started.png");
    }

    #[test]
    fn test_filename_sanitizes_query_chars() {
        let url = Url::parse("https://example.com/a b?q=1").unwrap();
        // query is dropped, space in path is percent-encoded by the parser
        let name = filename_for(&url);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()
            || c == '.'
            || c == '-'
            || c == '_'));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_filename_truncated() {
        let long_path = "a/".repeat(200);
        let url = Url::parse(&format!("https://example.com/{}", long_path)).unwrap();
        let name = filename_for(&url);
        assert!(name.len() <= MAX_STEM_LEN + 4);
    }

    #[test]
    fn test_resolve_output_explicit_wins() {
        let url = Url::parse("https://example.com/").unwrap();
        let path = resolve_output(&url, Some(Path::new("shot.png")), Some(Path::new("out")));
        assert_eq!(path, PathBuf::from("shot.png"));
    }

    #[test]
    fn test_resolve_output_derived_in_dir() {
        let url = Url::parse("https://example.com/").unwrap();
        let path = resolve_output(&url, None, Some(Path::new("out")));
        assert_eq!(path, PathBuf::from("out/example.com.png"));
    }
}
