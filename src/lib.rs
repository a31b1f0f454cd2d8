//! WebSnap - Website Screenshot Tool
//!
//! Captures screenshots of web pages by driving a system-installed
//! Chrome/Chromium in headless mode.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: Headless Chrome process wrapper
//! - **Capture**: The `WebSnap` client, single and batch capture
//! - **CLI**: Command-line interface
//!
//! # Usage
//!
//! ```rust,no_run
//! use websnap::screenshot;
//!
//! #[tokio::main]
//! async fn main() {
//!     let report = screenshot("https://example.com", "example.png")
//!         .await
//!         .unwrap();
//!     println!("wrote {} bytes", report.bytes);
//! }
//! ```

pub mod browser;
pub mod capture;
pub mod cli;
pub mod core;

// Re-export commonly used items
pub use capture::{screenshot, screenshot_multiple, WebSnap};
pub use core::{Config, Result, WebSnapError};
