//! Browser module
//!
//! Wraps the headless Chrome CLI for screenshot capture.

mod executor;

pub use executor::ChromeExecutor;
