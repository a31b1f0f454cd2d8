//! Capture module
//!
//! The [`WebSnap`] client plus the one-shot `screenshot` and
//! `screenshot_multiple` convenience functions.

mod batch;
mod client;
pub mod output;

pub use batch::screenshot_multiple;
pub use client::{screenshot, WebSnap};
