//! Markdown conversion tests
//!
//! End-to-end Markdown → block forest conversions, plus properties that must hold for any input.

mod import;
mod properties;
