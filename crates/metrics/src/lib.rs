//! # Comptrack Metrics
//!
//! This crate derives the dashboard's summary panel and chart-ready series
//! from a list of salary entries. It is the analytical heart of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Derivation:** Every function is a pure transform from a
//!   slice of entries to derived values. No I/O, no hidden state, and
//!   calling a function twice on the same input yields identical output.
//!
//! ## Public API
//!
//! - `build_metric_summaries`: The fixed five-metric summary panel.
//! - `calculate_year_over_year`: The entry-over-entry percent-change series.
//! - `normalize_entries_for_chart`: Chart-ready points with band edges.
//! - `format_currency` / `format_percent`: The display formats shared by the
//!   summary panel and the CLI.

// Declare the modules that constitute this crate.
pub mod format;
pub mod report;
pub mod summaries;

// Re-export the key components to create a clean, public-facing API.
pub use format::{format_currency, format_percent};
pub use report::{ChartPoint, MetricSummary, YoyChange};
pub use summaries::{build_metric_summaries, calculate_year_over_year, normalize_entries_for_chart};
