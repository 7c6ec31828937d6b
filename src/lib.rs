/*!
 * # Genko - Manuscript character counter for CJK prose
 *
 * A Rust library for counting manuscript characters in Markdown
 * documents written in Japanese and adjacent CJK scripts.
 *
 * ## Features
 *
 * - Strip Markdown/HTML markup while preserving prose content
 * - Count only character elements (kana, ideographs, hangul,
 *   alphanumerics); punctuation, symbols and whitespace are excluded
 * - Split dialogue (bracket-quoted text) from narration
 * - Per-script breakdown with a context heuristic for CJK ideographs
 * - Directory aggregation with per-directory configuration overrides
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `counting`: The character counting pipeline:
 *   - `counting::markup`: Markdown/HTML markup stripping
 *   - `counting::classifier`: Character classification by script
 *   - `counting::dialogue`: Dialogue span extraction
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `status`: Status line rendering
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod counting;
pub mod errors;
pub mod file_utils;
pub mod status;

// Re-export main types for easier usage
pub use app_config::{Config, DirectoryOverride, LogLevel};
pub use app_controller::{Controller, DirectoryCount};
pub use counting::{
    count_chars, count_detailed, count_with_breakdown, CountResult, DetailedCount, Script,
    ScriptBreakdown,
};
pub use errors::{AppError, ConfigError, CountError};
pub use status::{format_count, StatusLine, ThresholdState};
