use std::path::Path;

use anyhow::Result;
use log::{debug, error};
use serde::Serialize;

use crate::app_config::{Config, DirectoryOverride};
use crate::counting::{self, CountResult, DetailedCount, ScriptBreakdown};
use crate::file_utils::FileManager;
use crate::status::StatusLine;

// @module: Application controller for manuscript counting

/// Aggregate count over the manuscripts of a directory.
///
/// Field-wise sums of the per-file results; summation is associative
/// and commutative, so the enumeration order never affects the totals.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DirectoryCount {
    /// Summed total/dialogue/narration counts
    #[serde(flatten)]
    pub counts: CountResult,

    /// Summed per-script breakdown
    pub scripts: ScriptBreakdown,

    /// Number of manuscripts counted
    pub files: usize,

    /// Number of manuscripts skipped because they could not be read
    pub skipped: usize,
}

/// Main application controller for manuscript counting
///
/// Owned by the caller and constructed explicitly; the controller keeps
/// no global state and the counting functions it calls are pure.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a controller with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Controller { config }
    }

    /// The controller's global configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the configuration that applies to one manuscript,
    /// with the directory override file taking precedence over the
    /// global settings.
    pub fn effective_config_for<P: AsRef<Path>>(&self, manuscript_path: P) -> Config {
        match DirectoryOverride::load_for(manuscript_path.as_ref()) {
            Some(overrides) => {
                debug!(
                    "Applying directory override for {:?}",
                    manuscript_path.as_ref()
                );
                self.config.with_directory_override(&overrides)
            }
            None => self.config.clone(),
        }
    }

    /// Count one manuscript file, with dialogue split and per-script
    /// breakdown.
    pub fn count_file<P: AsRef<Path>>(&self, path: P) -> Result<DetailedCount> {
        let content = FileManager::read_to_string(path)?;
        Ok(counting::count_with_breakdown(&content))
    }

    /// Count every manuscript under a directory and sum the results.
    ///
    /// Failures are confined to this boundary: an unreadable file is
    /// logged and skipped, a failed enumeration yields a zero
    /// aggregate. The caller never sees an error.
    pub fn count_directory<P: AsRef<Path>>(&self, dir: P) -> DirectoryCount {
        let files = match FileManager::find_manuscript_files(dir.as_ref()) {
            Ok(files) => files,
            Err(e) => {
                error!("Failed to enumerate manuscripts in {:?}: {}", dir.as_ref(), e);
                return DirectoryCount::default();
            }
        };

        let mut aggregate = DirectoryCount::default();

        for file in files {
            match self.count_file(&file) {
                Ok(detail) => {
                    aggregate.counts += detail.counts;
                    aggregate.scripts += detail.scripts;
                    aggregate.files += 1;
                }
                Err(e) => {
                    error!("Skipping unreadable manuscript {:?}: {}", file, e);
                    aggregate.skipped += 1;
                }
            }
        }

        aggregate
    }

    /// Total character count of all manuscripts sharing a directory
    /// with the given file, the file itself included.
    ///
    /// Mirrors `count_directory`'s error boundary: any failure is
    /// logged and contributes zero.
    pub fn sibling_total<P: AsRef<Path>>(&self, path: P) -> usize {
        let files = match FileManager::sibling_manuscript_files(path.as_ref()) {
            Ok(files) => files,
            Err(e) => {
                error!("Failed to enumerate sibling manuscripts: {}", e);
                return 0;
            }
        };

        let mut total = 0;
        for file in files {
            match FileManager::read_to_string(&file) {
                Ok(content) => total += counting::count_chars(&content),
                Err(e) => error!("Skipping unreadable manuscript {:?}: {}", file, e),
            }
        }

        total
    }

    /// Render the status line for a count, honoring the configuration's
    /// visibility setting.
    pub fn render_status_line(
        &self,
        config: &Config,
        current: usize,
        directory_total: usize,
    ) -> Option<String> {
        if !config.show_in_status_bar {
            return None;
        }

        Some(StatusLine::render(
            current,
            directory_total,
            config.target_words,
        ))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
