use crate::app_config::Config;

// @module: Status line rendering for count results

/// Format a count with ASCII thousands separators.
///
/// Locale-aware grouping is out of scope; groups of three digits with
/// commas match what the status line needs.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// @struct: Status line renderer
pub struct StatusLine;

impl StatusLine {
    /// Render the one-line count summary.
    ///
    /// Layout: current file, then the directory total when it differs,
    /// then target and completion percentage when a target is set:
    /// `1,234字 | 5,678字 / 10,000字 (57%)`. The percentage is based on
    /// the directory total when one is present, else on the current
    /// file.
    pub fn render(current: usize, directory_total: usize, target: usize) -> String {
        let mut line = format!("{}字", format_count(current));

        if directory_total > 0 && directory_total != current {
            line.push_str(&format!(" | {}字", format_count(directory_total)));
        }

        if target > 0 {
            let basis = if directory_total > 0 {
                directory_total
            } else {
                current
            };
            let percentage = (basis * 100 + target / 2) / target;
            line.push_str(&format!(" / {}字 ({}%)", format_count(target), percentage));
        }

        line
    }
}

/// Progress state of a count against the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdState {
    /// No thresholds configured
    Off,
    /// Count at or below the minimum
    BelowMinimum,
    /// Between minimum and target
    InProgress,
    /// Count at or above the target
    TargetReached,
}

impl ThresholdState {
    /// Evaluate a count against min/target thresholds.
    pub fn evaluate(count: usize, min_words: Option<usize>, target_words: usize) -> Self {
        match min_words {
            Some(min) if min > 0 && target_words > 0 => {
                if count <= min {
                    ThresholdState::BelowMinimum
                } else if count >= target_words {
                    ThresholdState::TargetReached
                } else {
                    ThresholdState::InProgress
                }
            }
            _ if target_words > 0 => {
                if count >= target_words {
                    ThresholdState::TargetReached
                } else {
                    ThresholdState::InProgress
                }
            }
            _ => ThresholdState::Off,
        }
    }

    /// Evaluate using the thresholds from a configuration.
    pub fn from_config(count: usize, config: &Config) -> Self {
        Self::evaluate(count, config.min_words, config.target_words)
    }
}
