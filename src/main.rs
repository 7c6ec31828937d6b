// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;

use crate::app_config::{Config, LogLevel};
use crate::counting::{DetailedCount, ScriptBreakdown};
use crate::status::{format_count, ThresholdState};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod counting;
mod errors;
mod file_utils;
mod status;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Output format for count results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count manuscript characters in a file or directory (default command)
    Count(CountArgs),

    /// Generate shell completions for genko
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CountArgs {
    /// Input manuscript file or directory to count
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Show the dialogue/narration split
    #[arg(short, long)]
    detailed: bool,

    /// Show the per-script character breakdown
    #[arg(short, long)]
    breakdown: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Target character count, overrides the configured value
    #[arg(short, long)]
    target: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Genko - Manuscript character counter for CJK prose
///
/// Counts manuscript characters in Markdown files written in Japanese
/// and adjacent CJK scripts, splitting dialogue from narration and
/// ignoring markup noise.
#[derive(Parser, Debug)]
#[command(name = "genko")]
#[command(author = "Genko Team")]
#[command(version = "1.0.0")]
#[command(about = "Manuscript character counter for CJK Markdown prose")]
#[command(long_about = "Genko counts manuscript characters in Markdown files, excluding markup,
punctuation, symbols and whitespace, and splits dialogue (text in 「」/『』
brackets or CJK double quotes) from narration.

EXAMPLES:
    genko chapter01.md                      # Count one manuscript
    genko -d chapter01.md                   # Include the dialogue/narration split
    genko -b chapter01.md                   # Include the per-script breakdown
    genko --format json chapter01.md        # Machine-readable output
    genko drafts/                           # Aggregate a whole directory
    genko -t 10000 chapter01.md             # Override the target character count
    genko --log-level debug drafts/         # Verbose diagnostics
    genko completions bash > genko.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically. A .genko.json file next to a
    manuscript overrides the global settings for that directory.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input manuscript file or directory to count
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Show the dialogue/narration split
    #[arg(short, long)]
    detailed: bool,

    /// Show the per-script character breakdown
    #[arg(short, long)]
    breakdown: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Target character count, overrides the configured value
    #[arg(short, long)]
    target: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// JSON report for a single manuscript file
#[derive(Debug, Serialize)]
struct FileReport {
    /// Manuscript path as given on the command line
    path: String,

    /// Counts for this manuscript
    #[serde(flatten)]
    detail: DetailedCount,

    /// Total over all manuscripts in the same directory
    directory_total: usize,
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "genko", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Count(args)) => run_count(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let count_args = CountArgs {
                input_path,
                detailed: cli.detailed,
                breakdown: cli.breakdown,
                format: cli.format,
                target: cli.target,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_count(count_args)
        }
    }
}

fn run_count(options: CountArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = load_config(&options)?;

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config);
    let input_path = &options.input_path;

    if input_path.is_dir() {
        run_count_directory(&controller, input_path, &options)
    } else if input_path.is_file() {
        run_count_file(&controller, input_path, &options)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", input_path))
    }
}

/// Load or create the configuration, then apply CLI overrides.
fn load_config(options: &CountArgs) -> Result<Config> {
    let config_path = Path::new(&options.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        // Probe the user config directory before creating a default
        let fallback = Config::default_config_path();
        if fallback.exists() {
            Config::from_file(&fallback)?
        } else {
            warn!(
                "Config file not found at '{}', creating default config.",
                options.config_path
            );

            let config = Config::default();
            config.save_to_file(config_path)?;
            config
        }
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(target) = options.target {
        config.target_words = target;
    }

    Ok(config)
}

fn run_count_file(controller: &Controller, path: &Path, options: &CountArgs) -> Result<()> {
    // Directory-local overrides take precedence for this manuscript
    let effective = controller.effective_config_for(path);
    if !effective.enabled {
        info!("Character counting is disabled for {:?}", path);
        return Ok(());
    }

    let detail = controller.count_file(path)?;
    let directory_total = controller.sibling_total(path);

    match options.format {
        OutputFormat::Json => {
            let report = FileReport {
                path: path.display().to_string(),
                detail,
                directory_total,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if let Some(line) =
                controller.render_status_line(&effective, detail.counts.total, directory_total)
            {
                println!("{}", line);
            }

            if options.detailed {
                print_detail_lines(&detail);
            }

            if options.breakdown {
                print_breakdown_lines(&detail.scripts);
            }

            report_threshold(&effective, detail.counts.total, directory_total);
        }
    }

    Ok(())
}

fn run_count_directory(controller: &Controller, dir: &Path, options: &CountArgs) -> Result<()> {
    if !controller.config().enabled {
        info!("Character counting is disabled in configuration");
        return Ok(());
    }

    let aggregate = controller.count_directory(dir);
    info!(
        "Counted {} manuscript(s) in {:?} ({} skipped)",
        aggregate.files, dir, aggregate.skipped
    );

    match options.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&aggregate)?);
        }
        OutputFormat::Text => {
            let config = controller.config();
            if let Some(line) = controller.render_status_line(config, aggregate.counts.total, 0) {
                println!("{}", line);
            }

            if options.detailed {
                println!(
                    "dialogue: {}字 / narration: {}字",
                    format_count(aggregate.counts.dialogue),
                    format_count(aggregate.counts.narration)
                );
            }

            if options.breakdown {
                print_breakdown_lines(&aggregate.scripts);
            }

            report_threshold(config, aggregate.counts.total, 0);
        }
    }

    Ok(())
}

fn print_detail_lines(detail: &DetailedCount) {
    println!(
        "dialogue: {}字 / narration: {}字",
        format_count(detail.counts.dialogue),
        format_count(detail.counts.narration)
    );
}

fn print_breakdown_lines(scripts: &ScriptBreakdown) {
    println!("hiragana: {}", format_count(scripts.hiragana));
    println!("katakana: {}", format_count(scripts.katakana));
    println!("kanji: {}", format_count(scripts.kanji));
    println!("traditional chinese: {}", format_count(scripts.traditional_chinese));
    println!("simplified chinese: {}", format_count(scripts.simplified_chinese));
    println!("korean: {}", format_count(scripts.korean));
    println!("alphanumeric: {}", format_count(scripts.alphanumeric));
}

/// Report the threshold state when the configuration asks for it.
fn report_threshold(config: &Config, current: usize, directory_total: usize) {
    if !config.show_background_color {
        return;
    }

    // The directory total drives the thresholds when present, matching
    // the status line percentage basis
    let basis = if directory_total > 0 {
        directory_total
    } else {
        current
    };

    match ThresholdState::evaluate(basis, config.min_words, config.target_words) {
        ThresholdState::BelowMinimum => warn!(
            "Below minimum: {}字 of at least {}字",
            format_count(basis),
            format_count(config.min_words.unwrap_or(0))
        ),
        ThresholdState::TargetReached => info!(
            "Target reached: {}字 of {}字",
            format_count(basis),
            format_count(config.target_words)
        ),
        _ => {}
    }
}
