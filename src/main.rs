// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use content_translator::app_config::{Config, LogLevel};
use content_translator::database::{CacheRepository, DatabaseConnection};
use content_translator::locales::LocaleMap;
use content_translator::providers::DeepLClient;
use content_translator::translation::{BatchTranslator, Proposal, ProposalTranslator};

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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a proposal JSON file into a target locale
    Translate(TranslateArgs),

    /// Show the number of cached translations
    CacheStats {
        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Delete every cached translation
    CacheClear {
        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Proposal JSON file to translate
    #[arg(value_name = "PROPOSAL_FILE")]
    input_path: PathBuf,

    /// Target platform locale (e.g. 'es', 'pt', 'fr')
    #[arg(short, long)]
    target_locale: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// content-translator
///
/// Translates platform content (proposals) into a target locale through a
/// cache-through SQLite store, dispatching only uncached fragments to the
/// DeepL API in a single batched call.
#[derive(Parser, Debug)]
#[command(name = "content-translator")]
#[command(version = "1.0.0")]
#[command(about = "Batch content translation with cache-through persistence")]
#[command(long_about = "Translates proposal content into a target locale.

Each text fragment is cached by content key, text hash and target locale, so
unchanged text never hits the translation provider twice. Edited text hashes
differently and is re-translated on the next pass.

EXAMPLES:
    content-translator translate proposal.json -t es   # Translate to Spanish
    content-translator translate proposal.json -t pt   # Brazilian Portuguese
    content-translator cache-stats                      # Count cached rows
    content-translator cache-clear                      # Drop the whole cache

CONFIGURATION:
    Configuration is read from conf.json by default (override with --config-path).
    The DeepL API key is required; locale mapping overrides and the database
    path are optional.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// Custom logger implementation writing colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Translate(args) => run_translate(args).await,
        Commands::CacheStats { config_path } => {
            let config = load_config(&config_path)?;
            let repo = open_repository(&config)?;
            let count = repo.count().await?;
            println!("{}", count);
            Ok(())
        }
        Commands::CacheClear { config_path } => {
            let config = load_config(&config_path)?;
            let repo = open_repository(&config)?;
            let deleted = repo.clear().await?;
            info!("Removed {} cached translations", deleted);
            Ok(())
        }
    }
}

/// Load the configuration file, falling back to defaults when absent
fn load_config(config_path: &str) -> Result<Config> {
    if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)
    } else {
        warn!(
            "Config file not found at '{}', using default config.",
            config_path
        );
        Ok(Config::default())
    }
}

/// Open the cache repository at the configured or default location
fn open_repository(config: &Config) -> Result<CacheRepository> {
    let db = if config.database_path.is_empty() {
        DatabaseConnection::new_default()?
    } else {
        DatabaseConnection::new(&config.database_path)?
    };
    Ok(CacheRepository::new(db))
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config = load_config(&options.config_path)?;

    // Validate before doing any work; a missing API key must not produce
    // a half-translated proposal.
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, pick it up from config
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let content = std::fs::read_to_string(&options.input_path).context(format!(
        "Failed to read proposal file: {}",
        options.input_path.display()
    ))?;
    let proposal: Proposal = serde_json::from_str(&content).context(format!(
        "Failed to parse proposal file: {}",
        options.input_path.display()
    ))?;

    let locales = LocaleMap::with_overrides(&config.locale_mapping);
    if !locales.is_supported(&options.target_locale) {
        return Err(anyhow!(
            "Unsupported target locale '{}'. Supported: {}",
            options.target_locale,
            locales.supported_locales().join(", ")
        ));
    }

    let client = DeepLClient::with_timeout(
        &config.provider.endpoint,
        &config.provider.api_key,
        config.provider.timeout_secs,
    )?;
    let repo = open_repository(&config)?;
    let translator = ProposalTranslator::with_locales(BatchTranslator::new(repo), locales);

    debug!(
        "Translating proposal {} into {}",
        proposal.id, options.target_locale
    );

    let translation = translator
        .translate_proposal(&proposal, &options.target_locale, &client)
        .await?;

    info!(
        "Translated {} fields of proposal {} (source {})",
        translation.translated.len(),
        proposal.id,
        if translation.source_locale.is_empty() {
            "none"
        } else {
            translation.source_locale.as_str()
        }
    );

    let output = serde_json::to_string_pretty(&serde_json::json!({
        "proposal_id": proposal.id,
        "target_locale": translation.target_locale,
        "source_locale": translation.source_locale,
        "translated": translation.translated,
    }))
    .context("Failed to serialize translation output")?;
    println!("{}", output);

    Ok(())
}
