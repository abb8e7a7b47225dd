// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand, Args};
use clap_complete::{generate, Shell};
use serde_json::Value;

use cardtranslate::app_config::{self, Config};
use cardtranslate::card;
use cardtranslate::CardTranslator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options shared by the commands that talk to the translator
#[derive(Args, Debug)]
struct ServiceArgs {
    /// Target locale (e.g. 'fr', 'de', 'zh-Hans')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the text of an Adaptive Card
    Translate {
        /// Card JSON file, or '-' for stdin
        #[arg(value_name = "CARD")]
        card: PathBuf,

        /// Write the translated card here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail instead of emitting the untranslated card when translation fails
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Translate a single string
    Text {
        /// Text to translate
        text: String,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// List the strings of a card that would be translated (no network)
    Collect {
        /// Card JSON file, or '-' for stdin
        #[arg(value_name = "CARD")]
        card: PathBuf,
    },

    /// Generate shell completions for cardtranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// cardtranslate - Adaptive Card translation
///
/// Translates the human-readable text of Adaptive Cards with the
/// Microsoft Translator batch endpoint, leaving structure untouched.
#[derive(Parser, Debug)]
#[command(name = "cardtranslate")]
#[command(version)]
#[command(about = "Translate the text of Adaptive Cards")]
#[command(long_about = "cardtranslate finds the human-readable strings of an Adaptive Card and translates them in one batch request.

EXAMPLES:
    cardtranslate translate card.json -t fr          # Translate to French, print to stdout
    cardtranslate translate card.json -t de -o de.json
    cat card.json | cardtranslate translate - -t es  # Read the card from stdin
    cardtranslate text \"Hello\" -t ja                 # Translate a single string
    cardtranslate collect card.json                  # Show what would be translated
    cardtranslate completions bash > cardtranslate.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically. The subscription key is
    read from translator.api_key, or from the TRANSLATOR_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The max level is adjusted after the config is read
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            // stdout carries the card JSON, so logs go to stderr
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
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
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "cardtranslate", &mut std::io::stdout());
            Ok(())
        }
        Commands::Collect { card } => run_collect(&card),
        Commands::Text { text, service } => run_text(&text, service).await,
        Commands::Translate { card, output, strict, service } => {
            run_translate(&card, output.as_deref(), strict, service).await
        }
    }
}

/// Load the config, apply CLI overrides and the effective log level
fn load_config(service: &ServiceArgs) -> Result<Config> {
    let mut config = Config::load_or_create(&service.config_path)?;

    if let Some(target) = &service.target_language {
        config.target_language = target.clone();
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &service.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    // Just update the max level without reinitializing the logger
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

/// Read a card from a file path, or stdin for '-'
fn read_card(path: &Path) -> Result<Value> {
    let json = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)
            .context("Failed to read card from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .context(format!("Failed to read card file: {}", path.display()))?
    };

    card::parse_document(&json)
        .map_err(|e| anyhow!("{}: {}", path.display(), e))
}

fn write_card(card: &Value, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(card)
        .context("Failed to serialize card")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .context(format!("Failed to write card to file: {}", path.display()))?;
            info!("Success: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Resolves when the user presses Ctrl-C
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn run_translate(card_path: &Path, output: Option<&Path>, strict: bool, service: ServiceArgs) -> Result<()> {
    let config = load_config(&service)?;
    let mut card = read_card(card_path)?;

    let translator = CardTranslator::from_config(&config.translator)?;

    match translator.translate_card(&mut card, &config.target_language, ctrl_c()).await {
        Ok(report) => {
            info!(
                "Applied {} translation(s), {} text(s) left as-is",
                report.applied, report.skipped
            );
        }
        Err(e) if !strict => {
            // The card is untouched on failure; show it untranslated
            warn!("Translation failed, emitting the original card: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    write_card(&card, output)
}

async fn run_text(text: &str, service: ServiceArgs) -> Result<()> {
    let config = load_config(&service)?;
    let translator = CardTranslator::from_config(&config.translator)?;

    match translator.translate_text(text, &config.target_language, ctrl_c()).await? {
        Some(translated) => println!("{}", translated),
        None => {
            warn!("Translator returned no text; printing the original");
            println!("{}", text);
        }
    }

    Ok(())
}

fn run_collect(card_path: &Path) -> Result<()> {
    let card = read_card(card_path)?;
    let units = card::collect(&card);

    info!("Found {} translatable text(s)", units.len());
    for unit in &units {
        println!("{}\t{}", unit.location, unit.original_text);
    }

    Ok(())
}
