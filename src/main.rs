//! Banana Bot - Main Entry Point
//!
//! Startup sequence for the Gemini image-generation Telegram bot: load
//! the optional `.env` file, validate settings, configure logging, and
//! hand the settings value to the bot runtime.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use banana_bot::config::{self, ConfigError, LogLevel, Settings};
use banana_bot::logging;

/// Telegram bot that generates images with Google Gemini.
#[derive(Parser, Debug)]
#[command(name = "banana_bot")]
#[command(about = "Gemini image-generation bot for Telegram")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = config::DEFAULT_ENV_FILE)]
    env_file: String,

    /// Override the LOG_LEVEL variable (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Write an example .env file and exit.
    #[arg(long)]
    generate_env: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_env {
        return generate_example_env();
    }

    // Pre-populate the environment before settings are read. Already-set
    // variables always win over file contents.
    let env_loaded = config::load_env_file(&args.env_file);

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e @ ConfigError::MissingConfiguration { .. }) => {
            print_missing_guidance(&e);
            return Err(e.into());
        }
        Err(e) => {
            return Err(e).context("Failed to load configuration from environment");
        }
    };

    let level: LogLevel = match &args.log_level {
        Some(value) => value
            .parse()
            .context("Invalid --log-level argument")?,
        None => settings.log_level,
    };
    logging::init(level).context("Failed to initialize logging")?;

    // The env-file loading above ran before the subscriber existed, so
    // report its outcome now that log lines go somewhere.
    if env_loaded {
        info!("Environment file loaded: {}", args.env_file);
    } else {
        debug!("No environment file at {}, used process environment", args.env_file);
    }

    info!("Configuration validated");
    info!("Model: {}", settings.gemini_model());
    info!("Default aspect ratio: {}", settings.default_aspect_ratio);
    info!("Log level: {}", level);
    info!("Admins configured: {}", settings.admin_ids.len());

    run(&settings)
}

/// Hands the validated settings to the bot runtime.
///
/// The Telegram and Gemini clients live outside this crate; this build
/// stops after the startup sequence.
fn run(settings: &Settings) -> Result<()> {
    info!(
        "Startup complete, ready for Telegram polling (token set: {})",
        !settings.telegram_bot_token.is_empty()
    );
    Ok(())
}

/// Writes an example environment file for a new operator.
fn generate_example_env() -> Result<()> {
    let path = ".env.example";
    std::fs::write(path, Settings::example_env())
        .with_context(|| format!("Failed to write {path}"))?;

    println!("✓ Example environment written to: {path}");
    println!("\nTo use this bot:");
    println!("1. Copy {path} to .env");
    println!("2. Set TELEGRAM_BOT_TOKEN (from @BotFather)");
    println!("3. Set GEMINI_API_KEY (from Google AI Studio)");
    println!("4. Run: banana_bot");

    Ok(())
}

/// Prints operator guidance for missing required variables.
fn print_missing_guidance(error: &ConfigError) {
    eprintln!("✗ {error}");
    eprintln!("\nCreate a .env file in the working directory and add:");
    eprintln!("TELEGRAM_BOT_TOKEN=<token from @BotFather>");
    eprintln!("GEMINI_API_KEY=<key from Google AI Studio>");
    eprintln!("\nRun with --generate-env to write a full .env.example.");
}
