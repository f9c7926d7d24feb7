//! Standalone configuration checker for the image bot.
//!
//! Loads the environment the same way the bot does and reports every
//! configuration problem in one pass, without installing the global
//! logging subscriber. Intended for operators setting up a new deployment.

use std::process::ExitCode;

use clap::Parser;

use banana_bot::config::{self, ConfigError, Settings};

/// Configuration checker.
#[derive(Parser, Debug)]
#[command(name = "check_config")]
#[command(about = "Validates the bot environment without starting it")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = config::DEFAULT_ENV_FILE)]
    env_file: String,

    /// Print the resolved settings as JSON (secrets omitted).
    #[arg(long)]
    json: bool,

    /// Write an example .env file to the specified path and exit.
    #[arg(long)]
    generate_example: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(output_path) = args.generate_example {
        return generate_example(&output_path);
    }

    check(&args.env_file, args.json)
}

fn generate_example(output_path: &str) -> ExitCode {
    match std::fs::write(output_path, Settings::example_env()) {
        Ok(()) => {
            println!("✓ Example environment written to: {output_path}");
            println!("Copy it to .env and fill in the two required values.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write example file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(env_file: &str, json: bool) -> ExitCode {
    println!("Checking configuration");

    if config::load_env_file(env_file) {
        println!("✓ Environment file loaded: {env_file}");
    } else {
        println!("- No environment file at {env_file} (using process environment)");
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e @ ConfigError::MissingConfiguration { .. }) => {
            eprintln!("✗ {e}");
            eprintln!("\nSet the missing variables in {env_file} or the environment:");
            eprintln!("TELEGRAM_BOT_TOKEN=<token from @BotFather>");
            eprintln!("GEMINI_API_KEY=<key from Google AI Studio>");
            eprintln!("\nRun with --generate-example .env.example for a full template.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("✗ {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("✓ TELEGRAM_BOT_TOKEN is set");
    println!("✓ GEMINI_API_KEY is set");
    println!("✓ Log level: {}", settings.log_level);
    println!("✓ Admin IDs: {:?}", settings.admin_ids);
    println!("✓ Model: {}", settings.gemini_model());
    println!("✓ Default aspect ratio: {}", settings.default_aspect_ratio);

    if json {
        match serde_json::to_string_pretty(&settings) {
            Ok(rendered) => println!("\n{rendered}"),
            Err(e) => {
                eprintln!("✗ Failed to render settings as JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n✓ Configuration is valid");
    ExitCode::SUCCESS
}
