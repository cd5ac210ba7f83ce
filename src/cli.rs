// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - eval: replay keypad presses headlessly and print the result
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Print the config file location

use crate::config::{Config, VERSION};
use crate::engine::{parse_sequence, Engine, EngineOptions};
use crate::logging::{self, LogBuffer, LogSink};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// padcalc - a keypad calculator for the terminal
#[derive(Parser)]
#[command(name = "padcalc")]
#[command(version = VERSION)]
#[command(about = "Keypad calculator for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Press keys without the TUI and print the display
    Eval {
        /// Print the full calculator state as JSON
        #[arg(long)]
        json: bool,

        /// Keys to press, e.g. `12 + 3 =` or `9 -/+ %`
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        keys: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { json, keys }) => {
            handle_eval(&keys, json)?;
            Ok(true)
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else if edit {
                handle_config_edit()?;
            } else {
                // No flag provided, show help
                println!("Usage: padcalc config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the TUI
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eval
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a key sequence to a fresh engine
pub fn evaluate(keys: &[String], options: EngineOptions) -> Result<Engine> {
    let symbols = parse_sequence(&keys.join(" "))?;

    let mut engine = Engine::with_options(options);
    for symbol in symbols {
        engine.apply(symbol);
    }
    Ok(engine)
}

fn handle_eval(keys: &[String], json: bool) -> Result<()> {
    let config = Config::from_env();
    // No TUI to show logs in, so they go to stderr
    let _guard = logging::init(&config.logging, LogSink::Stderr, &LogBuffer::new());

    let engine = evaluate(keys, config.engine_options())?;
    tracing::debug!(display = engine.display(), "Evaluated key sequence");

    if json {
        let out = serde_json::to_string(&engine).context("Failed to serialize state")?;
        println!("{}", out);
    } else {
        println!("{}", engine.display());
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    match config.max_input_len {
        Some(n) => println!("max_input_len = {}", n),
        None => println!("max_input_len = 0  # unbounded"),
    }
    println!("mouse = {}", config.mouse);
    println!("show_logs = {}", config.show_logs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!(
        "file_rotation = {:?}",
        config.logging.file_rotation.as_str()
    );
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}' (set $EDITOR)", editor))?;

    if !status.success() {
        anyhow::bail!("Editor exited with status: {}", status);
    }
    Ok(())
}
