//! Terminal output formatting for CLI handlers.
//!
//! Supports a JSON mode for scripting and a quiet mode. Verbosity only
//! affects the log filter and is handled in `main`.
//! Human-readable output uses colored symbols and indented fields.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// JSON mode prints only the command's document; quiet mode prints nothing
/// but warnings and errors.
fn human_output_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!("{} {}", "salescope".bold(), version.dimmed());
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!("  {:<14} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line. Warnings go to stderr so JSON documents on stdout
/// stay parseable.
pub fn warning(message: &str) {
    let config = read_config();
    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "warning",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();
    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a section header.
pub fn section(title: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a dimmed note.
pub fn note(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!("  {}", message.dimmed());
}

/// Print a hint with a `hint:` prefix.
pub fn hint(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
}

/// Print multiple lines of content, each indented. Used for rendered tables.
pub fn lines(content: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON document on stdout.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}
