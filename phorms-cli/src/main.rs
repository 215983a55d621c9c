//! Command line front end for checking a value against a Phorms field.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use phorms::prelude::*;
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(name = "phorms", version, about = "Validate a value against a form field")]
struct Cli {
    /// JSON field config; flags given alongside it override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field label.
    #[arg(short, long)]
    label: Option<String>,

    /// Help text rendered below the field.
    #[arg(long)]
    help_text: Option<String>,

    /// Maximum value length in characters.
    #[arg(short, long)]
    max_length: Option<usize>,

    /// Value to validate.
    #[arg(long, default_value = "")]
    value: String,

    /// Print the rendered field markup.
    #[arg(long)]
    html: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn field_config(&self) -> Result<FieldConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                FieldConfig::from_json(&json)
                    .with_context(|| format!("Invalid field config in {}", path.display()))?
            }
            None => FieldConfig::default(),
        };

        if let Some(label) = &self.label {
            config.label = label.clone();
        }
        if let Some(help) = &self.help_text {
            config.help_text = Some(help.clone());
        }
        if let Some(max) = self.max_length {
            config.max_length = max;
        }
        Ok(config)
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let config = cli.field_config()?;
    let mut field = Field::from_config(&config).context("Failed to build field")?;
    info!("Checking value against field '{}'", field.name());

    field.set_value(cli.value.as_str());
    let valid = field.is_valid();

    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    for error in field.errors() {
        writeln!(out, "{error}")?;
    }
    if cli.html {
        writeln!(out, "{}", field.html())?;
    }

    Ok(valid)
}

/// Exit status: 0 valid, 1 invalid, 2 usage or config error.
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = WriteLogger::init(cli.log_level(), Config::default(), std::io::stderr());

    let result = run(&cli, &mut std::io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::parse_from([
            "phorms",
            "--label",
            "Test field",
            "--help-text",
            "Enter & win.",
            "--max-length",
            "8",
        ]);
        let config = cli.field_config().unwrap();
        assert_eq!(config.label, "Test field");
        assert_eq!(config.help_text.as_deref(), Some("Enter & win."));
        assert_eq!(config.max_length, 8);
    }

    fn run_to_string(args: &[&str]) -> (Result<bool>, String) {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_reports_validity() {
        let (result, out) =
            run_to_string(&["phorms", "--label", "Test field", "--value", "Test value"]);
        assert_eq!(exit_status(&result), 0);
        assert_eq!(out, "valid\n");

        let long = "DEADBEEF".repeat(100);
        let (result, out) =
            run_to_string(&["phorms", "--label", "Test field", "--value", long.as_str()]);
        assert_eq!(exit_status(&result), 1);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("invalid"));
        assert_eq!(
            lines.next(),
            Some("Ensure this value has at most 255 characters (it has 800).")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_run_prints_html() {
        let (result, out) = run_to_string(&[
            "phorms",
            "--label",
            "Test field",
            "--help-text",
            "Enter & win.",
            "--max-length",
            "4",
            "--value",
            "toolong",
            "--html",
        ]);
        assert_eq!(exit_status(&result), 1);

        let html = out.lines().last().unwrap();
        assert!(html.starts_with(r#"<label for="id_test_field">Test field</label>"#));
        assert!(html.contains(r#"value="toolong""#));
        assert!(html.contains(r#"<p class="phorm_help">Enter &amp; win.</p>"#));
        assert!(html.ends_with(
            r#"<ul class="phorm_error"><li>Ensure this value has at most 4 characters (it has 7).</li></ul>"#
        ));
    }

    #[test]
    fn test_missing_label_is_an_error() {
        let (result, out) = run_to_string(&["phorms"]);
        assert!(result.is_err());
        assert_eq!(exit_status(&result), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let (result, _) = run_to_string(&["phorms", "--config", "/nonexistent/field.json"]);
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(Cli::parse_from(["phorms"]).log_level(), LevelFilter::Warn);
        assert_eq!(Cli::parse_from(["phorms", "-vv"]).log_level(), LevelFilter::Debug);
    }
}
