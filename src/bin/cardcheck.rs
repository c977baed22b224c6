//! CLI tool for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate one or more numbers
//! cardcheck 4111111111111111 "3782 822463 10005"
//!
//! # JSON lines, full numbers echoed
//! cardcheck --output json --reveal 4111111111111112
//!
//! # Debug events on stderr
//! RUST_LOG=cardcheck=debug cardcheck 4111111111111111
//! ```
//!
//! One line is printed per input. The exit status is always 0.
//!
//! Options must come before the numbers: once the first number is seen,
//! every later argument (even one starting with `-`) is taken as a number.

use cardcheck::{mask, validate_card, ValidationResult};
use clap::{CommandFactory, Parser, ValueEnum};
use serde::Serialize;
use std::panic;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(version, about = "Validate payment card numbers (brand, length, Luhn)")]
struct Cli {
    /// Card numbers to validate (spaces and dashes allowed)
    #[arg(allow_hyphen_values = true)]
    numbers: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Echo inputs unmasked instead of showing only the last four digits
    #[arg(long)]
    reveal: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

#[derive(Serialize)]
struct JsonError<'a> {
    input: &'a str,
    error: &'a str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Route panics through the logger instead of the default stderr dump
    panic::set_hook(Box::new(|info| tracing::error!("{}", info)));

    let cli = Cli::parse();

    if cli.numbers.is_empty() {
        print_usage();
        return;
    }

    for raw in &cli.numbers {
        let shown = if cli.reveal {
            raw.clone()
        } else {
            mask::mask_string(raw)
        };

        let line = match panic::catch_unwind(|| validate_card(raw)) {
            Ok(result) => render_result(&shown, &result, cli.output),
            Err(payload) => render_error(&shown, &panic_message(payload.as_ref()), cli.output),
        };
        println!("{}", line);
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
    println!("Example: cardcheck 4111111111111111 378282246310005");
}

fn render_result(shown: &str, result: &ValidationResult, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => {
            let brand = result.brand().map_or("unknown", |b| b.name());
            if result.is_valid() {
                format!("{} -> OK - brand: {}", shown, brand)
            } else {
                format!(
                    "{} -> INVALID - brand: {} - {}",
                    shown,
                    brand,
                    result.error_messages().join("; ")
                )
            }
        }
        OutputFormat::Json => {
            let line = JsonLine {
                input: shown,
                result,
            };
            serde_json::to_string(&line)
                .unwrap_or_else(|e| render_error(shown, &e.to_string(), output))
        }
    }
}

fn render_error(shown: &str, error: &str, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => format!("{} -> ERROR: {}", shown, error),
        OutputFormat::Json => {
            let line = JsonError {
                input: shown,
                error,
            };
            serde_json::to_string(&line)
                .unwrap_or_else(|_| String::from("{\"error\":\"unserializable result\"}"))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_valid_line() {
        let result = validate_card("4111111111111111");
        assert_eq!(
            render_result("************1111", &result, OutputFormat::Text),
            "************1111 -> OK - brand: Visa"
        );
    }

    #[test]
    fn test_text_invalid_line_joins_errors() {
        let result = validate_card("1234567890123");
        let line = render_result("*********0123", &result, OutputFormat::Text);
        assert!(line.starts_with("*********0123 -> INVALID - brand: unknown - "));
        assert!(line.contains("unrecognized card brand"));
        assert!(line.contains("; checksum failed"));
    }

    #[test]
    fn test_json_line() {
        let result = validate_card("4111111111111112");
        let line = render_result("x", &result, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "x");
        assert_eq!(value["valid"], false);
        assert_eq!(value["brand"], "Visa");
        assert_eq!(value["errors"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_json_unknown_brand_is_null() {
        let result = validate_card("41a1");
        let line = render_result("41a1", &result, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["brand"].is_null());
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            render_error("41", "boom", OutputFormat::Text),
            "41 -> ERROR: boom"
        );
    }

    #[test]
    fn test_leading_hyphen_numbers_are_inputs() {
        let cli =
            Cli::try_parse_from(["cardcheck", "4111111111111111", "-4111-1111-1111-1111"]).unwrap();
        assert_eq!(cli.numbers, ["4111111111111111", "-4111-1111-1111-1111"]);
        assert!(validate_card(&cli.numbers[1]).is_valid());

        let cli = Cli::try_parse_from(["cardcheck", "-1 2"]).unwrap();
        assert_eq!(cli.numbers, ["-1 2"]);
    }

    #[test]
    fn test_options_before_numbers() {
        let cli = Cli::try_parse_from([
            "cardcheck",
            "--output",
            "json",
            "--reveal",
            "41a1",
            "-378282246310005",
        ])
        .unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(cli.reveal);
        assert_eq!(cli.numbers, ["41a1", "-378282246310005"]);
    }

    #[test]
    fn test_no_numbers_parses() {
        let cli = Cli::try_parse_from(["cardcheck"]).unwrap();
        assert!(cli.numbers.is_empty());
        assert!(matches!(cli.output, OutputFormat::Text));
        assert!(!cli.reveal);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
