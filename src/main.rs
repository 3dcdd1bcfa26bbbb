//! person-printer — render a person record in one or more output formats.
//!
//! Supports two modes:
//!
//! - **demo mode**: `person-printer` renders the built-in person as text,
//!   json, html and xml (which falls back to the debug dump), then prints the
//!   raw attribute map.
//! - **format mode**: `person-printer -f json -f html -c 36 -i person.json`

use anyhow::{bail, Context, Result};
use clap::Parser;
use person_printer::model::Person;
use person_printer::printer::PersonPrinter;
use person_printer::render::ColorCode;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Formats rendered when none are requested.
const DEMO_FORMATS: &[&str] = &["text", "json", "html", "xml"];

#[derive(Parser)]
#[command(
    name = "person-printer",
    about = "Render a person record as colored text, JSON, HTML or a debug dump"
)]
struct Cli {
    /// Output format: text, json, html, default. Repeatable; rendered in order.
    /// Unknown names fall back to default. If omitted, runs the demo.
    #[arg(short = 'f', long = "format")]
    formats: Vec<String>,

    /// ANSI color code (30-37) for labels; other integers render unstyled in HTML
    #[arg(short = 'c', long, default_value_t = 32, allow_negative_numbers = true)]
    color: ColorCode,

    /// JSON file holding an object of string attributes
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Attribute as KEY=VALUE (repeatable, applied after --input)
    #[arg(short = 'a', long = "attr")]
    attrs: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let person = load_person(&cli)?;

    if cli.formats.is_empty() {
        return demo_mode(&person, cli.color);
    }

    format_mode(&person, &cli.formats, cli.color)
}

/// demo mode: all four demo formats, followed by the attribute map.
fn demo_mode(person: &Person, color: ColorCode) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    PersonPrinter::create(person, DEMO_FORMATS)
        .print(color, &mut out)
        .context("failed to write to stdout")?;
    writeln!(out, "{:?}", person.attributes()).context("failed to write to stdout")?;
    Ok(())
}

/// format mode: exactly the requested formats, in order.
fn format_mode(person: &Person, formats: &[String], color: ColorCode) -> Result<()> {
    let printer = PersonPrinter::create(person, formats);
    for (requested, resolved) in formats.iter().zip(printer.formats()) {
        if requested != resolved {
            eprintln!("warning: unknown format '{}', using {}", requested, resolved);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    printer
        .print(color, &mut out)
        .context("failed to write to stdout")
}

/// The person to render: `--input` and `--attr` if given, John Deer otherwise.
fn load_person(cli: &Cli) -> Result<Person> {
    if cli.input.is_none() && cli.attrs.is_empty() {
        return Ok(john_deer());
    }

    let mut pairs: Vec<(String, String)> = Vec::new();

    if let Some(ref path) = cli.input {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let from_file: Person = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        pairs.extend(
            from_file
                .attributes()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
    }

    for attr in &cli.attrs {
        pairs.push(parse_attr(attr)?);
    }

    warn_repeated_keys(&pairs);
    Ok(Person::new(pairs))
}

fn john_deer() -> Person {
    Person::new([
        ("title", "Mr"),
        ("country", "UK"),
        ("first_name", "John"),
        ("last_name", "Deer"),
        ("house_number", "1"),
        ("street", "Baker street"),
        ("town", "London"),
        ("postcode", "W1U 8ED"),
    ])
}

/// Parse "KEY=VALUE". The value may itself contain '='.
fn parse_attr(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("invalid attribute '{}': expected KEY=VALUE", raw);
    };
    if key.is_empty() {
        bail!("invalid attribute '{}': empty key", raw);
    }
    Ok((key.to_string(), value.to_string()))
}

fn warn_repeated_keys(pairs: &[(String, String)]) {
    let mut seen = HashSet::new();
    for (key, _) in pairs {
        if !seen.insert(key.as_str()) {
            eprintln!("warning: attribute '{}' given more than once, last value wins", key);
        }
    }
}
