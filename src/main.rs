use std::path::PathBuf;

use anyhow::{bail, Context};
use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::Parser as ClapParser;
use confique::Config as _;
use tracing::*;

use jsonade::{parse, ParseError, Value};

use crate::config::Config;

mod config;
mod logging;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a JSON file to pretty-print.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(input = ?cli.input);

    let config = Config::builder()
        .env()
        .load()
        .context("failed to load configuration")?;

    let json_string = match std::fs::read_to_string(&cli.input) {
        Ok(file) => file,
        Err(e) => {
            error!(path = ?cli.input, "failed to read input");
            return Err(e)
                .with_context(|| format!("failed to read file `{}`", cli.input.display()));
        }
    };

    let path = cli.input.display().to_string();

    let (value, consumed) = match parse(&json_string) {
        Ok(parsed) => parsed,
        Err(e) => {
            report_parse_error(&path, &json_string, &e)?;
            bail!("failed to parse `{path}`");
        }
    };

    if consumed < json_string.len() {
        Report::build(ReportKind::Error, &path, consumed)
            .with_message("trailing input after the JSON value")
            .with_label(
                Label::new((&path, consumed..json_string.len()))
                    .with_message("this input was not consumed")
                    .with_color(Color::Red),
            )
            .finish()
            .print((&path, Source::from(&json_string)))?;
        bail!("failed to parse `{path}`");
    }

    debug!(?value);

    println!("{}", render(&value, config.indent_width));

    Ok(())
}

fn report_parse_error(path: &String, src: &str, err: &ParseError) -> anyhow::Result<()> {
    let at = err.at().min(src.len());
    let end = (at + 1).min(src.len()).max(at);

    let mut report = Report::build(ReportKind::Error, path, at)
        .with_message(err.to_string())
        .with_label(
            Label::new((path, at..end))
                .with_message(format!("expected {}", err.expected_desc()))
                .with_color(Color::Red),
        );

    if let ParseError::Unterminated {
        construct,
        opened_at,
        ..
    } = err
    {
        report = report.with_label(
            Label::new((path, *opened_at..*opened_at + 1))
                .with_message(format!("this {construct} is never closed"))
                .with_color(Color::Yellow),
        );
    }

    report.finish().print((path, Source::from(src)))?;
    Ok(())
}

/// Render a value tree for human inspection. This lives in the binary on
/// purpose: the library never turns a tree back into text.
fn render(value: &Value, indent_width: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, value, indent_width, 0);
    out
}

fn render_into(out: &mut String, value: &Value, indent_width: usize, depth: usize) {
    match value {
        Value::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Num(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                indent(out, indent_width, depth + 1);
                render_into(out, item, indent_width, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, indent_width, depth);
            out.push(']');
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (i, (key, entry)) in entries.iter().enumerate() {
                indent(out, indent_width, depth + 1);
                out.push('"');
                out.push_str(key);
                out.push_str("\": ");
                render_into(out, entry, indent_width, depth + 1);
                if i + 1 < entries.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, indent_width, depth);
            out.push('}');
        }
    }
}

fn indent(out: &mut String, indent_width: usize, depth: usize) {
    for _ in 0..indent_width * depth {
        out.push(' ');
    }
}
