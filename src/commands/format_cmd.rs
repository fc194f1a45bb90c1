use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::format::{ByteFormatter, OverflowPolicy};

pub struct FormatOptions {
    pub values: Vec<String>,
    pub json: bool,
    pub overflow: Option<OverflowPolicy>,
}

#[derive(Debug, Serialize)]
pub struct Rendered {
    pub input: String,
    pub formatted: String,
}

pub fn execute_format(options: FormatOptions) -> Result<(), AppError> {
    let values = if options.values.is_empty() {
        read_values(io::stdin().lock())?
    } else {
        options.values
    };

    let formatter = match options.overflow {
        Some(policy) => ByteFormatter::new(policy),
        None => Config::load()?.formatter(),
    };

    let rendered = render_all(&formatter, values);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.json {
        serde_json::to_writer_pretty(&mut out, &rendered)?;
        writeln!(out)?;
    } else {
        for item in &rendered {
            writeln!(out, "{}", item.formatted)?;
        }
    }
    Ok(())
}

pub fn render_all(formatter: &ByteFormatter, values: Vec<String>) -> Vec<Rendered> {
    values
        .into_iter()
        .map(|input| {
            let formatted = formatter.format(input.as_str());
            if formatted.is_empty() {
                tracing::debug!(%input, "value is not renderable");
            } else {
                tracing::debug!(%input, %formatted, "rendered");
            }
            Rendered { input, formatted }
        })
        .collect()
}

fn read_values<R: BufRead>(reader: R) -> Result<Vec<String>, AppError> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        values.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(values)
}
