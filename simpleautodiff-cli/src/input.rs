use crate::error::CliError;
use log::warn;
use std::io::{BufRead, Write};

/// Number of prompts for one value before giving up.
pub const MAX_ATTEMPTS: usize = 3;

pub fn parse_value(name: &str, raw: &str) -> Result<f64, CliError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| CliError::InvalidInput {
        name: name.to_string(),
        raw: trimmed.to_string(),
    })
}

/// Asks for `name` on `writer` until `reader` yields a number, at most `MAX_ATTEMPTS` times.
pub fn prompt_value<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, name: &str) -> Result<f64, CliError> {
    let mut last_error = CliError::InvalidInput {
        name: name.to_string(),
        raw: String::new(),
    };
    for attempt in 1..=MAX_ATTEMPTS {
        write!(writer, "Enter {}: ", name)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(CliError::InvalidInput {
                name: name.to_string(),
                raw: "<end of input>".to_string(),
            });
        }
        match parse_value(name, &line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("attempt {}/{} for {}: {}", attempt, MAX_ATTEMPTS, name, e);
                writeln!(writer, "{}", e)?;
                last_error = e;
            }
        }
    }
    Err(last_error)
}

/// Parses the values given in `raw`, then prompts for every name in `names` they leave out.
///
/// Values beyond `names` are kept so the caller can report the arity mismatch.
pub fn collect_values<R: BufRead, W: Write>(
    raw: &[String],
    names: &[String],
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<f64>, CliError> {
    let mut values = Vec::with_capacity(names.len().max(raw.len()));
    for (i, value) in raw.iter().enumerate() {
        let name = match names.get(i) {
            Some(name) => name.clone(),
            None => format!("extra input {}", i + 1 - names.len()),
        };
        values.push(parse_value(&name, value)?);
    }
    for name in names.iter().skip(raw.len()) {
        values.push(prompt_value(reader, writer, name)?);
    }
    Ok(values)
}
