use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::Path;

use log::info;

use crate::error::ReadError;

use super::model::{Format, NumericList};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode a local file in the given format.
pub fn decode_file(path: &Path, format: Format) -> Result<NumericList, ReadError> {
    match format {
        Format::DelimitedText => decode_delimited_file(path),
        Format::StructuredDocument => {
            let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
            decode_structured(&text)
        }
    }
}

/// Decode an interactive line stream (stdin). For delimited text the
/// stream is consumed line by line, accumulating values until EOF; for a
/// structured document the whole stream is read and parsed as one array.
pub fn decode_stream<R: BufRead>(mut reader: R, format: Format) -> Result<NumericList, ReadError> {
    match format {
        Format::DelimitedText => decode_delimited_stream(reader),
        Format::StructuredDocument => {
            let mut text = String::new();
            reader
                .read_to_string(&mut text)
                .map_err(|e| stream_error(e))?;
            decode_structured(&text)
        }
    }
}

// ---------------------------------------------------------------------------
// Delimited text, file variant
// ---------------------------------------------------------------------------

/// Header-less CSV, read line by line so validation sees physical lines:
/// the first line must be non-empty and its token count establishes the
/// expected column count, which every subsequent line must match exactly.
/// A blank line splits to a single empty token, so it fails the count
/// check like any other short line. Tokens are trimmed, empty tokens
/// skipped, the rest parsed as `f32`.
fn decode_delimited_file(path: &Path) -> Result<NumericList, ReadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let reader = io::BufReader::new(file);

    let mut values = NumericList::new();
    let mut columns: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| io_error(path, e))?;
        let number = idx + 1;
        let tokens: Vec<&str> = line.split(',').collect();

        match columns {
            None => {
                if line.trim().is_empty() {
                    return Err(ReadError::EmptyInput);
                }
                columns = Some(tokens.len());
            }
            Some(n) if tokens.len() != n => {
                return Err(ReadError::InconsistentColumns { line: number });
            }
            Some(_) => {}
        }

        for token in tokens {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            values.push(parse_number(token)?);
        }
    }

    if values.is_empty() {
        return Err(ReadError::EmptyInput);
    }

    info!(
        "decoded {} values from delimited file {}",
        values.len(),
        path.display()
    );
    Ok(values)
}

// ---------------------------------------------------------------------------
// Delimited text, interactive variant
// ---------------------------------------------------------------------------

/// Keyboard input: accumulate values line by line until EOF. Each line has
/// all whitespace removed before splitting on `,`. A line that sanitizes
/// to nothing is an empty-input error, not an end-of-input signal.
fn decode_delimited_stream<R: BufRead>(reader: R) -> Result<NumericList, ReadError> {
    let mut values = NumericList::new();

    for line in reader.lines() {
        let line = line.map_err(stream_error)?;
        let sanitized: String = line.chars().filter(|c| !c.is_whitespace()).collect();

        if sanitized.is_empty() {
            return Err(ReadError::EmptyInput);
        }

        for token in sanitized.split(',') {
            if token.is_empty() {
                continue;
            }
            values.push(parse_number(token)?);
        }
    }

    if values.is_empty() {
        return Err(ReadError::EmptyInput);
    }

    info!("decoded {} values from interactive input", values.len());
    Ok(values)
}

// ---------------------------------------------------------------------------
// Structured document
// ---------------------------------------------------------------------------

/// The whole source is one JSON array of numbers-or-nulls. A `null`
/// document or empty array is an empty-input error; anything malformed is
/// a structured-parse error.
fn decode_structured(text: &str) -> Result<NumericList, ReadError> {
    let list: Option<NumericList> = serde_json::from_str(text)?;
    let list = list.unwrap_or_default();

    if list.is_empty() {
        return Err(ReadError::EmptyInput);
    }

    info!("decoded {} entries from structured document", list.len());
    Ok(list)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_number(token: &str) -> Result<f32, ReadError> {
    token.parse::<f32>().map_err(|_| ReadError::InvalidNumber {
        token: token.to_string(),
    })
}

fn io_error(path: &Path, source: io::Error) -> ReadError {
    ReadError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn stream_error(source: io::Error) -> ReadError {
    ReadError::Io {
        path: "<stdin>".to_string(),
        source,
    }
}
