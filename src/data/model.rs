use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NumericList – the decoded input sequence
// ---------------------------------------------------------------------------

/// An ordered list of single-precision samples as decoded from a source.
///
/// Order and duplicates are preserved; there is no uniqueness constraint.
/// `None` marks a null entry (a structured document may contain literal
/// `null`s), which every downstream consumer skips rather than propagates.
/// The list is built once by the decoder and read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericList(Vec<Option<f32>>);

impl NumericList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: f32) {
        self.0.push(Some(value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-null values only, in input order.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().filter_map(|v| *v)
    }

    /// Whether any non-null value is present.
    pub fn has_values(&self) -> bool {
        self.0.iter().any(Option::is_some)
    }
}

impl From<Vec<f32>> for NumericList {
    fn from(values: Vec<f32>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<f32>>> for NumericList {
    fn from(entries: Vec<Option<f32>>) -> Self {
        Self(entries)
    }
}

impl FromIterator<f32> for NumericList {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl fmt::Display for NumericList {
    /// Comma-joined non-null values, the delimited wire form without the
    /// trailing newline. Used for logging and the stdin echo.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in self.values() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Format – the two wire serializations
// ---------------------------------------------------------------------------

/// Serialization format, independent per direction (input and output
/// formats need not match).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Comma-separated plain text (`csv`).
    DelimitedText,
    /// A single JSON document (`json`).
    StructuredDocument,
}

impl Format {
    /// Conventional file extension, appended to a sink's base path.
    pub fn extension(self) -> &'static str {
        match self {
            Format::DelimitedText => "csv",
            Format::StructuredDocument => "json",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::DelimitedText),
            "json" => Ok(Format::StructuredDocument),
            other => Err(format!("unsupported format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_values_and_skips_nulls() {
        let list = NumericList::from(vec![Some(1.5), None, Some(3.0)]);
        assert_eq!(list.to_string(), "1.5,3");
    }

    #[test]
    fn empty_list_displays_as_empty() {
        assert_eq!(NumericList::new().to_string(), "");
    }

    #[test]
    fn has_values_ignores_nulls() {
        let all_null = NumericList::from(vec![None, None]);
        assert!(!all_null.is_empty());
        assert!(!all_null.has_values());
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<Format>().unwrap(), Format::DelimitedText);
        assert_eq!("json".parse::<Format>().unwrap(), Format::StructuredDocument);
        assert!("xml".parse::<Format>().is_err());
    }
}
