use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::WriteError;

use super::model::{Format, NumericList};
use super::ops::Operation;

// ---------------------------------------------------------------------------
// Output records
// ---------------------------------------------------------------------------
//
// Serialized as typed records rather than through `serde_json::Value` so
// the floats keep their shortest f32 representation instead of widening
// to f64.

#[derive(Serialize)]
struct SumRecord {
    #[serde(rename = "SUM")]
    sum: f32,
}

#[derive(Serialize)]
struct MinMaxRecord {
    #[serde(rename = "MIN")]
    min: f32,
    #[serde(rename = "MAX")]
    max: f32,
}

#[derive(Serialize)]
struct FilterRecord {
    #[serde(rename = "LT4")]
    values: Vec<f32>,
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Render a value sequence as output text, trailing newline included.
///
/// Delimited text joins the non-null values with `,`; an empty sequence
/// encodes as a bare newline rather than failing. The structured document
/// is a single record shaped by the operation: `{"SUM": s}`, `{"MIN": a,
/// "MAX": b}`, or `{"LT4": [..]}` with the filtered values nested under
/// the field key.
pub fn encode(values: &NumericList, format: Format, op: Operation) -> Result<String, WriteError> {
    match format {
        Format::DelimitedText => Ok(format!("{values}\n")),
        Format::StructuredDocument => {
            let mut it = values.values();
            let doc = match op {
                Operation::Sum => serde_json::to_string(&SumRecord {
                    sum: it.next().unwrap_or(0.0),
                }),
                Operation::MinMax => serde_json::to_string(&MinMaxRecord {
                    min: it.next().unwrap_or(0.0),
                    max: it.next().unwrap_or(0.0),
                }),
                Operation::FilterBelowFour => serde_json::to_string(&FilterRecord {
                    values: values.values().collect(),
                }),
            }?;
            Ok(format!("{doc}\n"))
        }
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Print to the console. Refuses an empty value sequence; there is nothing
/// meaningful to show and the caller should learn why.
pub fn write_stdout(values: &NumericList, text: &str) -> Result<(), WriteError> {
    if values.is_empty() {
        return Err(WriteError::EmptyOutput);
    }
    io::stdout()
        .write_all(text.as_bytes())
        .map_err(|e| WriteError::Io {
            path: "<stdout>".to_string(),
            source: e,
        })
}

/// Write to `<base>.<ext>`, overwriting any existing file. The handle is
/// closed on every exit path before control returns. Returns the full
/// path actually written.
pub fn write_file(base: &Path, format: Format, text: &str) -> Result<PathBuf, WriteError> {
    let path = path_with_extension(base, format);
    let display = path.display().to_string();

    let mut file = File::create(&path).map_err(|e| WriteError::Io {
        path: display.clone(),
        source: e,
    })?;
    file.write_all(text.as_bytes()).map_err(|e| WriteError::Io {
        path: display.clone(),
        source: e,
    })?;

    info!("wrote output to {display}");
    Ok(path)
}

/// Append the format's extension to the base path. Appends rather than
/// replaces: `out.v2` becomes `out.v2.csv`.
fn path_with_extension(base: &Path, format: Format) -> PathBuf {
    let mut os = base.as_os_str().to_os_string();
    os.push(".");
    os.push(format.extension());
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn list(values: &[f32]) -> NumericList {
        values.iter().copied().collect()
    }

    #[test]
    fn delimited_joins_with_commas() {
        let text = encode(
            &list(&[1.5, 3.7, 2.0]),
            Format::DelimitedText,
            Operation::FilterBelowFour,
        )
        .unwrap();
        assert_eq!(text, "1.5,3.7,2\n");
    }

    #[test]
    fn delimited_empty_is_bare_newline() {
        let text = encode(
            &NumericList::new(),
            Format::DelimitedText,
            Operation::FilterBelowFour,
        )
        .unwrap();
        assert_eq!(text, "\n");
    }

    #[test]
    fn structured_sum_record() {
        let text = encode(&list(&[6.0]), Format::StructuredDocument, Operation::Sum).unwrap();
        assert_eq!(text, "{\"SUM\":6.0}\n");
    }

    #[test]
    fn structured_minmax_record() {
        let text = encode(&list(&[2.0, 4.5]), Format::StructuredDocument, Operation::MinMax)
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["MIN"], json!(2.0));
        assert_eq!(doc["MAX"], json!(4.5));
    }

    #[test]
    fn structured_filter_nests_array_under_key() {
        let text = encode(
            &list(&[1.5, 3.7]),
            Format::StructuredDocument,
            Operation::FilterBelowFour,
        )
        .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["LT4"], json!([1.5, 3.7]));
    }

    #[test]
    fn structured_filter_empty_array() {
        let text = encode(
            &NumericList::new(),
            Format::StructuredDocument,
            Operation::FilterBelowFour,
        )
        .unwrap();
        assert_eq!(text, "{\"LT4\":[]}\n");
    }

    #[test]
    fn stdout_refuses_empty_sequence() {
        let err = write_stdout(&NumericList::new(), "\n").unwrap_err();
        assert!(matches!(err, WriteError::EmptyOutput));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn file_sink_appends_extension_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("result");

        let path = write_file(&base, Format::DelimitedText, "1,2,3\n").unwrap();
        assert_eq!(path, dir.path().join("result.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2,3\n");
    }

    #[test]
    fn file_sink_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("result");

        write_file(&base, Format::DelimitedText, "old\n").unwrap();
        let path = write_file(&base, Format::DelimitedText, "new\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn file_sink_accepts_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("empty");

        let text = encode(
            &NumericList::new(),
            Format::DelimitedText,
            Operation::FilterBelowFour,
        )
        .unwrap();
        let path = write_file(&base, Format::DelimitedText, &text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\n");
    }

    #[test]
    fn file_sink_error_is_code_3() {
        let err = write_file(
            Path::new("/no-such-dir/deeply/missing"),
            Format::DelimitedText,
            "1\n",
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
