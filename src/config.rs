use std::path::PathBuf;

use log::warn;

use crate::data::model::Format;
use crate::data::ops::Operation;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Source / Sink
// ---------------------------------------------------------------------------

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    /// Recognized but not implemented; rejected with a read error at run
    /// time.
    Url,
}

/// Where the output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// Base path; the output format's extension is appended on write.
    File(PathBuf),
    /// Recognized but not implemented; rejected with a write error at run
    /// time.
    Url,
}

// ---------------------------------------------------------------------------
// Config – one immutable struct, populated once from argv
// ---------------------------------------------------------------------------

/// Everything the pipeline needs for one invocation. The core never sees
/// argv; this struct is the only thing it receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    pub sink: Sink,
    pub input_format: Format,
    pub output_format: Format,
    pub operation: Operation,
}

/// Parse command-line arguments (program name already stripped).
///
/// Flags: `-i stdin|file <path>|url`, `-o stdout|file <path>|url`,
/// `-f csv|json`, `-F csv|json`, `-a sum|minmax|lt4`. Defaults: stdin,
/// stdout, csv both ways. `-i`/`-o` with no following token fall back to
/// their defaults. Unknown flags are warned about and ignored; a bad
/// token or missing `-a` is a usage error (exit code 4).
pub fn parse_args<I>(args: I) -> Result<Config, PipelineError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let mut source = Source::Stdin;
    let mut sink = Sink::Stdout;
    let mut input_format = Format::DelimitedText;
    let mut output_format = Format::DelimitedText;
    let mut operation: Option<Operation> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-i" => {
                source = match args.next().as_deref() {
                    None | Some("stdin") => Source::Stdin,
                    Some("file") => {
                        let path = args.next().ok_or_else(|| {
                            PipelineError::Usage("-i file requires a path".to_string())
                        })?;
                        Source::File(PathBuf::from(path))
                    }
                    Some("url") => Source::Url,
                    Some(other) => {
                        return Err(PipelineError::Usage(format!(
                            "unsupported input source: {other}"
                        )));
                    }
                };
            }
            "-o" => {
                sink = match args.next().as_deref() {
                    None | Some("stdout") => Sink::Stdout,
                    Some("file") => {
                        let path = args.next().ok_or_else(|| {
                            PipelineError::Usage("-o file requires a path".to_string())
                        })?;
                        Sink::File(PathBuf::from(path))
                    }
                    Some("url") => Sink::Url,
                    Some(other) => {
                        return Err(PipelineError::Usage(format!(
                            "unsupported output sink: {other}"
                        )));
                    }
                };
            }
            "-f" => {
                if let Some(value) = args.next() {
                    input_format = value.parse().map_err(PipelineError::Usage)?;
                }
            }
            "-F" => {
                if let Some(value) = args.next() {
                    output_format = value.parse().map_err(PipelineError::Usage)?;
                }
            }
            "-a" => {
                let value = args.next().unwrap_or_default();
                operation = Some(value.parse().map_err(PipelineError::Usage)?);
            }
            other => {
                warn!("unknown option: {other} will be ignored");
            }
        }
    }

    let operation = operation
        .ok_or_else(|| PipelineError::Usage("missing operation: pass -a sum|minmax|lt4".to_string()))?;

    Ok(Config {
        source,
        sink,
        input_format,
        output_format,
        operation,
    })
}
