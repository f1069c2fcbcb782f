use std::io;

use log::info;

use crate::config::{Config, Sink, Source};
use crate::data::{decode, encode, ops};
use crate::error::{PipelineError, ReadError, WriteError};

/// Run one invocation of the pipeline:
/// source → decode → aggregate → encode → sink.
pub fn run(config: &Config) -> Result<(), PipelineError> {
    let input = match &config.source {
        Source::Stdin => {
            println!(
                "Enter float numbers separated by \",\" \
                 (blank spaces are ignored, CTRL+D ends the list):"
            );
            let stdin = io::stdin();
            let values = decode::decode_stream(stdin.lock(), config.input_format)?;
            // Echo the decoded list so the user sees what the operation
            // will run on.
            info!("input list: {values}");
            values
        }
        Source::File(path) => decode::decode_file(path, config.input_format)?,
        Source::Url => return Err(ReadError::UrlUnsupported.into()),
    };

    let result = ops::apply(config.operation, &input);
    let text = encode::encode(&result, config.output_format, config.operation)?;

    match &config.sink {
        Sink::Stdout => encode::write_stdout(&result, &text)?,
        Sink::File(base) => {
            encode::write_file(base, config.output_format, &text)?;
        }
        Sink::Url => return Err(WriteError::UrlUnsupported.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::PathBuf;

    use crate::config::{Config, Sink, Source};
    use crate::data::model::Format;
    use crate::data::ops::Operation;

    use super::*;

    fn file_to_file(input: PathBuf, output: PathBuf, op: Operation) -> Config {
        Config {
            source: Source::File(input),
            sink: Sink::File(output),
            input_format: Format::DelimitedText,
            output_format: Format::DelimitedText,
            operation: op,
        }
    }

    #[test]
    fn url_source_is_read_error() {
        let config = Config {
            source: Source::Url,
            sink: Sink::Stdout,
            input_format: Format::DelimitedText,
            output_format: Format::DelimitedText,
            operation: Operation::Sum,
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn url_sink_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "1.0,2.0\n").unwrap();

        let config = Config {
            source: Source::File(input),
            sink: Sink::Url,
            input_format: Format::DelimitedText,
            output_format: Format::DelimitedText,
            operation: Operation::Sum,
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn sum_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let mut f = std::fs::File::create(&input).unwrap();
        writeln!(f, "1.0,2.0,3.0").unwrap();

        let config = file_to_file(input, dir.path().join("out"), Operation::Sum);
        run(&config).unwrap();

        let written = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "6\n");
    }
}
