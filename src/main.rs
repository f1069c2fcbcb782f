use std::error::Error as _;
use std::process;

use floatpipe::app;
use floatpipe::config;
use floatpipe::error::PipelineError;

fn main() {
    env_logger::init();

    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => fail(err),
    };

    if let Err(err) = app::run(&config) {
        fail(err);
    }
}

/// Log the error with its full cause chain and terminate with its code.
fn fail(err: PipelineError) -> ! {
    log::error!("{err} (exit code {})", err.exit_code());
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("caused by: {cause}");
        source = cause.source();
    }
    process::exit(err.exit_code());
}
