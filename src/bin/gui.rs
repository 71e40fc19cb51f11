use mandelbrot_viewer::{MandelbrotConfig, run_gui};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run_gui(MandelbrotConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "viewer exited");
            ExitCode::FAILURE
        }
    }
}
