use clap::Parser;
use mandelbrot_viewer::{CliArgs, CliRenderController, MandelbrotConfig, PamFilePresenter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MandelbrotConfig::default().with_max_iterations(args.max_iterations);
    let mut controller = CliRenderController::new(PamFilePresenter::new(), config);

    let summary = match controller.generate(&args.clicks) {
        Ok(summary) => summary,
        Err(err) => {
            error!(%err, "render failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = controller.write(&args.output) {
        error!(%err, path = %args.output.display(), "could not write image");
        return ExitCode::FAILURE;
    }

    info!(
        path = %args.output.display(),
        zoom_index = %summary.zoom_index,
        rejected_clicks = summary.rejected_clicks,
        center_x = %summary.center_labels.x_text(),
        center_y = %summary.center_labels.y_text(),
        "image written"
    );

    ExitCode::SUCCESS
}
