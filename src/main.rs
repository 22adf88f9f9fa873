use anyhow::{Context, Result};
use clap::Parser;
use evodist::cli::{Cli, Command, PathArgs, Settings};
use evodist::{bin_columns, Dataset, Pipeline};
use evodist_histogram::DEFAULT_TARGET_BINS;
use evodist_io::TableReader;
use evodist_viz::PngRenderer;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli.command, &cli.settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    let reader = TableReader::new(settings.table_format());
    let pipeline = Pipeline::new(reader.clone(), PngRenderer::new(settings.render_config()));

    match command {
        Command::LifetimeLinbin { paths, bins } => {
            plot_binned(&pipeline, Dataset::LifetimeLinear, bins, &paths)?
        }
        Command::LifetimeLogbin { paths } => {
            plot_binned(&pipeline, Dataset::LifetimeLog, DEFAULT_TARGET_BINS, &paths)?
        }
        Command::Diversity { paths } => plot_pre_binned(&pipeline, Dataset::Diversity, &paths)?,
        Command::Extinction { paths } => plot_pre_binned(&pipeline, Dataset::Extinction, &paths)?,
        Command::Timeseries {
            paths,
            time_divisor,
        } => {
            let (input, output) = paths.resolve(Dataset::TimeSeries);
            pipeline
                .plot_timeseries(&input, &output, time_divisor)
                .with_context(|| format!("plotting {}", input.display()))?;
        }
        Command::Bin {
            input,
            strategy,
            bins,
            format,
        } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            bin_columns(&reader, &input, strategy.policy(bins), format, &mut out)
                .with_context(|| format!("binning {}", input.display()))?;
            out.flush()?;
        }
    }
    Ok(())
}

fn plot_binned(
    pipeline: &Pipeline<PngRenderer>,
    dataset: Dataset,
    target_bins: usize,
    paths: &PathArgs,
) -> Result<()> {
    let (input, output) = paths.resolve(dataset);
    pipeline
        .plot_binned(dataset, target_bins, &input, &output)
        .with_context(|| format!("plotting {}", input.display()))?;
    Ok(())
}

fn plot_pre_binned(
    pipeline: &Pipeline<PngRenderer>,
    dataset: Dataset,
    paths: &PathArgs,
) -> Result<()> {
    let (input, output) = paths.resolve(dataset);
    pipeline
        .plot_pre_binned(dataset, &input, &output)
        .with_context(|| format!("plotting {}", input.display()))
}
