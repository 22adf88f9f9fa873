//! End-to-end pipelines: read a simulator output, shape it, render or print it

use crate::datasets::{Dataset, TIMESERIES_COLUMNS};
use evodist_core::{Error, Result};
use evodist_histogram::{
    column_densities, density_distribution, BinningPolicy, ColumnDensities, DensityDistribution,
};
use evodist_io::TableReader;
use evodist_viz::{Chart, DistributionRenderer, Figure, Series};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// How `bin` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `key d1 .. dn` line per bin
    #[default]
    Table,
    /// The normalized rows as JSON
    Json,
}

/// Reads inputs with one reader and draws them with one renderer
#[derive(Debug, Clone, Default)]
pub struct Pipeline<R> {
    reader: TableReader,
    renderer: R,
}

impl<R: DistributionRenderer> Pipeline<R> {
    pub fn new(reader: TableReader, renderer: R) -> Self {
        Self { reader, renderer }
    }

    #[cfg(test)]
    fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Bin raw `(value, weight)` samples with the dataset's binning, normalize
    /// them and plot the densities
    ///
    /// `target_bins` only matters for linear binning.
    #[instrument(skip(self, input, output), fields(input = %input.display()))]
    pub fn plot_binned(
        &self,
        dataset: Dataset,
        target_bins: usize,
        input: &Path,
        output: &Path,
    ) -> Result<DensityDistribution> {
        let policy = dataset.binning(target_bins).ok_or_else(|| {
            Error::InvalidParameter(format!("{dataset:?} is not binned from raw samples"))
        })?;
        let samples = self.reader.read_samples(input)?;
        let density = density_distribution(&samples, policy)?;
        debug!("{} samples fell into {} bins", samples.len(), density.len());

        let chart = Chart::density(dataset.title(), dataset.x_label(), &density);
        self.renderer.render(&Figure::from(chart), output)?;
        info!("Plotted {} bins from {}", density.len(), input.display());
        Ok(density)
    }

    /// Plot a histogram the simulator already aggregated
    #[instrument(skip(self, input, output), fields(input = %input.display()))]
    pub fn plot_pre_binned(&self, dataset: Dataset, input: &Path, output: &Path) -> Result<()> {
        let histogram = self.reader.read_histogram(input)?;
        let chart = Chart::pre_binned(dataset.title(), dataset.x_label(), &histogram);
        self.renderer.render(&Figure::from(chart), output)?;
        info!("Plotted {} points from {}", histogram.len(), input.display());
        Ok(())
    }

    /// Plot species count above link density and clustering coefficient
    #[instrument(skip(self, input, output), fields(input = %input.display()))]
    pub fn plot_timeseries(&self, input: &Path, output: &Path, time_divisor: f64) -> Result<()> {
        let series = self
            .reader
            .read_timeseries(input, &TIMESERIES_COLUMNS)?
            .rescale_time(time_divisor)?;
        let x_label = Dataset::TimeSeries.x_label();

        let column = |index: usize| {
            let label = &series.labels()[index];
            let points = series.column_xy(index).unwrap_or_default();
            Series::new(label.as_str(), points)
        };

        let species = Chart::new("Number of species")
            .x_label(x_label)
            .y_label("species")
            .series(column(0));
        let structure = Chart::new("Network structure")
            .x_label(x_label)
            .y_label("value")
            .series(column(1))
            .series(column(2));

        self.renderer
            .render(&Figure::new(vec![species, structure]), output)?;
        info!("Plotted {} time steps from {}", series.len(), input.display());
        Ok(())
    }
}

/// Bin a multi-column table and print the normalized rows
#[instrument(skip(reader, input, out), fields(input = %input.display()))]
pub fn bin_columns<W: Write>(
    reader: &TableReader,
    input: &Path,
    policy: BinningPolicy,
    format: OutputFormat,
    out: &mut W,
) -> Result<ColumnDensities> {
    let rows = reader.read_weighted_rows(input)?;
    let densities = column_densities(&rows, policy)?;
    debug!("{} rows fell into {} bins", rows.len(), densities.len());

    match format {
        OutputFormat::Table => write!(out, "{densities}")?,
        OutputFormat::Json => {
            write_json(out, densities.rows())?;
            writeln!(out)?;
        }
    }
    Ok(densities)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(out, value)
        .map_err(|e| Error::Other(anyhow::anyhow!("cannot encode JSON: {e}")))
}
