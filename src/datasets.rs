//! Presets for the files the simulator writes

use evodist_histogram::BinningPolicy;
use std::path::PathBuf;

/// A simulator output and the plot made from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Species lifetimes on linear bins
    LifetimeLinear,
    /// Species lifetimes on power-of-two bins
    LifetimeLog,
    /// Number of coexisting species, aggregated by the simulator
    Diversity,
    /// Extinction avalanche sizes, aggregated by the simulator
    Extinction,
    /// Species count, link density and clustering over time
    TimeSeries,
}

impl Dataset {
    /// File read when no input is given
    pub fn default_input(&self) -> PathBuf {
        PathBuf::from(match self {
            Self::LifetimeLinear | Self::LifetimeLog => "lifetime.dat",
            Self::Diversity => "diversity_histo.dat",
            Self::Extinction => "extinction_histo.dat",
            Self::TimeSeries => "timeseries.dat",
        })
    }

    /// Image written when no output is given
    pub fn default_output(&self) -> PathBuf {
        PathBuf::from(match self {
            Self::LifetimeLinear => "lifetime_linbin.png",
            Self::LifetimeLog => "lifetime_logbin.png",
            Self::Diversity => "diversity_histo.png",
            Self::Extinction => "extinction_histo.png",
            Self::TimeSeries => "timeseries.png",
        })
    }

    /// Chart caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::LifetimeLinear => "Lifetime distribution (linear bins)",
            Self::LifetimeLog => "Lifetime distribution (log bins)",
            Self::Diversity => "Diversity distribution",
            Self::Extinction => "Extinction size distribution",
            Self::TimeSeries => "Time series",
        }
    }

    /// Description of the x axis
    pub fn x_label(&self) -> &'static str {
        match self {
            Self::LifetimeLinear | Self::LifetimeLog => "lifetime",
            Self::Diversity => "number of species",
            Self::Extinction => "extinction size",
            Self::TimeSeries => "Time (thousand steps)",
        }
    }

    /// Binning applied before plotting, if any
    pub fn binning(&self, target_bins: usize) -> Option<BinningPolicy> {
        match self {
            Self::LifetimeLinear => Some(BinningPolicy::Linear { target_bins }),
            Self::LifetimeLog => Some(BinningPolicy::Log),
            Self::Diversity | Self::Extinction | Self::TimeSeries => None,
        }
    }
}

/// Metric columns of `timeseries.dat`, after the time column
pub const TIMESERIES_COLUMNS: [&str; 3] = ["# of species", "link density", "CC"];
