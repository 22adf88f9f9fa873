//! Command-line arguments

use crate::commands::OutputFormat;
use crate::datasets::Dataset;
use clap::{Args, Parser, Subcommand, ValueEnum};
use evodist_histogram::{BinningPolicy, DEFAULT_TARGET_BINS};
use evodist_io::TableFormat;
use evodist_viz::RenderConfig;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "evodist", version, about = "Plot binned distributions of extinction simulation outputs")]
pub struct Cli {
    /// Most verbose log level to print
    #[arg(long, global = true, default_value_t = Level::INFO)]
    pub log_level: Level,

    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Species lifetimes on fixed-width bins
    LifetimeLinbin {
        #[command(flatten)]
        paths: PathArgs,
        /// Number of bins spanning the largest lifetime
        #[arg(long, default_value_t = DEFAULT_TARGET_BINS)]
        bins: usize,
    },
    /// Species lifetimes on power-of-two bins
    LifetimeLogbin {
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Diversity histogram aggregated by the simulator
    Diversity {
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Extinction size histogram aggregated by the simulator
    Extinction {
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Species count, link density and clustering over time
    Timeseries {
        #[command(flatten)]
        paths: PathArgs,
        /// Time values are divided by this before plotting
        #[arg(long, default_value_t = 1000.0)]
        time_divisor: f64,
    },
    /// Bin a multi-column table and print densities instead of plotting
    Bin {
        /// Table of `value w1 .. wn` rows
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Strategy::FloorLog)]
        strategy: Strategy,
        /// Number of bins for the linear strategy
        #[arg(long, default_value_t = DEFAULT_TARGET_BINS)]
        bins: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Input layout and image size shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Field separator of input tables: a single ASCII character, `space` or `tab`
    #[arg(long, global = true, default_value = "space", value_parser = parse_delimiter)]
    pub delimiter: u8,
    /// Lines starting with this character are skipped
    #[arg(long, global = true, default_value = "#", value_parser = parse_ascii)]
    pub comment: u8,
    /// Treat every line as data
    #[arg(long, global = true, conflicts_with = "comment")]
    pub no_comment: bool,
    /// Image width in pixels
    #[arg(long, global = true, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(64..))]
    pub width: u32,
    /// Image height in pixels
    #[arg(long, global = true, default_value_t = 768, value_parser = clap::value_parser!(u32).range(64..))]
    pub height: u32,
}

impl Settings {
    /// Table layout for every reader
    pub fn table_format(&self) -> TableFormat {
        let comment = (!self.no_comment).then_some(self.comment);
        TableFormat::default()
            .with_delimiter(self.delimiter)
            .with_comment(comment)
    }

    /// Rendering settings for every plot
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default().with_size(self.width, self.height)
    }
}

fn parse_ascii(arg: &str) -> Result<u8, String> {
    match arg.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got '{arg}'")),
    }
}

fn parse_delimiter(arg: &str) -> Result<u8, String> {
    match arg {
        "space" => Ok(b' '),
        "tab" | "\\t" => Ok(b'\t'),
        _ => parse_ascii(arg),
    }
}

#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Input table; defaults to the file the simulator writes
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output image; defaults to a name derived from the dataset
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PathArgs {
    /// Input and output paths, falling back to the dataset defaults
    pub fn resolve(&self, dataset: Dataset) -> (PathBuf, PathBuf) {
        (
            self.input.clone().unwrap_or_else(|| dataset.default_input()),
            self.output.clone().unwrap_or_else(|| dataset.default_output()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Linear,
    Log,
    FloorLog,
}

impl Strategy {
    pub fn policy(self, bins: usize) -> BinningPolicy {
        match self {
            Self::Linear => BinningPolicy::Linear { target_bins: bins },
            Self::Log => BinningPolicy::Log,
            Self::FloorLog => BinningPolicy::FloorLog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["evodist", "lifetime-linbin"]);
        assert_eq!(cli.log_level, Level::INFO);
        match cli.command {
            Command::LifetimeLinbin { paths, bins } => {
                assert_eq!(bins, 100);
                let (input, output) = paths.resolve(Dataset::LifetimeLinear);
                assert_eq!(input, PathBuf::from("lifetime.dat"));
                assert_eq!(output, PathBuf::from("lifetime_linbin.png"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bin_arguments() {
        let cli = Cli::parse_from([
            "evodist",
            "bin",
            "--input",
            "sizes.dat",
            "--strategy",
            "linear",
            "--bins",
            "20",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, Level::DEBUG);
        match cli.command {
            Command::Bin {
                strategy,
                bins,
                format,
                ..
            } => {
                assert_eq!(strategy.policy(bins), BinningPolicy::Linear { target_bins: 20 });
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_settings_defaults() {
        let cli = Cli::parse_from(["evodist", "diversity"]);
        assert_eq!(cli.settings.table_format(), TableFormat::default());
        assert_eq!(cli.settings.render_config(), RenderConfig::default());
    }

    #[test]
    fn test_settings_build_configs() {
        let cli = Cli::parse_from([
            "evodist",
            "extinction",
            "--delimiter",
            ",",
            "--no-comment",
            "--width",
            "640",
            "--height",
            "480",
        ]);
        let format = cli.settings.table_format();
        assert_eq!(format.delimiter, b',');
        assert_eq!(format.comment, None);

        let config = cli.settings.render_config();
        assert_eq!((config.width, config.height), (640, 480));

        let cli = Cli::parse_from(["evodist", "diversity", "--delimiter", "tab", "--comment", "%"]);
        let format = cli.settings.table_format();
        assert_eq!(format, TableFormat::tsv().with_comment(Some(b'%')));
    }

    #[test]
    fn test_settings_reject_bad_values() {
        assert!(Cli::try_parse_from(["evodist", "diversity", "--delimiter", ";;"]).is_err());
        assert!(Cli::try_parse_from(["evodist", "diversity", "--delimiter", "é"]).is_err());
        assert!(Cli::try_parse_from(["evodist", "diversity", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["evodist", "diversity", "--comment", "é"]).is_err());
    }

    #[test]
    fn test_bin_requires_input() {
        assert!(Cli::try_parse_from(["evodist", "bin"]).is_err());
    }
}
