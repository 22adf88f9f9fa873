//! PNG rendering with plotters
//!
//! Uses the bitmap backend so charts can be drawn in headless environments.

use crate::chart::{axis_range, Chart, Figure, Series};
use crate::config::RenderConfig;
use evodist_core::{AxisScale, Error, Result};
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::{info, instrument};

const COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// Draws figures and writes them to an image file
pub trait DistributionRenderer {
    /// Render `figure` to `path`, replacing any existing file
    fn render(&self, figure: &Figure, path: &Path) -> Result<()>;
}

/// Renders figures to PNG files
#[derive(Debug, Clone, Default)]
pub struct PngRenderer {
    config: RenderConfig,
}

impl PngRenderer {
    /// Create a renderer with the given configuration
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl DistributionRenderer for PngRenderer {
    #[instrument(skip(self, figure, path), fields(path = %path.display(), panels = figure.panels.len()))]
    fn render(&self, figure: &Figure, path: &Path) -> Result<()> {
        if figure.panels.is_empty() {
            return Err(Error::InvalidParameter("figure has no panels".to_string()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(Error::rendering(path, "output directory does not exist"));
            }
        }

        // Resolve every panel before touching the file
        let panels = figure
            .panels
            .iter()
            .map(PanelLayout::resolve)
            .collect::<Result<Vec<_>>>()?;

        let root = BitMapBackend::new(path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::rendering(path, e))?;

        let areas = root.split_evenly((panels.len(), 1));
        for (area, panel) in areas.iter().zip(&panels) {
            panel
                .draw(area, &self.config)
                .map_err(|e| Error::rendering(path, e))?;
        }

        root.present().map_err(|e| Error::rendering(path, e))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// A chart whose points and axis ranges have been checked for drawing
struct PanelLayout<'c> {
    chart: &'c Chart,
    series: Vec<Series>,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl<'c> PanelLayout<'c> {
    fn resolve(chart: &'c Chart) -> Result<Self> {
        let series = chart.drawable_series();
        let points = || series.iter().flat_map(|s| s.points.iter().copied());

        let x_range = axis_range(points().map(|(x, _)| x), chart.x_scale);
        let y_range = axis_range(points().map(|(_, y)| y), chart.y_scale);
        match (x_range, y_range) {
            (Some(x_range), Some(y_range)) => Ok(Self {
                chart,
                series,
                x_range,
                y_range,
            }),
            _ => Err(Error::InvalidParameter(format!(
                "chart '{}' has no drawable points",
                chart.title
            ))),
        }
    }

    fn draw(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        config: &RenderConfig,
    ) -> std::result::Result<(), String> {
        let x = self.x_range.0..self.x_range.1;
        let y = self.y_range.0..self.y_range.1;

        match (self.chart.x_scale, self.chart.y_scale) {
            (AxisScale::Linear, AxisScale::Linear) => self.draw_on(area, config, x, y),
            (AxisScale::Linear, AxisScale::Logarithmic) => {
                self.draw_on(area, config, x, y.log_scale())
            }
            (AxisScale::Logarithmic, AxisScale::Linear) => {
                self.draw_on(area, config, x.log_scale(), y)
            }
            (AxisScale::Logarithmic, AxisScale::Logarithmic) => {
                self.draw_on(area, config, x.log_scale(), y.log_scale())
            }
        }
    }

    fn draw_on<X, Y>(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        config: &RenderConfig,
        x_spec: X,
        y_spec: Y,
    ) -> std::result::Result<(), String>
    where
        X: AsRangedCoord<Value = f64>,
        Y: AsRangedCoord<Value = f64>,
        X::CoordDescType: ValueFormatter<f64>,
        Y::CoordDescType: ValueFormatter<f64>,
    {
        let font = config.font.as_str();
        let mut chart = ChartBuilder::on(area)
            .caption(&self.chart.title, (font, config.caption_size))
            .margin(config.margin)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_spec, y_spec)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_desc(self.chart.x_label.as_str())
            .y_desc(self.chart.y_label.as_str())
            .axis_desc_style((font, config.label_size))
            .x_label_formatter(&format_tick)
            .y_label_formatter(&format_tick)
            .draw()
            .map_err(|e| e.to_string())?;

        for (index, series) in self.series.iter().enumerate() {
            let color = COLORS[index % COLORS.len()];
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), color.stroke_width(2)))
                .map_err(|e| e.to_string())?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, config.marker_size, color.filled())),
                )
                .map_err(|e| e.to_string())?;
        }

        if self.series.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font((font, config.label_size))
                .draw()
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

// Whole numbers print without decimals, tiny or huge values in scientific notation
fn format_tick(value: &f64) -> String {
    let v = *value;
    if v == 0.0 {
        "0".to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e7 {
        format!("{v:.0}")
    } else if v.abs() >= 1e-3 && v.abs() < 1e7 {
        format!("{v:.3}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        format!("{v:.2e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evodist_core::Sample;
    use evodist_histogram::{density_distribution, BinningPolicy};
    use tempfile::TempDir;

    fn assert_png(path: &Path) {
        let bytes = std::fs::read(path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    fn lifetimes() -> Vec<Sample> {
        (1..=300)
            .map(|v| Sample::new(v as f64, (301 - v) as f64))
            .collect()
    }

    #[test]
    fn test_renders_log_log_density() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lifetime_logbin.png");
        let density = density_distribution(&lifetimes(), BinningPolicy::Log).unwrap();
        let chart = Chart::density("Lifetime distribution", "lifetime", &density);
        assert_eq!(chart.x_scale, AxisScale::Logarithmic);

        PngRenderer::default()
            .render(&Figure::from(chart), &path)
            .unwrap();
        assert_png(&path);
    }

    #[test]
    fn test_renders_linear_density() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lifetime_linbin.png");
        let density = density_distribution(&lifetimes(), BinningPolicy::linear()).unwrap();
        let chart = Chart::density("Lifetime distribution", "lifetime", &density);
        assert_eq!(chart.x_scale, AxisScale::Linear);

        let renderer = PngRenderer::new(RenderConfig::default().with_size(640, 480));
        renderer.render(&Figure::from(chart), &path).unwrap();
        assert_png(&path);
    }

    #[test]
    fn test_renders_stacked_panels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeseries.png");
        let time: Vec<f64> = (0..50).map(|t| t as f64).collect();
        let species = Chart::new("Number of species")
            .series(Series::new("# of species", time.iter().map(|&t| (t, 10.0 + t)).collect()));
        let structure = Chart::new("Network structure")
            .series(Series::new("link density", time.iter().map(|&t| (t, 0.5 + t / 100.0)).collect()))
            .series(Series::new("CC", time.iter().map(|&t| (t, 0.1)).collect()));

        PngRenderer::default()
            .render(&Figure::new(vec![species, structure]), &path)
            .unwrap();
        assert_png(&path);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(&0.0), "0");
        assert_eq!(format_tick(&128.0), "128");
        assert_eq!(format_tick(&0.5), "0.5");
        assert_eq!(format_tick(&0.125), "0.125");
        assert_eq!(format_tick(&2.5e-5), "2.50e-5");
    }

    #[test]
    fn test_missing_output_directory_is_rendering_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        let figure = Figure::from(
            Chart::new("t").series(Series::new("s", vec![(1.0, 1.0), (2.0, 3.0)])),
        );

        let err = PngRenderer::default().render(&figure, &path).unwrap_err();
        assert!(matches!(err, Error::Rendering(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_drawable_points() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plot.png");
        let figure = Figure::from(
            Chart::new("t")
                .y_scale(AxisScale::Logarithmic)
                .series(Series::new("s", vec![(1.0, 0.0)])),
        );

        let err = PngRenderer::default().render(&figure, &path).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(!path.exists());

        let err = PngRenderer::default().render(&Figure::new(vec![]), &path).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
