use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use super::error::Error;
use common::types::SizeResult;

const TITLE: &str = "AoS vs SoA Performance in HPC Optimization";
const X_LABEL: &str = "Number of elements";
const Y_LABEL: &str = "Execution time (seconds)";

/// Output size in pixels (8x5 inches at 100 dpi).
const CHART_SIZE: (u32, u32) = (800, 500);
const MARKER_RADIUS: u32 = 4;

/// Headroom added above the largest value on each axis.
const AXIS_PADDING: f64 = 1.05;

const AOS_COLOR: RGBColor = RGBColor(31, 119, 180);
const SOA_COLOR: RGBColor = RGBColor(255, 127, 14);

/// The two line series drawn on the chart, as `(size, mean seconds)` points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub aos: Vec<(f64, f64)>,
    pub soa: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn from_results(results: &[SizeResult]) -> Self {
        ChartSeries {
            aos: results.iter().map(|r| (r.n as f64, r.aos_mean)).collect(),
            soa: results.iter().map(|r| (r.n as f64, r.soa_mean)).collect(),
        }
    }

    /// Axis ranges covering every point, starting at zero.
    ///
    /// Falls back to a unit range on an axis with no positive values, since a
    /// zero-width range cannot be mapped to pixels.
    pub fn axis_ranges(&self) -> (Range<f64>, Range<f64>) {
        let points = || self.aos.iter().chain(&self.soa);

        let x_max = points().map(|&(x, _)| x).fold(0.0, f64::max);
        let y_max = points()
            .map(|&(_, y)| y)
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max);

        (0.0..padded(x_max), 0.0..padded(y_max))
    }
}

fn padded(max: f64) -> f64 {
    if max > 0.0 { max * AXIS_PADDING } else { 1.0 }
}

/// Renders the mean-time chart to a PNG at `path`, overwriting any existing file.
pub fn render_chart(path: &Path, results: &[SizeResult]) -> Result<(), Error> {
    let series = ChartSeries::from_results(results);
    draw(path, &series).map_err(|e| Error::ChartError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn draw(path: &Path, series: &ChartSeries) -> Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) = series.axis_ranges();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(75)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.4}", y))
        .draw()?;

    for (label, points, color) in [
        ("AoS", &series.aos, AOS_COLOR),
        ("SoA", &series.soa, SOA_COLOR),
    ] {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, MARKER_RADIUS, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_results() -> Vec<SizeResult> {
        vec![
            SizeResult {
                n: 100,
                aos_mean: 0.002,
                soa_mean: 0.0005,
            },
            SizeResult {
                n: 200,
                aos_mean: 0.004,
                soa_mean: 0.001,
            },
        ]
    }

    #[test]
    fn test_empty_results_give_empty_series() {
        let series = ChartSeries::from_results(&[]);
        assert!(series.aos.is_empty());
        assert!(series.soa.is_empty());
        assert_eq!(series.axis_ranges(), (0.0..1.0, 0.0..1.0));
    }

    #[test]
    fn test_series_follow_result_order() {
        let results = [
            SizeResult {
                n: 100,
                aos_mean: 0.5,
                soa_mean: 0.25,
            },
            SizeResult {
                n: 200,
                aos_mean: 1.0,
                soa_mean: 0.5,
            },
        ];
        let series = ChartSeries::from_results(&results);

        assert_eq!(series.aos, vec![(100.0, 0.5), (200.0, 1.0)]);
        assert_eq!(series.soa, vec![(100.0, 0.25), (200.0, 0.5)]);
    }

    #[test]
    fn test_axis_ranges_cover_all_points() {
        let series = ChartSeries {
            aos: vec![(1000.0, 0.2)],
            soa: vec![(1000.0, 0.4)],
        };
        let (x, y) = series.axis_ranges();

        assert_eq!(x.start, 0.0);
        assert!(x.end > 1000.0);
        assert_eq!(y.start, 0.0);
        assert!(y.end > 0.4);
    }

    #[test]
    fn test_all_zero_means_still_have_a_y_range() {
        let series = ChartSeries {
            aos: vec![(0.0, 0.0)],
            soa: vec![(0.0, 0.0)],
        };
        assert_eq!(series.axis_ranges(), (0.0..1.0, 0.0..1.0));
    }

    #[test]
    fn test_render_chart_writes_png() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("chart.png");

        let result = render_chart(&path, &sample_results());
        assert!(result.is_ok(), "Rendering failed with error: {:?}", result.err());

        let bytes = fs::read(&path).expect("Chart file was not written");
        assert!(bytes.starts_with(b"\x89PNG"), "Output is not a PNG");
    }

    #[test]
    fn test_render_chart_with_no_results() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("empty.png");

        let result = render_chart(&path, &[]);
        assert!(result.is_ok(), "Rendering failed with error: {:?}", result.err());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_render_chart_overwrites_existing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("chart.png");
        fs::write(&path, "stale contents").unwrap();

        render_chart(&path, &sample_results()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }
}
