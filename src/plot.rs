use plotters::prelude::*;

use crate::regression::dataset::Dataset;
use crate::regression::sgd::LinearModel;

/// The fitted line is always drawn over this segment, matching the driver's
/// fixed 0..25 range for the temperature difference.
const LINE_X_START: f64 = 0.0;
const LINE_X_END: f64 = 25.0;

/// Renders an 800x600 SVG: a scatter of the raw samples plus the fitted line
/// from x = 0 to x = 25.
pub fn render_fit(
    path: &str,
    dataset: &Dataset,
    model: &LinearModel,
) -> Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) = axis_ranges(dataset, model);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("SGD linear fit", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("feature")
        .y_desc("label")
        .draw()?;

    chart.draw_series(
        dataset
            .features
            .iter()
            .zip(dataset.labels.iter())
            .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    chart.draw_series(LineSeries::new(
        [LINE_X_START, LINE_X_END].map(|x| (x, model.predict(x))),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

/// Axis ranges covering both the samples and the fitted segment, with a
/// small margin so edge points are not clipped.
fn axis_ranges(
    dataset: &Dataset,
    model: &LinearModel,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let xs = dataset
        .features
        .iter()
        .copied()
        .chain([LINE_X_START, LINE_X_END]);
    let ys = dataset.labels.iter().copied().chain(
        [LINE_X_START, LINE_X_END]
            .iter()
            .map(|&x| model.predict(x)),
    );

    (padded(xs), padded(ys))
}

fn padded(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }

    let span = if max > min { max - min } else { 1.0 };
    (min - 0.05 * span)..(max + 0.05 * span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_non_empty_svg() {
        let dataset = Dataset::new(vec![1.0, 5.0, 12.0], vec![90.0, 470.0, 1110.0]);
        let model = LinearModel::new(92.0, 4.0);
        let path = std::env::temp_dir().join("gradlab_render_fit_test.svg");
        let path = path.to_str().unwrap().to_string();

        render_fit(&path, &dataset, &model).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn padded_range_covers_degenerate_input() {
        let r = padded([3.0, 3.0].into_iter());
        assert!(r.start < 3.0 && r.end > 3.0);
    }
}
