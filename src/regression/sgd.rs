use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::regression::dataset::Dataset;

/// A single-variable linear model, y = w*x + b.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub w: f64,
    pub b: f64,
}

impl LinearModel {
    pub fn new(w: f64, b: f64) -> LinearModel {
        LinearModel { w, b }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }
}

/// The two gradients produced by one update step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSample {
    pub dl_dw: f64,
    pub dl_db: f64,
}

/// Hyperparameters for a `train` run.
pub struct SgdConfig {
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            learning_rate: 1e-4,
            iterations: 200,
        }
    }
}

/// Everything a training run produces: the fitted model, the per-iteration
/// gradient history and the approximate epoch count
/// (iterations / dataset length, integer division).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResult {
    pub model: LinearModel,
    pub history: Vec<GradientSample>,
    pub epochs: usize,
}

impl TrainResult {
    /// Serializes the result to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

/// One SGD step on sample `j`, using the squared error of that sample alone:
///
///   dl_dw = -2 * x[j] * (y[j] - (w*x[j] + b))
///   dl_db = -2 * (y[j] - (w*x[j] + b))
///
/// Pure: the same `(dataset, model, alpha, j)` always yields the same output.
///
/// # Panics
/// Panics if `j` is out of bounds.
pub fn update_at(
    dataset: &Dataset,
    model: LinearModel,
    alpha: f64,
    j: usize,
) -> (LinearModel, GradientSample) {
    let x = dataset.features[j];
    let y = dataset.labels[j];

    let residual = y - model.predict(x);
    let gradient = GradientSample {
        dl_dw: -2.0 * x * residual,
        dl_db: -2.0 * residual,
    };

    let updated = LinearModel {
        w: model.w - alpha * gradient.dl_dw,
        b: model.b - alpha * gradient.dl_db,
    };

    (updated, gradient)
}

/// One SGD step on a sample index drawn uniformly from the injected `rng`.
pub fn update_wb<R: Rng + ?Sized>(
    dataset: &Dataset,
    model: LinearModel,
    alpha: f64,
    rng: &mut R,
) -> (LinearModel, GradientSample) {
    let j = rng.gen_range(0..dataset.len());
    update_at(dataset, model, alpha, j)
}

/// Fits `y = w*x + b` from `w = 0, b = 0` with `config.iterations` updates,
/// collecting the gradient history along the way.
///
/// # Panics
/// Panics if the dataset is empty.
pub fn train<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &SgdConfig,
    rng: &mut R,
) -> TrainResult {
    assert!(!dataset.is_empty(), "dataset must not be empty");

    let mut model = LinearModel::new(0.0, 0.0);
    let mut history = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let (updated, gradient) = update_wb(dataset, model, config.learning_rate, rng);
        model = updated;
        history.push(gradient);
    }

    TrainResult {
        model,
        history,
        epochs: config.iterations / dataset.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn toy_dataset() -> Dataset {
        Dataset::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0])
    }

    #[test]
    fn single_step_on_known_sample() {
        // j = 1 picks x = 2, y = 4; prediction is 0, so
        // dl_dw = -2*2*4 = -16 and dl_db = -2*4 = -8.
        let (model, gradient) = update_at(&toy_dataset(), LinearModel::new(0.0, 0.0), 0.01, 1);

        assert_eq!(gradient.dl_dw, -16.0);
        assert_eq!(gradient.dl_db, -8.0);
        assert!((model.w - 0.16).abs() < 1e-12);
        assert!((model.b - 0.08).abs() < 1e-12);
    }

    #[test]
    fn update_at_is_deterministic() {
        let dataset = toy_dataset();
        let start = LinearModel::new(0.3, -0.1);
        let first = update_at(&dataset, start, 1e-3, 2);
        let second = update_at(&dataset, start, 1e-3, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_learning_rate_leaves_parameters_unchanged() {
        let dataset = toy_dataset();
        let config = SgdConfig { learning_rate: 0.0, iterations: 50 };
        let mut rng = StdRng::seed_from_u64(7);

        let result = train(&dataset, &config, &mut rng);
        assert_eq!(result.model, LinearModel::new(0.0, 0.0));
        assert_eq!(result.history.len(), 50);
    }

    #[test]
    fn epoch_count_is_integer_division() {
        let dataset = toy_dataset();
        let config = SgdConfig { learning_rate: 1e-4, iterations: 200 };
        let mut rng = StdRng::seed_from_u64(0);

        let result = train(&dataset, &config, &mut rng);
        assert_eq!(result.epochs, 200 / 3);
        assert_eq!(result.history.len(), 200);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dataset = toy_dataset();
        let config = SgdConfig::default();

        let a = train(&dataset, &config, &mut StdRng::seed_from_u64(42));
        let b = train(&dataset, &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.model, b.model);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn training_approaches_the_noise_free_line() {
        // y = 2x exactly; with a sane learning rate the slope should move
        // decisively toward 2 within a few hundred steps.
        let dataset = toy_dataset();
        let config = SgdConfig { learning_rate: 0.02, iterations: 500 };
        let mut rng = StdRng::seed_from_u64(1);

        let result = train(&dataset, &config, &mut rng);
        assert!((result.model.w - 2.0).abs() < 0.2, "w = {}", result.model.w);
        assert!(result.model.b.abs() < 0.5, "b = {}", result.model.b);
    }

    #[test]
    #[should_panic(expected = "dataset must not be empty")]
    fn empty_dataset_panics() {
        let dataset = Dataset::new(vec![], vec![]);
        let mut rng = StdRng::seed_from_u64(0);
        train(&dataset, &SgdConfig::default(), &mut rng);
    }
}
