//! Fixed inputs and reference constants for the submission checks.
//!
//! The graded network has layer sizes [1, 30, 1]. Its parameters are not
//! learned: the weight matrix for layer k has shape (units_k, units_{k-1})
//! and is filled row-major with consecutive integers starting at 0, and the
//! bias vectors are constant-filled (3.3 for the hidden layer, 5.4 for the
//! output layer). The hidden activation is tanh, the output is linear.
//!
//! The expected sums below are grader constants and must stay verbatim;
//! a submission passes when each returned quantity's element sum matches
//! within the per-check tolerance.
//!
//! The cost fixture rows are placed a constant residual apart so that the
//! mean squared error over them equals the cost constant. In the backward
//! fixture the label sits 505.2 below the cached output, so the output-bias
//! gradient 2 * (a2 - y) reproduces its constant; the three remaining
//! gradient constants come from the grading key and are compared as-is,
//! they are not derivable from the cached forward values.

use crate::math::matrix::Matrix;

pub const LAYER_SIZES: [usize; 3] = [1, 30, 1];
pub const BIAS_FILLS: [f64; 2] = [3.3, 5.4];

pub const FORWARD_TOLERANCE: f64 = 1e-9;
pub const COST_TOLERANCE: f64 = 1e-2;
pub const BACKWARD_TOLERANCE: f64 = 1e-9;

/// Expected element sums of (n1, a1, n2, a2) for input [[5]].
pub const FORWARD_SUMS: [f64; 4] = [
    2274.0,
    29.997282836572317,
    440.3999998764675,
    440.3999998764675,
];

pub const COST_EXPECTED: f64 = 5362091.033332357;

/// Expected element sums of (dW1, dW2, db1, db2).
pub const BACKWARD_SUMS: [f64; 4] = [
    29101.500246481486,
    8711353.5,
    162.00004929629756,
    1010.4,
];

/// The fixed network a forward/backward submission is graded against.
pub struct NetworkFixture {
    /// One weight matrix per non-input layer, shape (units_k, units_{k-1}).
    pub weights: Vec<Matrix>,
    /// One bias column per non-input layer, shape (units_k, 1).
    pub biases: Vec<Matrix>,
    /// The graded input, a 1x1 matrix holding 5.0.
    pub input: Matrix,
}

pub fn network_fixture() -> NetworkFixture {
    let weights = LAYER_SIZES
        .windows(2)
        .map(|pair| Matrix::sequential(pair[1], pair[0]))
        .collect();
    let biases = LAYER_SIZES
        .iter()
        .skip(1)
        .zip(BIAS_FILLS.iter())
        .map(|(&units, &fill)| Matrix::filled(units, 1, fill))
        .collect();

    NetworkFixture {
        weights,
        biases,
        input: Matrix::from_data(vec![vec![5.0]]),
    }
}

/// Pre-activations and activations of both non-input layers.
pub struct ForwardValues {
    pub n1: Matrix,
    pub a1: Matrix,
    pub n2: Matrix,
    pub a2: Matrix,
}

/// The known-good forward pass over a fixture: z = Wx + b per layer, tanh on
/// the hidden layer, identity on the output. Used to seed the backward
/// fixture's cached values and as the reference a submission is compared to.
pub fn reference_forward(fixture: &NetworkFixture) -> ForwardValues {
    let n1 = fixture.weights[0].clone() * fixture.input.clone() + fixture.biases[0].clone();
    let a1 = n1.map(f64::tanh);
    let n2 = fixture.weights[1].clone() * a1.clone() + fixture.biases[1].clone();
    let a2 = n2.clone();

    ForwardValues { n1, a1, n2, a2 }
}

/// Inputs handed to a backward-pass submission: the fixed network, the
/// cached forward values, a label and the learning rate.
pub struct BackwardFixture {
    pub network: NetworkFixture,
    pub cache: ForwardValues,
    pub label: Matrix,
    pub learning_rate: f64,
}

pub fn backward_fixture() -> BackwardFixture {
    let network = network_fixture();
    let cache = reference_forward(&network);
    // Residual of exactly 505.2, so 2 * (a2 - y) sums to BACKWARD_SUMS[3].
    let label = cache.a2.map(|v| v - 505.2);

    BackwardFixture {
        network,
        cache,
        label,
        learning_rate: 0.005,
    }
}

/// Inputs handed to a cost submission: one row of predictions and one row of
/// labels, 30 samples each.
pub struct CostFixture {
    pub predictions: Matrix,
    pub labels: Matrix,
}

pub fn cost_fixture() -> CostFixture {
    // Every label sits the same residual below its prediction, so the mean
    // squared error over the rows is residual^2 = COST_EXPECTED.
    let residual = COST_EXPECTED.sqrt();

    CostFixture {
        predictions: Matrix::filled(1, 30, 440.4),
        labels: Matrix::filled(1, 30, 440.4 - residual),
    }
}
