use std::fmt;

use crate::math::matrix::Matrix;
use crate::check::fixtures::{
    backward_fixture, cost_fixture, network_fixture,
    BackwardFixture, CostFixture, NetworkFixture,
    BACKWARD_SUMS, BACKWARD_TOLERANCE, COST_EXPECTED, COST_TOLERANCE,
    FORWARD_SUMS, FORWARD_TOLERANCE,
};

/// Why a submission did not pass.
///
/// Shape problems, numeric mismatches and submission failures are distinct
/// kinds so a caller can tell "your matrix has the wrong dimensions" apart
/// from "your numbers are off" and "your code blew up".
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError {
    /// A returned quantity has the wrong dimensions.
    Shape {
        which: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// A returned quantity's element sum misses the reference value.
    Tolerance {
        which: &'static str,
        expected: f64,
        actual: f64,
        tolerance: f64,
    },
    /// The submission itself returned an error.
    Submission(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Shape { which, expected, actual } => write!(
                f,
                "wrong shape for {}: expected {}x{}, got {}x{}",
                which, expected.0, expected.1, actual.0, actual.1
            ),
            CheckError::Tolerance { which, expected, actual, tolerance } => write!(
                f,
                "wrong value for {}: sum {} is not within {} of {}",
                which, actual, tolerance, expected
            ),
            CheckError::Submission(msg) => write!(f, "submission failed: {}", msg),
        }
    }
}

impl std::error::Error for CheckError {}

pub type CheckResult = Result<(), CheckError>;

/// What a forward-pass submission must return.
pub struct ForwardOutput {
    pub n1: Matrix,
    pub a1: Matrix,
    pub n2: Matrix,
    pub a2: Matrix,
}

/// What a backward-pass submission must return: one gradient per parameter.
pub struct BackwardOutput {
    pub w1_grad: Matrix,
    pub w2_grad: Matrix,
    pub b1_grad: Matrix,
    pub b2_grad: Matrix,
}

/// Grades a forward-pass submission against the fixed network.
///
/// The submission gets the fixture (input, weights, biases) and must return
/// the pre-activations and activations of both non-input layers. Each is
/// shape-checked, then its element sum is compared to the grader constant
/// within `FORWARD_TOLERANCE`.
pub fn check_forward<F>(submission: F) -> CheckResult
where
    F: FnOnce(&NetworkFixture) -> Result<ForwardOutput, String>,
{
    let fixture = network_fixture();
    let out = submission(&fixture).map_err(CheckError::Submission)?;

    expect_shape("n1", &out.n1, (30, 1))?;
    expect_shape("a1", &out.a1, (30, 1))?;
    expect_shape("n2", &out.n2, (1, 1))?;
    expect_shape("a2", &out.a2, (1, 1))?;

    expect_sum("n1", out.n1.sum(), FORWARD_SUMS[0], FORWARD_TOLERANCE)?;
    expect_sum("a1", out.a1.sum(), FORWARD_SUMS[1], FORWARD_TOLERANCE)?;
    expect_sum("n2", out.n2.sum(), FORWARD_SUMS[2], FORWARD_TOLERANCE)?;
    expect_sum("a2", out.a2.sum(), FORWARD_SUMS[3], FORWARD_TOLERANCE)?;

    Ok(())
}

/// Grades a cost submission: scalar cost over the fixed prediction and label
/// rows, compared within `COST_TOLERANCE`.
pub fn check_cost<F>(submission: F) -> CheckResult
where
    F: FnOnce(&CostFixture) -> Result<f64, String>,
{
    let fixture = cost_fixture();
    let cost = submission(&fixture).map_err(CheckError::Submission)?;

    expect_sum("cost", cost, COST_EXPECTED, COST_TOLERANCE)
}

/// Grades a backward-pass submission against the fixed network and its
/// cached forward values. The four gradients are shape-checked, then their
/// element sums are compared within `BACKWARD_TOLERANCE`.
pub fn check_backward<F>(submission: F) -> CheckResult
where
    F: FnOnce(&BackwardFixture) -> Result<BackwardOutput, String>,
{
    let fixture = backward_fixture();
    let out = submission(&fixture).map_err(CheckError::Submission)?;

    expect_shape("dW1", &out.w1_grad, (30, 1))?;
    expect_shape("dW2", &out.w2_grad, (1, 30))?;
    expect_shape("db1", &out.b1_grad, (30, 1))?;
    expect_shape("db2", &out.b2_grad, (1, 1))?;

    expect_sum("dW1", out.w1_grad.sum(), BACKWARD_SUMS[0], BACKWARD_TOLERANCE)?;
    expect_sum("dW2", out.w2_grad.sum(), BACKWARD_SUMS[1], BACKWARD_TOLERANCE)?;
    expect_sum("db1", out.b1_grad.sum(), BACKWARD_SUMS[2], BACKWARD_TOLERANCE)?;
    expect_sum("db2", out.b2_grad.sum(), BACKWARD_SUMS[3], BACKWARD_TOLERANCE)?;

    Ok(())
}

/// Prints the console verdict for one check: "Passed!" or the diagnostic.
pub fn report(name: &str, result: &CheckResult) {
    match result {
        Ok(()) => println!("{name}: Passed!"),
        Err(e) => println!("{name}: {e}"),
    }
}

fn expect_shape(which: &'static str, value: &Matrix, expected: (usize, usize)) -> CheckResult {
    if value.shape() != expected {
        return Err(CheckError::Shape {
            which,
            expected,
            actual: value.shape(),
        });
    }
    Ok(())
}

fn expect_sum(which: &'static str, actual: f64, expected: f64, tolerance: f64) -> CheckResult {
    if (actual - expected).abs() > tolerance {
        return Err(CheckError::Tolerance {
            which,
            expected,
            actual,
            tolerance,
        });
    }
    Ok(())
}
