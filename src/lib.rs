pub mod math;
pub mod check;
pub mod regression;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use check::verify::{check_backward, check_cost, check_forward, report, CheckError};
pub use regression::dataset::{load_columns, Dataset};
pub use regression::sgd::{train, update_wb, LinearModel, SgdConfig, TrainResult};
pub use plot::render_fit;
