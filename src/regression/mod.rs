pub mod dataset;
pub mod sgd;

pub use dataset::{load_columns, parse_columns, Dataset, DatasetError};
pub use sgd::{train, update_at, update_wb, GradientSample, LinearModel, SgdConfig, TrainResult};
