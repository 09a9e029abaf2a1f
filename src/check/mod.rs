pub mod fixtures;
pub mod verify;

pub use verify::{check_backward, check_cost, check_forward, report, CheckError, CheckResult};
