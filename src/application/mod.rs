/// Authenticate-then-probe flow
pub mod runner;

pub use runner::{RunSummary, run, run_with_endpoints};
