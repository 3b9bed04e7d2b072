/// Console report for probe results
pub mod report;

pub use report::{ProbeSummary, write_probe};
