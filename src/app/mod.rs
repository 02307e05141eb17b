pub mod batch;

pub use batch::{summarize, write_reports, BatchChecker, BatchOptions};
