//! Validation and formatting of Swiss social security numbers (AHV/AVS).
//!
//! ```
//! assert!(s3n::is_valid("756.9217.0769.85"));
//! assert_eq!(s3n::dotted_format("7569217076985").unwrap(), "756.9217.0769.85");
//! assert_eq!(s3n::dotless_format("756.9217.0769.85").unwrap(), "7569217076985");
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{BatchChecker, BatchOptions};
pub use config::BatchConfig;
pub use crate::core::{dotless_format, dotted_format, format_number, is_valid, validate};
pub use domain::model::{CheckReport, NumberFormat, ReportFormat, SocialSecurityNumber};
pub use utils::error::{Result, S3nError};
