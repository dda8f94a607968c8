//! # ncsslib
//!
//! A fixed-width ASCII report formatter for pre-computed source-code
//! metrics: NCSS (non-commenting source statements), CCN (cyclomatic
//! complexity) and Javadoc comment counts.
//!
//! ## Overview
//!
//! The library consumes three ordered collections of metric records — per
//! package, per class/object, per function — plus one scalar program NCSS
//! total, and folds them into aligned, byte-stable text tables:
//!
//! - **Package report**: one row per package, a totals line, and a
//!   triangular ratio matrix of per-package/class/function averages
//! - **Object report**: one row per class with averaged trailers
//! - **Function report**: one row per function with averaged trailers
//!
//! It does not parse source code, compute metrics, or perform I/O: an
//! upstream collector owns the records and hands them in through the
//! [`MetricsSource`] trait (or the plain [`ProjectMetrics`] holder), and the
//! caller decides where the returned strings go.
//!
//! Column widths are derived once from the header labels and the row count;
//! degenerate inputs (zero packages, classes, or functions) render all-zero
//! totals and ratios rather than faulting on division.
//!
//! ## Example
//!
//! ```rust
//! use ncsslib::{AsciiReport, PackageMetric, ProjectMetrics, ReportOptions};
//!
//! let project = ProjectMetrics {
//!     packages: vec![PackageMetric {
//!         name: "com.example".to_string(),
//!         classes: 2,
//!         functions: 4,
//!         ncss: 40,
//!         javadocs: 1,
//!     }],
//!     objects: vec![],
//!     functions: vec![],
//!     ncss: 40,
//! };
//!
//! let report = AsciiReport::with_options(&project, ReportOptions::new().newline("\n"));
//! let text = report.package_report().unwrap();
//! assert!(text.starts_with("Nr.   Classes Functions      NCSS  Javadocs Package\n"));
//! assert!(text.contains(" Total\n"));
//! assert_eq!(report.program_ncss(), "Java NCSS: 40\n");
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod options;
pub mod report;

pub use error::ReportError;
pub use format::{divide, format_decimal, Grouping};
pub use layout::TableLayout;
pub use metrics::{FunctionMetric, MetricsSource, ObjectMetric, PackageMetric, ProjectMetrics};
pub use options::{ReportOptions, NATIVE_NEWLINE};
pub use report::AsciiReport;

/// Result type for ncsslib operations
pub type Result<T> = std::result::Result<T, ReportError>;
