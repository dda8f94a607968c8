//! Metric records consumed by the report formatter.
//!
//! All records are produced upstream by a metrics collector before a report
//! is rendered; this crate never mutates them. Row order in every report is
//! the order of these collections, and row numbering is purely positional
//! (1..N).

use serde::{Deserialize, Serialize};

/// Aggregated metrics for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetric {
    /// Package name
    pub name: String,
    /// Number of classes declared in the package
    pub classes: u32,
    /// Number of functions declared in the package
    pub functions: u32,
    /// Non-commenting source statements
    pub ncss: u32,
    /// Javadoc comment count
    pub javadocs: u32,
}

/// Metrics for one class or other top-level object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetric {
    /// Fully qualified class name
    pub name: String,
    /// Non-commenting source statements
    pub ncss: u32,
    /// Number of functions declared on the object
    pub functions: u32,
    /// Number of inner classes
    pub classes: u32,
    /// Javadoc comment count
    pub javadocs: u32,
}

/// Metrics for one function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetric {
    /// Fully qualified function signature
    pub name: String,
    /// Non-commenting source statements
    pub ncss: u32,
    /// Cyclomatic complexity number, at least 1 for any function
    pub ccn: u32,
    /// Javadoc comment count
    pub javadocs: u32,
}

/// Source of pre-computed metrics for one program.
///
/// Implementations hand out their collections in report order; the
/// formatter reads them once per report call and never writes back.
pub trait MetricsSource {
    /// Per-package metrics in report order.
    fn package_metrics(&self) -> &[PackageMetric];

    /// Per-class/object metrics in report order.
    fn object_metrics(&self) -> &[ObjectMetric];

    /// Per-function metrics in report order.
    fn function_metrics(&self) -> &[FunctionMetric];

    /// Total non-commenting source statements of the whole program.
    fn ncss(&self) -> u64;
}

/// Plain in-memory [`MetricsSource`].
///
/// Upstream collectors that hold their results as vectors can use this
/// directly instead of implementing the trait themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    /// Per-package metrics in report order
    pub packages: Vec<PackageMetric>,
    /// Per-class/object metrics in report order
    pub objects: Vec<ObjectMetric>,
    /// Per-function metrics in report order
    pub functions: Vec<FunctionMetric>,
    /// Total program NCSS
    pub ncss: u64,
}

impl MetricsSource for ProjectMetrics {
    fn package_metrics(&self) -> &[PackageMetric] {
        &self.packages
    }

    fn object_metrics(&self) -> &[ObjectMetric] {
        &self.objects
    }

    fn function_metrics(&self) -> &[FunctionMetric] {
        &self.functions
    }

    fn ncss(&self) -> u64 {
        self.ncss
    }
}
