//! The three fixed-width ASCII reports and the project ratio matrix.
//!
//! Each report method is a pure function of the borrowed [`MetricsSource`]
//! and the render options: it folds the records into sums as it emits rows,
//! then appends its trailer. Nothing is cached between calls, so rendering
//! the same source twice yields byte-identical output.

use crate::format::{divide, format_decimal, Grouping};
use crate::layout::TableLayout;
use crate::metrics::MetricsSource;
use crate::options::ReportOptions;
use crate::Result;

/// Package report column labels. The leading spaces inside the labels give
/// every numeric column the same 9-character width.
const PACKAGE_HEADERS: [&str; 5] = [
    "  Classes",
    "Functions",
    "     NCSS",
    " Javadocs",
    "Package",
];

/// Object report column labels.
const OBJECT_HEADERS: [&str; 5] = ["NCSS", "Functions", "Classes", "Javadocs", "Class"];

/// Function report column labels.
const FUNCTION_HEADERS: [&str; 4] = ["NCSS", "CCN", "JVDC", "Function"];

/// Width of the summed columns in the package report's totals line.
const TOTAL_WIDTH: usize = 9;

/// Minimum cell width of the package ratio matrix.
const MATRIX_MIN_WIDTH: usize = 9;

/// Renders the ASCII reports for one program's metrics.
///
/// Borrows the source for the lifetime of the report object; every render
/// call pulls the collections once and returns a complete report string.
pub struct AsciiReport<'a, S: MetricsSource> {
    source: &'a S,
    options: ReportOptions,
}

impl<'a, S: MetricsSource> AsciiReport<'a, S> {
    /// Create a report renderer with default options.
    pub fn new(source: &'a S) -> Self {
        Self::with_options(source, ReportOptions::default())
    }

    /// Create a report renderer with explicit options.
    pub fn with_options(source: &'a S, options: ReportOptions) -> Self {
        Self { source, options }
    }

    /// Render the per-package report: one row per package, a totals line,
    /// and the project ratio matrix.
    pub fn package_report(&self) -> Result<String> {
        let nl = &self.options.newline;
        let packages = self.source.package_metrics();

        let mut layout = TableLayout::new(packages.len(), &PACKAGE_HEADERS, nl);
        let mut out = layout.header_line();

        let mut classes_sum = 0i64;
        let mut functions_sum = 0i64;
        let mut ncss_sum = 0i64;
        let mut javadocs_sum = 0i64;
        for package in packages {
            classes_sum += i64::from(package.classes);
            functions_sum += i64::from(package.functions);
            ncss_sum += i64::from(package.ncss);
            javadocs_sum += i64::from(package.javadocs);
            out.push_str(&layout.row_line(
                &package.name,
                &[
                    i64::from(package.classes),
                    i64::from(package.functions),
                    i64::from(package.ncss),
                    i64::from(package.javadocs),
                ],
            )?);
        }

        let indent = " ".repeat(layout.width() + 1);
        out.push_str(&indent);
        out.push_str("--------- --------- --------- ---------");
        out.push_str(nl);
        out.push_str(&indent);
        out.push_str(&format!(
            "{:>w$} {:>w$} {:>w$} {:>w$} Total",
            classes_sum,
            functions_sum,
            ncss_sum,
            javadocs_sum,
            w = TOTAL_WIDTH
        ));
        out.push_str(nl);
        out.push_str(nl);

        out.push_str(&self.package_matrix(
            packages.len() as i64,
            classes_sum,
            functions_sum,
            ncss_sum,
            javadocs_sum,
        ));

        Ok(out)
    }

    /// The triangular per-project/package/class/function ratio matrix.
    ///
    /// All cells use the ungrouped decimal pattern; the cell width is
    /// probed from the formatted NCSS sum, the widest value the matrix can
    /// contain.
    fn package_matrix(
        &self,
        packages: i64,
        classes_sum: i64,
        functions_sum: i64,
        ncss_sum: i64,
        javadocs_sum: i64,
    ) -> String {
        let nl = &self.options.newline;
        let width = format_decimal(ncss_sum as f64, Grouping::Ungrouped)
            .len()
            .max(MATRIX_MIN_WIDTH);

        let cell = |value: f64| {
            format!(
                "{:>width$}",
                format_decimal(value, Grouping::Ungrouped),
                width = width
            )
        };
        let indent = |columns: usize| " ".repeat((width + 1) * columns);

        let mut out = format!(
            "{:>w$} {:>w$} {:>w$} {:>w$} {:>w$} | per{nl}",
            "Packages",
            "Classes",
            "Functions",
            "NCSS",
            "Javadocs",
            w = width
        );
        out.push_str(&"-".repeat((width + 1) * 6 + 1));
        out.push_str(nl);

        out.push_str(&format!(
            "{} {} {} {} {} | Project{nl}",
            cell(packages as f64),
            cell(classes_sum as f64),
            cell(functions_sum as f64),
            cell(ncss_sum as f64),
            cell(javadocs_sum as f64),
        ));

        out.push_str(&indent(1));
        out.push_str(&format!(
            "{} {} {} {} | Package{nl}",
            cell(divide(classes_sum, packages)),
            cell(divide(functions_sum, packages)),
            cell(divide(ncss_sum, packages)),
            cell(divide(javadocs_sum, packages)),
        ));

        out.push_str(&indent(2));
        out.push_str(&format!(
            "{} {} {} | Class{nl}",
            cell(divide(functions_sum, classes_sum)),
            cell(divide(ncss_sum, classes_sum)),
            cell(divide(javadocs_sum, classes_sum)),
        ));

        out.push_str(&indent(3));
        out.push_str(&format!(
            "{} {} | Function{nl}",
            cell(divide(ncss_sum, functions_sum)),
            cell(divide(javadocs_sum, functions_sum)),
        ));

        out
    }

    /// Render the per-class report: one row per object and a trailer of
    /// labeled averages plus the total program NCSS.
    pub fn object_report(&self) -> Result<String> {
        let nl = &self.options.newline;
        let objects = self.source.object_metrics();

        let mut layout = TableLayout::new(objects.len(), &OBJECT_HEADERS, nl);
        let mut out = layout.header_line();

        let mut ncss_sum = 0i64;
        let mut functions_sum = 0i64;
        let mut classes_sum = 0i64;
        let mut javadocs_sum = 0i64;
        for object in objects {
            ncss_sum += i64::from(object.ncss);
            functions_sum += i64::from(object.functions);
            classes_sum += i64::from(object.classes);
            javadocs_sum += i64::from(object.javadocs);
            out.push_str(&layout.row_line(
                &object.name,
                &[
                    i64::from(object.ncss),
                    i64::from(object.functions),
                    i64::from(object.classes),
                    i64::from(object.javadocs),
                ],
            )?);
        }

        let count = objects.len() as i64;
        let trailer = [
            ("Average Object NCSS:             ", divide(ncss_sum, count)),
            ("Average Object Functions:        ", divide(functions_sum, count)),
            ("Average Object Inner Classes:    ", divide(classes_sum, count)),
            ("Average Object Javadoc Comments: ", divide(javadocs_sum, count)),
            ("Program NCSS:                    ", self.source.ncss() as f64),
        ];
        for (label, value) in trailer {
            out.push_str(label);
            out.push_str(&format!(
                "{:>9}",
                format_decimal(value, Grouping::Grouped)
            ));
            out.push_str(nl);
        }

        Ok(out)
    }

    /// Render the per-function report: one row per function and a trailer
    /// of labeled averages plus the total program NCSS.
    pub fn function_report(&self) -> Result<String> {
        let nl = &self.options.newline;
        let functions = self.source.function_metrics();

        let mut layout = TableLayout::new(functions.len(), &FUNCTION_HEADERS, nl);
        let mut out = layout.header_line();

        let mut ncss_sum = 0i64;
        let mut ccn_sum = 0i64;
        let mut javadocs_sum = 0i64;
        for function in functions {
            ncss_sum += i64::from(function.ncss);
            ccn_sum += i64::from(function.ccn);
            javadocs_sum += i64::from(function.javadocs);
            out.push_str(&layout.row_line(
                &function.name,
                &[
                    i64::from(function.ncss),
                    i64::from(function.ccn),
                    i64::from(function.javadocs),
                ],
            )?);
        }

        let count = functions.len() as i64;
        let trailer = [
            ("Average Function NCSS: ", divide(ncss_sum, count)),
            ("Average Function CCN:  ", divide(ccn_sum, count)),
            ("Average Function JVDC: ", divide(javadocs_sum, count)),
            ("Program NCSS:          ", self.source.ncss() as f64),
        ];
        for (label, value) in trailer {
            out.push_str(label);
            out.push_str(&format!(
                "{:>10}",
                format_decimal(value, Grouping::Grouped)
            ));
            out.push_str(nl);
        }

        Ok(out)
    }

    /// The single-line program NCSS summary.
    pub fn program_ncss(&self) -> String {
        format!("Java NCSS: {}{}", self.source.ncss(), self.options.newline)
    }
}
