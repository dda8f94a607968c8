//! Byte-exact golden tests for the three reports.
//!
//! The report strings are the external contract: any change to alignment,
//! rounding, or line termination shows up here first.

use ncsslib::{
    AsciiReport, FunctionMetric, MetricsSource, ObjectMetric, PackageMetric, ProjectMetrics,
    ReportOptions,
};

fn sample_project() -> ProjectMetrics {
    ProjectMetrics {
        packages: vec![
            PackageMetric {
                name: "a".to_string(),
                classes: 2,
                functions: 4,
                ncss: 40,
                javadocs: 1,
            },
            PackageMetric {
                name: "b".to_string(),
                classes: 1,
                functions: 2,
                ncss: 20,
                javadocs: 0,
            },
        ],
        objects: vec![ObjectMetric {
            name: "a.Foo".to_string(),
            ncss: 10,
            functions: 2,
            classes: 0,
            javadocs: 1,
        }],
        functions: vec![
            FunctionMetric {
                name: "a.Foo.main(String[])".to_string(),
                ncss: 20,
                ccn: 3,
                javadocs: 1,
            },
            FunctionMetric {
                name: "a.Foo.helper()".to_string(),
                ncss: 10,
                ccn: 1,
                javadocs: 0,
            },
        ],
        ncss: 60,
    }
}

fn render(project: &ProjectMetrics) -> AsciiReport<'_, ProjectMetrics> {
    AsciiReport::with_options(project, ReportOptions::new().newline("\n"))
}

#[test]
fn package_report_golden() {
    let project = sample_project();
    let expected = concat!(
        "Nr.   Classes Functions      NCSS  Javadocs Package\n",
        "  1         2         4        40         1 a\n",
        "  2         1         2        20         0 b\n",
        "    --------- --------- --------- ---------\n",
        "            3         6        60         1 Total\n",
        "\n",
        " Packages   Classes Functions      NCSS  Javadocs | per\n",
        "-------------------------------------------------------------\n",
        "     2.00      3.00      6.00     60.00      1.00 | Project\n",
        "               1.50      3.00     30.00      0.50 | Package\n",
        "                         2.00     20.00      0.33 | Class\n",
        "                                  10.00      0.17 | Function\n",
    );
    assert_eq!(render(&project).package_report().unwrap(), expected);
}

#[test]
fn object_report_golden() {
    let project = sample_project();
    let expected = concat!(
        "Nr. NCSS Functions Classes Javadocs Class\n",
        "  1   10         2       0        1 a.Foo\n",
        "Average Object NCSS:                 10.00\n",
        "Average Object Functions:             2.00\n",
        "Average Object Inner Classes:         0.00\n",
        "Average Object Javadoc Comments:      1.00\n",
        "Program NCSS:                        60.00\n",
    );
    assert_eq!(render(&project).object_report().unwrap(), expected);
}

#[test]
fn function_report_golden() {
    let project = sample_project();
    let expected = concat!(
        "Nr. NCSS CCN JVDC Function\n",
        "  1   20   3    1 a.Foo.main(String[])\n",
        "  2   10   1    0 a.Foo.helper()\n",
        "Average Function NCSS:      15.00\n",
        "Average Function CCN:        2.00\n",
        "Average Function JVDC:       0.50\n",
        "Program NCSS:               60.00\n",
    );
    assert_eq!(render(&project).function_report().unwrap(), expected);
}

#[test]
fn empty_project_renders_without_faulting() {
    let project = ProjectMetrics::default();
    let renderer = render(&project);
    let expected = concat!(
        "Nr.   Classes Functions      NCSS  Javadocs Package\n",
        "    --------- --------- --------- ---------\n",
        "            0         0         0         0 Total\n",
        "\n",
        " Packages   Classes Functions      NCSS  Javadocs | per\n",
        "-------------------------------------------------------------\n",
        "     0.00      0.00      0.00      0.00      0.00 | Project\n",
        "          "
    );
    let out = renderer.package_report().unwrap();
    assert!(out.starts_with(expected));
    assert!(out.contains("     0.00      0.00      0.00      0.00 | Package\n"));
    assert!(out.ends_with("     0.00      0.00 | Function\n"));

    assert!(renderer.object_report().unwrap().contains(
        "Average Object NCSS:                  0.00\n"
    ));
    assert!(renderer.function_report().unwrap().contains(
        "Average Function CCN:        0.00\n"
    ));
    assert_eq!(renderer.program_ncss(), "Java NCSS: 0\n");
}

#[test]
fn grouped_values_appear_in_trailers_but_not_in_the_matrix() {
    let project = ProjectMetrics {
        packages: vec![PackageMetric {
            name: "big".to_string(),
            classes: 100,
            functions: 1000,
            ncss: 1_234_567,
            javadocs: 10,
        }],
        objects: vec![],
        functions: vec![],
        ncss: 1_234_567,
    };
    let out = render(&project).package_report().unwrap();

    // The ratio matrix probes its width from the ungrouped NCSS sum
    // (1234567.00 -> 10 wide) and renders all cells ungrouped.
    assert!(out.contains("  Packages    Classes  Functions       NCSS   Javadocs | per\n"));
    assert!(out.contains("1234567.00"));
    assert!(!out.contains("1,234,567.00"));

    // The object trailer renders the program NCSS grouped.
    let objects = render(&project).object_report().unwrap();
    assert!(objects.contains("Program NCSS:                    1,234,567.00\n"));
}

#[test]
fn custom_metrics_source_implementations_are_accepted() {
    struct Fixed;

    impl MetricsSource for Fixed {
        fn package_metrics(&self) -> &[PackageMetric] {
            &[]
        }
        fn object_metrics(&self) -> &[ObjectMetric] {
            &[]
        }
        fn function_metrics(&self) -> &[FunctionMetric] {
            &[]
        }
        fn ncss(&self) -> u64 {
            123
        }
    }

    let report = AsciiReport::with_options(&Fixed, ReportOptions::new().newline("\n"));
    assert_eq!(report.program_ncss(), "Java NCSS: 123\n");
}

#[test]
fn crlf_newlines_terminate_every_line() {
    let project = sample_project();
    let report = AsciiReport::with_options(&project, ReportOptions::new().newline("\r\n"));
    let out = report.package_report().unwrap();
    for line in out.split_inclusive("\r\n") {
        assert!(line.ends_with("\r\n"), "unterminated line: {line:?}");
    }
    assert!(out.ends_with("\r\n"));
}
