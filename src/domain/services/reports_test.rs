use anyhow::Result;
use test_utils::coverage_fixture;
use test_utils::priority_fixture;
use test_utils::requirements_analysis_fixture;
use test_utils::requirements_optimization_fixture;

use super::*;
use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::GeneratedTest;
use crate::domain::models::RequirementsAnalysisResponse;
use crate::domain::models::RequirementsOptimizationResponse;
use crate::domain::models::TestPriorityAnalysisResponse;

#[test]
fn it_renders_coverage() -> Result<()> {
    let res: CoverageAnalysisResponse = serde_json::from_str(coverage_fixture())?;
    let lines = coverage_lines(&res);

    assert_eq!(lines[0], "Overall coverage");
    assert_eq!(lines[1], "  Statement: 72.5% - Most statements run");
    assert_eq!(
        lines[2],
        "  Branch: 50.0% - Error branches untested (uncovered: divide by zero)"
    );
    assert!(lines.contains(&"File: src/calc.py".to_string()));
    assert!(lines.contains(&"  Uncovered lines: 12, 13".to_string()));
    assert!(lines.contains(&"    Hint: pytest.raises(ZeroDivisionError)".to_string()));

    return Ok(());
}

#[test]
fn it_renders_empty_results_without_panicking() -> Result<()> {
    let coverage: CoverageAnalysisResponse = serde_json::from_str("{}")?;
    let priority: TestPriorityAnalysisResponse = serde_json::from_str("{}")?;
    let analysis: RequirementsAnalysisResponse = serde_json::from_str("{}")?;
    let optimization: RequirementsOptimizationResponse = serde_json::from_str("{}")?;

    assert_eq!(coverage_lines(&coverage).len(), 5);
    insta::assert_snapshot!(priority_lines(&priority).join("\n"), @"Risk: 0 high, 0 medium, 0 low. Security vulnerabilities: 0");
    assert_eq!(requirements_analysis_lines(&analysis).len(), 2);
    assert_eq!(
        requirements_optimization_lines(&optimization).last().cloned(),
        Some("Optimized requirements".to_string())
    );

    return Ok(());
}

#[test]
fn it_renders_priorities_highest_first() -> Result<()> {
    let res: TestPriorityAnalysisResponse = serde_json::from_str(priority_fixture())?;
    let lines = priority_lines(&res);

    assert_eq!(lines[0], "Assessment: Payment paths are under tested");
    assert!(lines.contains(&"  [9.5] test_charge_card (tests/test_payments.py:10)".to_string()));
    assert!(lines.contains(&"  [8.0] Card number logged (CWE-532)".to_string()));

    return Ok(());
}

#[test]
fn it_renders_requirements() -> Result<()> {
    let analysis: RequirementsAnalysisResponse =
        serde_json::from_str(requirements_analysis_fixture())?;
    let lines = requirements_analysis_lines(&analysis);
    assert_eq!(lines[0], "Dependencies: 2 total, 2 direct, 0 transitive");
    assert!(lines.contains(&"  replace pandas: Only CSV parsing used -> csv (-40MB)".to_string()));

    let optimization: RequirementsOptimizationResponse =
        serde_json::from_str(requirements_optimization_fixture())?;
    let lines = requirements_optimization_lines(&optimization);
    assert!(lines.contains(&"  requests 2.25.0 -> 2.31.0: Security fix".to_string()));
    assert_eq!(lines.last().cloned(), Some("  requests==2.31.0".to_string()));

    return Ok(());
}

#[test]
fn it_marks_the_selected_generated_test() {
    let tests = vec![
        GeneratedTest {
            filepath: "tests/test_a.py".to_string(),
            content: "a\nb".to_string(),
        },
        GeneratedTest {
            filepath: "tests/test_b.py".to_string(),
            content: "c".to_string(),
        },
    ];

    insta::assert_snapshot!(generated_tests_lines(&tests, 1).join("\n"), @r###"
    Generated 2 test files:
      (1) tests/test_a.py [2 lines]
    > (2) tests/test_b.py [1 lines]
    "###);
}

#[test]
fn it_writes_report_header() -> Result<()> {
    let res: CoverageAnalysisResponse = serde_json::from_str(coverage_fixture())?;
    let report = coverage_report(&res, "2024-05-01 10:00:00");

    assert!(report.starts_with("DevExy Coverage Report\nGenerated: 2024-05-01 10:00:00\n\nOverall coverage\n"));
    assert!(report.ends_with('\n'));

    return Ok(());
}
