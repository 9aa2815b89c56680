#[cfg(test)]
#[path = "reports_test.rs"]
mod tests;

use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::CoverageMetric;
use crate::domain::models::CoverageMetrics;
use crate::domain::models::GeneratedTest;
use crate::domain::models::RequirementsAnalysisResponse;
use crate::domain::models::RequirementsOptimizationResponse;
use crate::domain::models::TestPriorityAnalysisResponse;

// Backend results are rendered as plain lines. Every section tolerates
// missing or empty fields.

fn percent(value: f64) -> String {
    return format!("{value:.1}%");
}

fn metric_line(name: &str, metric: &CoverageMetric) -> String {
    let mut line = format!("  {name}: {}", percent(metric.value));
    if !metric.explanation.is_empty() {
        line = format!("{line} - {}", metric.explanation);
    }
    if let Some(uncovered) = &metric.uncovered_areas {
        if !uncovered.is_empty() {
            line = format!("{line} (uncovered: {uncovered})");
        }
    }

    return line;
}

fn metrics_lines(metrics: &CoverageMetrics) -> Vec<String> {
    return vec![
        metric_line("Statement", &metrics.statement_coverage),
        metric_line("Branch", &metrics.branch_coverage),
        metric_line("Function", &metrics.function_coverage),
        metric_line("Condition", &metrics.condition_coverage),
    ];
}

fn bullets(title: &str, items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec![];
    }

    let mut lines = vec![title.to_string()];
    lines.extend(items.iter().map(|item| return format!("  - {item}")));
    return lines;
}

fn join_numbers(numbers: &[u64]) -> String {
    return numbers
        .iter()
        .map(|n| return n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
}

pub fn generated_tests_lines(tests: &[GeneratedTest], selected: usize) -> Vec<String> {
    if tests.is_empty() {
        return vec!["No generated tests.".to_string()];
    }

    let mut lines = vec![format!("Generated {} test files:", tests.len())];
    for (idx, test) in tests.iter().enumerate() {
        let marker = if idx == selected { ">" } else { " " };
        lines.push(format!(
            "{marker} ({}) {} [{} lines]",
            idx + 1,
            test.filepath,
            test.content.lines().count()
        ));
    }

    return lines;
}

pub fn coverage_lines(res: &CoverageAnalysisResponse) -> Vec<String> {
    let mut lines = vec!["Overall coverage".to_string()];
    lines.extend(metrics_lines(&res.summary.overall_coverage));
    lines.extend(bullets("Recommendations", &res.summary.recommendations));

    for file in &res.files_analysis {
        lines.push("".to_string());
        lines.push(format!("File: {}", file.filepath));
        lines.extend(metrics_lines(&file.metrics));
        if !file.uncovered_lines.is_empty() {
            lines.push(format!(
                "  Uncovered lines: {}",
                join_numbers(&file.uncovered_lines)
            ));
        }
        lines.extend(bullets("  Uncovered branches", &file.uncovered_branches));
        lines.extend(bullets("  Uncovered functions", &file.uncovered_functions));
        lines.extend(bullets("  Missed edge cases", &file.missed_edge_cases));
        for suggestion in &file.test_improvement_suggestions {
            lines.push(format!("  Suggestion: {}", suggestion.description));
            if !suggestion.implementation_hint.is_empty() {
                lines.push(format!("    Hint: {}", suggestion.implementation_hint));
            }
        }
        if !file.risk_assessment.is_empty() {
            lines.push(format!("  Risk: {}", file.risk_assessment));
        }
    }

    let potential = &res.visualization_data.improvement_potential_chart;
    if !potential.is_empty() {
        lines.push("".to_string());
        lines.push("Improvement potential".to_string());
        for item in potential {
            lines.push(format!(
                "  {}: {} -> {}",
                item.filename,
                percent(item.current_overall_coverage),
                percent(item.potential_coverage)
            ));
        }
    }

    return lines;
}

/// Text written by the coverage report download.
pub fn coverage_report(res: &CoverageAnalysisResponse, generated_at: &str) -> String {
    let mut lines = vec![
        "DevExy Coverage Report".to_string(),
        format!("Generated: {generated_at}"),
        "".to_string(),
    ];
    lines.extend(coverage_lines(res));
    lines.push("".to_string());

    return lines.join("\n");
}

pub fn priority_lines(res: &TestPriorityAnalysisResponse) -> Vec<String> {
    let summary = &res.summary;
    let mut lines = vec![];
    if !summary.overall_assessment.is_empty() {
        lines.push(format!("Assessment: {}", summary.overall_assessment));
    }
    lines.push(format!(
        "Risk: {} high, {} medium, {} low. Security vulnerabilities: {}",
        summary.high_risk_count,
        summary.medium_risk_count,
        summary.low_risk_count,
        summary.security_vulnerability_count
    ));
    lines.extend(bullets("Critical areas", &summary.critical_areas));

    let mut priorities = res.test_priorities.iter().collect::<Vec<_>>();
    priorities.sort_by(|a, b| return b.priority_score.total_cmp(&a.priority_score));
    if !priorities.is_empty() {
        lines.push("".to_string());
        lines.push("Test priorities".to_string());
    }
    for test in priorities {
        let mut line = format!("  [{:.1}] {}", test.priority_score, test.test_name);
        if !test.filepath.is_empty() {
            line = format!("{line} ({}:{})", test.filepath, test.test_line);
        }
        lines.push(line);
        if !test.failure_impact.is_empty() {
            lines.push(format!("    Failure impact: {}", test.failure_impact));
        }
        if !test.security_concerns.is_empty() {
            lines.push(format!("    Security: {}", test.security_concerns));
        }
        let risks = test
            .risk_categories
            .iter()
            .map(|risk| return format!("{} ({:.1})", risk.name, risk.severity))
            .collect::<Vec<_>>();
        if !risks.is_empty() {
            lines.push(format!("    Risks: {}", risks.join(", ")));
        }
    }

    if !res.security_vulnerabilities.is_empty() {
        lines.push("".to_string());
        lines.push("Security vulnerabilities".to_string());
    }
    for vuln in &res.security_vulnerabilities {
        let mut line = format!("  [{:.1}] {}", vuln.severity, vuln.description);
        if !vuln.cwe_reference.is_empty() {
            line = format!("{line} ({})", vuln.cwe_reference);
        }
        lines.push(line);
        for mitigation in &vuln.mitigation_recommendations {
            lines.push(format!("    Mitigation: {mitigation}"));
        }
    }

    lines.extend(bullets("Recommendations", &res.recommendations));
    return lines;
}

pub fn requirements_analysis_lines(res: &RequirementsAnalysisResponse) -> Vec<String> {
    let summary = &res.summary;
    let mut lines = vec![
        format!(
            "Dependencies: {} total, {} direct, {} transitive",
            summary.total_dependencies, summary.direct_dependencies, summary.transitive_dependencies
        ),
        format!(
            "Estimated size {:.0}KB, baseline memory {:.1}MB, startup {:.2}s",
            summary.estimated_size_kb,
            summary.estimated_baseline_memory_mb,
            summary.estimated_startup_time_sec
        ),
    ];
    lines.extend(bullets("High impact packages", &summary.high_impact_packages));

    if !res.dependencies.is_empty() {
        lines.push("".to_string());
        lines.push("Dependencies".to_string());
    }
    for dep in &res.dependencies {
        let mut line = format!(
            "  {} {} - {:.0}KB, {:.1}MB, {:.0}ms",
            dep.name,
            dep.version,
            dep.size_kb,
            dep.memory_usage_estimate_mb,
            dep.startup_time_impact_ms
        );
        if !dep.alternatives.is_empty() {
            line = format!("{line} (alternatives: {})", dep.alternatives.join(", "));
        }
        lines.push(line);
    }

    if !res.security_concerns.is_empty() {
        lines.push("".to_string());
        lines.push("Security concerns".to_string());
    }
    for concern in &res.security_concerns {
        lines.push(format!(
            "  [{}] {}: {}",
            concern.severity, concern.package, concern.vulnerability
        ));
        if !concern.recommendation.is_empty() {
            lines.push(format!("    {}", concern.recommendation));
        }
    }

    if !res.optimization_opportunities.is_empty() {
        lines.push("".to_string());
        lines.push("Optimization opportunities".to_string());
    }
    for opportunity in &res.optimization_opportunities {
        let mut line = format!(
            "  {} {}: {}",
            opportunity.kind, opportunity.package, opportunity.reason
        );
        if let Some(alternative) = &opportunity.alternative {
            line = format!("{line} -> {alternative}");
        }
        if !opportunity.estimated_impact.is_empty() {
            line = format!("{line} ({})", opportunity.estimated_impact);
        }
        lines.push(line);
    }

    lines.extend(bullets(
        "Lazy loading candidates",
        &res.performance_impact.lazy_loading_candidates,
    ));
    lines.extend(bullets(
        "Memory strategies",
        &res.memory_impact.optimization_strategies,
    ));

    if let Some(insights) = &res.code_specific_insights {
        for unused in &insights.unused_dependencies {
            lines.push(format!("  Unused: {} - {}", unused.name, unused.reason));
        }
        for import in &insights.suboptimal_imports {
            lines.push(format!(
                "  {}:{} {} -> {}",
                import.file, import.line, import.current, import.suggestion
            ));
        }
    }

    return lines;
}

pub fn requirements_optimization_lines(res: &RequirementsOptimizationResponse) -> Vec<String> {
    let summary = &res.summary;
    let mut lines = vec![format!(
        "{} changes: {} removed, {} updated, {} replaced",
        summary.total_changes,
        summary.removed_packages,
        summary.updated_versions,
        summary.replaced_packages
    )];
    if !summary.estimated_performance_improvement.is_empty() {
        lines.push(format!(
            "Performance: {}",
            summary.estimated_performance_improvement
        ));
    }
    if !summary.estimated_memory_reduction.is_empty() {
        lines.push(format!("Memory: {}", summary.estimated_memory_reduction));
    }

    if !res.changes.is_empty() {
        lines.push("".to_string());
        lines.push("Changes".to_string());
    }
    for change in &res.changes {
        let from = change.original_version.as_deref().unwrap_or("(new)");
        lines.push(format!(
            "  {} {from} -> {}: {}",
            change.name, change.optimized_version, change.reason
        ));
    }

    if let Some(unused) = &res.unused_dependencies {
        lines.extend(bullets("Unused dependencies", unused));
    }
    lines.extend(bullets("Recommendations", &res.recommendations));

    lines.push("".to_string());
    lines.push("Optimized requirements".to_string());
    lines.extend(res.optimized_content.lines().map(|line| return format!("  {line}")));

    return lines;
}
