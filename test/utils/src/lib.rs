use serde_json::json;

/// Body of a successful test generation response.
pub fn generated_tests_fixture(tests: &[(&str, &str)]) -> String {
    let tests = tests
        .iter()
        .map(|(filepath, content)| {
            return json!({ "filepath": filepath, "content": content });
        })
        .collect::<Vec<_>>();

    return json!({ "tests": tests, "message": "Tests generated successfully" }).to_string();
}

pub fn coverage_fixture() -> &'static str {
    return r#"{
  "summary": {
    "overall_coverage": {
      "statement_coverage": { "value": 72.5, "explanation": "Most statements run" },
      "branch_coverage": { "value": 50.0, "explanation": "Error branches untested", "uncovered_areas": "divide by zero" },
      "function_coverage": { "value": 100.0, "explanation": "All functions called" },
      "condition_coverage": { "value": 40.0, "explanation": "Compound conditions partially covered" }
    },
    "recommendations": ["Add a test for dividing by zero"]
  },
  "files_analysis": [
    {
      "filepath": "src/calc.py",
      "metrics": {
        "statement_coverage": { "value": 72.5, "explanation": "" },
        "branch_coverage": { "value": 50.0, "explanation": "" },
        "function_coverage": { "value": 100.0, "explanation": "" },
        "condition_coverage": { "value": 40.0, "explanation": "" }
      },
      "uncovered_lines": [12, 13],
      "uncovered_branches": ["if b == 0"],
      "uncovered_functions": [],
      "missed_edge_cases": ["negative numbers"],
      "test_improvement_suggestions": [
        { "description": "Test division by zero", "implementation_hint": "pytest.raises(ZeroDivisionError)" }
      ],
      "risk_assessment": "Medium"
    }
  ],
  "visualization_data": {
    "summary_chart_data": [],
    "heatmap_data": [],
    "missed_test_cases_chart": [],
    "improvement_potential_chart": []
  }
}"#;
}

pub fn priority_fixture() -> &'static str {
    return r#"{
  "summary": {
    "overall_assessment": "Payment paths are under tested",
    "critical_areas": ["payments"],
    "high_risk_count": 1,
    "medium_risk_count": 0,
    "low_risk_count": 2,
    "security_vulnerability_count": 1,
    "top_priority_tests_count": 1
  },
  "test_priorities": [
    {
      "test_name": "test_charge_card",
      "filepath": "tests/test_payments.py",
      "test_line": 10,
      "priority_score": 9.5,
      "risk_categories": [
        { "name": "Financial", "description": "Money movement", "severity": 9.0, "impact_areas": ["billing"] }
      ],
      "failure_impact": "Customers double charged",
      "security_concerns": "Card data exposure",
      "dependencies": ["stripe"],
      "coverage_impact": 12.0
    }
  ],
  "security_vulnerabilities": [
    {
      "description": "Card number logged",
      "severity": 8.0,
      "affected_code": "log.info(card)",
      "mitigation_recommendations": ["Mask card numbers"],
      "cwe_reference": "CWE-532"
    }
  ],
  "visualization_data": {
    "priority_distribution": { "high": 1, "medium": 0, "low": 2 },
    "risk_category_distribution": { "Financial": 1 },
    "critical_tests_by_module": { "payments": 1 },
    "security_impact_scores": []
  },
  "recommendations": ["Run payment tests first"]
}"#;
}

pub fn requirements_analysis_fixture() -> &'static str {
    return r#"{
  "summary": {
    "total_dependencies": 2,
    "direct_dependencies": 2,
    "transitive_dependencies": 0,
    "estimated_size_kb": 2048.0,
    "estimated_baseline_memory_mb": 45.5,
    "estimated_startup_time_sec": 1.2,
    "high_impact_packages": ["pandas"],
    "security_concerns_count": 1,
    "optimization_opportunities_count": 1,
    "unused_dependencies_count": 0
  },
  "dependencies": [
    {
      "name": "pandas",
      "version": "1.5.0",
      "size_kb": 2000.0,
      "memory_usage_estimate_mb": 40.0,
      "startup_time_impact_ms": 900.0,
      "is_direct": true,
      "imported_by": [],
      "alternatives": ["polars"]
    }
  ],
  "performance_impact": {
    "slow_startup_packages": [],
    "heavy_import_time_packages": [],
    "known_bottlenecks": [],
    "estimated_total_startup_time_ms": 1200.0,
    "lazy_loading_candidates": ["pandas"]
  },
  "memory_impact": {
    "memory_intensive_libs": [],
    "estimated_baseline_memory_mb": 45.5,
    "packages_with_memory_issues": [],
    "estimated_peak_memory_mb": 120.0,
    "optimization_strategies": []
  },
  "security_concerns": [
    { "package": "requests", "severity": "high", "vulnerability": "CVE-2023-32681", "recommendation": "Upgrade to 2.31.0" }
  ],
  "optimization_opportunities": [
    { "type": "replace", "package": "pandas", "reason": "Only CSV parsing used", "estimated_impact": "-40MB", "alternative": "csv" }
  ],
  "visualization_data": {
    "size_distribution": [],
    "memory_usage": [],
    "startup_time": [],
    "dependency_graph": { "nodes": [], "links": [] }
  }
}"#;
}

pub fn requirements_optimization_fixture() -> &'static str {
    return r#"{
  "optimized_content": "requests==2.31.0\n",
  "summary": {
    "total_changes": 2,
    "removed_packages": 1,
    "updated_versions": 1,
    "replaced_packages": 0,
    "estimated_performance_improvement": "30% faster startup",
    "estimated_memory_reduction": "40MB",
    "security_vulnerabilities_addressed": 1,
    "unused_dependencies_removed": 1
  },
  "changes": [
    {
      "name": "requests",
      "original_version": "2.25.0",
      "optimized_version": "2.31.0",
      "reason": "Security fix",
      "impact": { "performance": "none", "memory": "none", "security": "fixes CVE-2023-32681" }
    }
  ],
  "performance_improvement": { "startup_time_reduction_ms": 900.0, "import_time_improvement": "30%", "key_improvements": [] },
  "memory_improvement": { "baseline_reduction_mb": 40.0, "peak_reduction_mb": 60.0, "key_improvements": [] },
  "recommendations": ["Pin every dependency"]
}"#;
}
