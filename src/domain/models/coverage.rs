use std::collections::BTreeMap;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageMetric {
    pub value: f64,
    pub explanation: String,
    pub uncovered_areas: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageMetrics {
    pub statement_coverage: CoverageMetric,
    pub branch_coverage: CoverageMetric,
    pub function_coverage: CoverageMetric,
    pub condition_coverage: CoverageMetric,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestImprovementSuggestion {
    pub description: String,
    pub implementation_hint: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCoverageAnalysis {
    pub filepath: String,
    pub metrics: CoverageMetrics,
    pub uncovered_lines: Vec<u64>,
    pub uncovered_branches: Vec<String>,
    pub uncovered_functions: Vec<String>,
    pub missed_edge_cases: Vec<String>,
    pub test_improvement_suggestions: Vec<TestImprovementSuggestion>,
    pub risk_assessment: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageSummary {
    pub overall_coverage: CoverageMetrics,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryChartData {
    pub filename: String,
    pub statement_coverage: f64,
    pub branch_coverage: f64,
    pub function_coverage: f64,
    pub condition_coverage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotspot {
    pub line: u64,
    pub coverage_score: f64,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heatmap {
    pub filepath: String,
    pub hotspots: Vec<Hotspot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissedTestCasesChart {
    pub filename: String,
    pub count: u64,
    pub categories: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementPotentialChart {
    pub filename: String,
    pub current_overall_coverage: f64,
    pub potential_coverage: f64,
    pub improvement_percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageVisualization {
    pub summary_chart_data: Vec<SummaryChartData>,
    pub heatmap_data: Vec<Heatmap>,
    pub missed_test_cases_chart: Vec<MissedTestCasesChart>,
    pub improvement_potential_chart: Vec<ImprovementPotentialChart>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageAnalysisResponse {
    pub summary: CoverageSummary,
    pub files_analysis: Vec<FileCoverageAnalysis>,
    pub visualization_data: CoverageVisualization,
}
