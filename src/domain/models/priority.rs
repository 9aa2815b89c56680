use std::collections::BTreeMap;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskCategory {
    pub name: String,
    pub description: String,
    pub severity: f64,
    pub impact_areas: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestPriority {
    pub test_name: String,
    pub filepath: String,
    pub test_line: u64,
    pub priority_score: f64,
    pub risk_categories: Vec<RiskCategory>,
    pub failure_impact: String,
    pub security_concerns: String,
    pub dependencies: Vec<String>,
    pub coverage_impact: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityVulnerability {
    pub description: String,
    pub severity: f64,
    pub affected_code: String,
    pub mitigation_recommendations: Vec<String>,
    pub cwe_reference: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityDistribution {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityImpactScore {
    pub test_name: String,
    pub score: f64,
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityVisualization {
    pub priority_distribution: PriorityDistribution,
    pub risk_category_distribution: BTreeMap<String, u64>,
    pub critical_tests_by_module: BTreeMap<String, u64>,
    pub security_impact_scores: Vec<SecurityImpactScore>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritySummary {
    pub overall_assessment: String,
    pub critical_areas: Vec<String>,
    pub high_risk_count: u64,
    pub medium_risk_count: u64,
    pub low_risk_count: u64,
    pub security_vulnerability_count: u64,
    pub top_priority_tests_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestPriorityAnalysisResponse {
    pub summary: PrioritySummary,
    pub test_priorities: Vec<TestPriority>,
    pub security_vulnerabilities: Vec<SecurityVulnerability>,
    pub visualization_data: PriorityVisualization,
    pub recommendations: Vec<String>,
}
