use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementDependency {
    pub name: String,
    pub version: String,
    pub size_kb: f64,
    pub memory_usage_estimate_mb: f64,
    pub startup_time_impact_ms: f64,
    pub is_direct: bool,
    pub imported_by: Vec<String>,
    pub alternatives: Vec<String>,
    pub usage_in_code: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsSummary {
    pub total_dependencies: u64,
    pub direct_dependencies: u64,
    pub transitive_dependencies: u64,
    pub estimated_size_kb: f64,
    pub estimated_baseline_memory_mb: f64,
    pub estimated_startup_time_sec: f64,
    pub high_impact_packages: Vec<String>,
    pub security_concerns_count: u64,
    pub optimization_opportunities_count: u64,
    pub unused_dependencies_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageTiming {
    pub name: String,
    pub startup_time_ms: Option<f64>,
    pub import_time_ms: Option<f64>,
    pub mitigation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageIssue {
    pub name: String,
    pub issue: String,
    pub mitigation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceImpact {
    pub slow_startup_packages: Vec<PackageTiming>,
    pub heavy_import_time_packages: Vec<PackageTiming>,
    pub known_bottlenecks: Vec<PackageIssue>,
    pub estimated_total_startup_time_ms: f64,
    pub lazy_loading_candidates: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryIntensiveLib {
    pub name: String,
    pub baseline_mb: f64,
    pub peak_mb: f64,
    pub mitigation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryImpact {
    pub memory_intensive_libs: Vec<MemoryIntensiveLib>,
    pub estimated_baseline_memory_mb: f64,
    pub packages_with_memory_issues: Vec<PackageIssue>,
    pub estimated_peak_memory_mb: f64,
    pub optimization_strategies: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConcern {
    pub package: String,
    pub severity: String,
    pub vulnerability: String,
    pub recommendation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationOpportunity {
    #[serde(rename = "type")]
    pub kind: String,
    pub package: String,
    pub reason: String,
    pub estimated_impact: String,
    pub alternative: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedValue {
    pub name: String,
    pub size_kb: Option<f64>,
    pub memory_mb: Option<f64>,
    pub time_ms: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphNode {
    pub id: String,
    pub group: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsVisualization {
    pub size_distribution: Vec<NamedValue>,
    pub memory_usage: Vec<NamedValue>,
    pub startup_time: Vec<NamedValue>,
    pub dependency_graph: DependencyGraph,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnusedDependency {
    pub name: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuboptimalImport {
    pub file: String,
    pub line: u64,
    pub current: String,
    pub suggestion: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyUsage {
    pub name: String,
    pub import_count: u64,
    pub usage_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSpecificInsights {
    pub unused_dependencies: Vec<UnusedDependency>,
    pub suboptimal_imports: Vec<SuboptimalImport>,
    pub dependency_usage_frequency: Vec<DependencyUsage>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsAnalysisResponse {
    pub summary: RequirementsSummary,
    pub dependencies: Vec<RequirementDependency>,
    pub performance_impact: PerformanceImpact,
    pub memory_impact: MemoryImpact,
    pub security_concerns: Vec<SecurityConcern>,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
    pub visualization_data: RequirementsVisualization,
    pub code_specific_insights: Option<CodeSpecificInsights>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeImpact {
    pub performance: String,
    pub memory: String,
    pub security: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizedRequirement {
    pub name: String,
    pub original_version: Option<String>,
    pub optimized_version: String,
    pub reason: String,
    pub impact: ChangeImpact,
    pub code_references: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationSummary {
    pub total_changes: u64,
    pub removed_packages: u64,
    pub updated_versions: u64,
    pub replaced_packages: u64,
    pub estimated_performance_improvement: String,
    pub estimated_memory_reduction: String,
    pub security_vulnerabilities_addressed: u64,
    pub unused_dependencies_removed: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceImprovement {
    pub startup_time_reduction_ms: f64,
    pub import_time_improvement: String,
    pub key_improvements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryImprovement {
    pub baseline_reduction_mb: f64,
    pub peak_reduction_mb: f64,
    pub key_improvements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityImprovement {
    pub vulnerabilities_fixed: u64,
    pub key_fixes: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsOptimizationResponse {
    pub optimized_content: String,
    pub summary: OptimizationSummary,
    pub changes: Vec<OptimizedRequirement>,
    pub performance_improvement: PerformanceImprovement,
    pub memory_improvement: MemoryImprovement,
    pub security_improvement: Option<SecurityImprovement>,
    pub recommendations: Vec<String>,
    pub unused_dependencies: Option<Vec<String>>,
}
