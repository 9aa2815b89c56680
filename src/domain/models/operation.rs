#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;

use std::time::Duration;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Every remote capability of the DevExy backend that runs behind a bearer
/// token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    UnitTests,
    IntegrationTests,
    StressTests,
    Coverage,
    TestPriority,
    RequirementsAnalysis,
    RequirementsOptimization,
}

impl Operation {
    pub fn parse(text: &str) -> Option<Operation> {
        return Operation::iter().find(|e| return e.to_string() == text);
    }

    pub fn path(&self) -> &'static str {
        match self {
            Operation::UnitTests => return "/test-gen/generate-unit-tests",
            Operation::IntegrationTests => return "/test-gen/generate-integration-tests",
            Operation::StressTests => return "/test-gen/generate-stress-tests",
            Operation::Coverage => return "/test-gen/analyze-coverage",
            Operation::TestPriority => return "/test-gen/analyze-test-priority",
            Operation::RequirementsAnalysis => return "/requirements/analyze",
            Operation::RequirementsOptimization => return "/requirements/optimize",
        }
    }

    pub fn default_timeout(&self) -> Duration {
        let secs = match self {
            Operation::UnitTests => 120,
            Operation::IntegrationTests => 180,
            Operation::StressTests => 240,
            Operation::Coverage
            | Operation::TestPriority
            | Operation::RequirementsAnalysis
            | Operation::RequirementsOptimization => 60,
        };

        return Duration::from_secs(secs);
    }

    pub fn is_generation(&self) -> bool {
        return matches!(
            self,
            Operation::UnitTests | Operation::IntegrationTests | Operation::StressTests
        );
    }

    /// Generation runs for minutes, so its cosmetic progress moves slower.
    pub fn progress_interval(&self) -> Duration {
        if self.is_generation() {
            return Duration::from_secs(5);
        }

        return Duration::from_secs(2);
    }

    /// Name used in every user facing message about this operation.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::UnitTests => return "Test generation",
            Operation::IntegrationTests => return "Integration test generation",
            Operation::StressTests => return "Stress test generation",
            Operation::Coverage => return "Coverage analysis",
            Operation::TestPriority => return "Test priority analysis",
            Operation::RequirementsAnalysis => return "Requirements analysis",
            Operation::RequirementsOptimization => return "Requirements optimization",
        }
    }

    pub fn preparing_message(&self) -> &'static str {
        match self {
            Operation::UnitTests => return "Preparing files...",
            Operation::IntegrationTests => {
                return "Preparing files for integration test generation..."
            }
            Operation::StressTests => return "Preparing files for stress test generation...",
            Operation::Coverage => return "Preparing files for coverage analysis...",
            Operation::TestPriority => return "Preparing files for test priority analysis...",
            Operation::RequirementsAnalysis => {
                return "Preparing files for requirements analysis..."
            }
            Operation::RequirementsOptimization => {
                return "Preparing files for requirements optimization..."
            }
        }
    }

    pub fn running_message(&self) -> &'static str {
        match self {
            Operation::UnitTests => return "Generating tests...",
            Operation::IntegrationTests => return "Generating integration tests...",
            Operation::StressTests => return "Generating stress tests...",
            Operation::Coverage => return "Analyzing code coverage...",
            Operation::TestPriority => return "Analyzing test priorities and risks...",
            Operation::RequirementsAnalysis => return "Analyzing requirements...",
            Operation::RequirementsOptimization => return "Optimizing requirements...",
        }
    }

    pub fn processing_message(&self) -> &'static str {
        match self {
            Operation::UnitTests => return "Processing results...",
            Operation::IntegrationTests => return "Processing integration test results...",
            Operation::StressTests => return "Processing stress test results...",
            Operation::Coverage => return "Processing coverage analysis results...",
            Operation::TestPriority => return "Processing test priority analysis results...",
            Operation::RequirementsAnalysis => {
                return "Processing requirements analysis results..."
            }
            Operation::RequirementsOptimization => {
                return "Processing requirements optimization results..."
            }
        }
    }

    /// Canned phases shown while the request is in flight. They are not tied
    /// to real backend progress.
    pub fn progress_messages(&self) -> &'static [&'static str] {
        match self {
            Operation::UnitTests => {
                return &[
                    "Analyzing code structure...",
                    "Identifying testable components...",
                    "Designing test cases...",
                    "Generating test code...",
                    "Still working on tests...",
                    "This is taking longer than expected, but still working...",
                    "Finalizing test generation...",
                    "Almost there...",
                ]
            }
            Operation::IntegrationTests => {
                return &[
                    "Analyzing module interactions...",
                    "Identifying integration points...",
                    "Designing integration test scenarios...",
                    "Generating integration test code...",
                    "Still working on tests...",
                    "This is taking longer than expected, but still working...",
                    "Finalizing integration test generation...",
                    "Almost there...",
                ]
            }
            Operation::StressTests => {
                return &[
                    "Analyzing code for performance bottlenecks...",
                    "Identifying critical endpoints for stress testing...",
                    "Designing load test scenarios...",
                    "Creating concurrency test patterns...",
                    "Generating stress test code...",
                    "Still working on tests...",
                    "This is taking longer than expected, but still working...",
                    "Finalizing stress test generation...",
                    "Almost there...",
                ]
            }
            Operation::Coverage => {
                return &[
                    "Analyzing source and test files...",
                    "Calculating coverage metrics...",
                    "Identifying uncovered areas...",
                    "Generating coverage report...",
                    "Creating visualization data...",
                    "Finalizing analysis results...",
                ]
            }
            Operation::TestPriority => {
                return &[
                    "Analyzing source and test files...",
                    "Evaluating test case priorities...",
                    "Identifying security vulnerabilities...",
                    "Assessing risk factors...",
                    "Generating risk assessment report...",
                    "Finalizing priority analysis...",
                ]
            }
            Operation::RequirementsAnalysis => {
                return &[
                    "Analyzing requirements file...",
                    "Evaluating dependencies...",
                    "Calculating memory impact...",
                    "Assessing performance impact...",
                    "Checking for security issues...",
                    "Generating visualization data...",
                    "Finalizing analysis results...",
                ]
            }
            Operation::RequirementsOptimization => {
                return &[
                    "Analyzing requirements file...",
                    "Evaluating optimization opportunities...",
                    "Finding alternative packages...",
                    "Checking for unused dependencies...",
                    "Optimizing package versions...",
                    "Generating optimized requirements file...",
                    "Finalizing optimization...",
                ]
            }
        }
    }

    pub fn timeout_message(&self) -> String {
        return format!(
            "The {} request timed out. Try with fewer or smaller files.",
            self.label().to_lowercase()
        );
    }

    pub fn network_message(&self) -> String {
        return format!(
            "{} request failed. Please check your connection and try again.",
            self.label()
        );
    }

    pub fn backend_message(&self, detail: &str) -> String {
        return format!("{} failed: {detail}", self.label());
    }
}

/// The kinds of tests the generate panel can ask for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TestType {
    #[default]
    Unit,
    Integration,
    Stress,
}

impl TestType {
    pub fn operation(&self) -> Operation {
        match self {
            TestType::Unit => return Operation::UnitTests,
            TestType::Integration => return Operation::IntegrationTests,
            TestType::Stress => return Operation::StressTests,
        }
    }

    /// Fixed instructions sent as the request description.
    pub fn description(&self) -> &'static str {
        match self {
            TestType::Unit => {
                return "Generate comprehensive unit tests following best practices: use proper assertions, test edge cases, include setup/teardown if needed, use mocks for dependencies, ensure high test coverage, and follow naming conventions."
            }
            TestType::Integration => {
                return "Generate comprehensive integration tests that validate the interaction between components, services and APIs. Include setup/teardown for test environments, mock external dependencies when necessary, and ensure proper error handling is tested."
            }
            TestType::Stress => {
                return "Generate stress tests to validate the system's performance under high load, including load testing, scalability testing, and identifying bottlenecks under various concurrency levels."
            }
        }
    }

    pub fn next(&self) -> TestType {
        match self {
            TestType::Unit => return TestType::Integration,
            TestType::Integration => return TestType::Stress,
            TestType::Stress => return TestType::Unit,
        }
    }
}
