use serde_derive::Serialize;

use super::FileContent;
use super::RequirementsContent;

/// Body shared by the unit, integration and stress test generation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestGenerationRequest {
    pub files: Vec<FileContent>,
    pub description: String,
    pub test_directory: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageAnalysisRequest {
    pub source_files: Vec<FileContent>,
    pub test_files: Vec<FileContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestPriorityAnalysisRequest {
    pub source_files: Vec<FileContent>,
    pub test_files: Vec<FileContent>,
    pub description: String,
    pub code_criticality_context: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequirementsAnalysisRequest {
    pub requirements_content: RequirementsContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_files: Option<Vec<FileContent>>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequirementsOptimizationRequest {
    pub requirements_content: RequirementsContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_files: Option<Vec<FileContent>>,
    pub optimization_goals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_dependencies: Option<Vec<String>>,
    pub description: String,
}

/// Something whose file payload counts against the size guard.
pub trait FilePayload {
    fn file_count(&self) -> usize;
    fn content_length(&self) -> usize;
}

fn chars(files: &[FileContent]) -> usize {
    return files.iter().map(|file| return file.content.chars().count()).sum();
}

impl FilePayload for TestGenerationRequest {
    fn file_count(&self) -> usize {
        return self.files.len();
    }

    fn content_length(&self) -> usize {
        return chars(&self.files);
    }
}

impl FilePayload for CoverageAnalysisRequest {
    fn file_count(&self) -> usize {
        return self.source_files.len() + self.test_files.len();
    }

    fn content_length(&self) -> usize {
        return chars(&self.source_files) + chars(&self.test_files);
    }
}

impl FilePayload for TestPriorityAnalysisRequest {
    fn file_count(&self) -> usize {
        return self.source_files.len() + self.test_files.len();
    }

    fn content_length(&self) -> usize {
        return chars(&self.source_files) + chars(&self.test_files);
    }
}

impl FilePayload for RequirementsAnalysisRequest {
    fn file_count(&self) -> usize {
        return 1 + self.source_files.as_ref().map_or(0, |files| return files.len());
    }

    fn content_length(&self) -> usize {
        let sources = self
            .source_files
            .as_ref()
            .map_or(0, |files| return chars(files));
        return self.requirements_content.content.chars().count() + sources;
    }
}

impl FilePayload for RequirementsOptimizationRequest {
    fn file_count(&self) -> usize {
        return 1 + self.source_files.as_ref().map_or(0, |files| return files.len());
    }

    fn content_length(&self) -> usize {
        let sources = self
            .source_files
            .as_ref()
            .map_or(0, |files| return chars(files));
        return self.requirements_content.content.chars().count() + sources;
    }
}
