#[cfg(test)]
#[path = "devexy_test.rs"]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_derive::Deserialize;

use crate::configuration::Settings;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::CoverageAnalysisRequest;
use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::DevexyError;
use crate::domain::models::FileContent;
use crate::domain::models::FilePayload;
use crate::domain::models::GeneratedTest;
use crate::domain::models::Operation;
use crate::domain::models::PrompterRef;
use crate::domain::models::RequirementsAnalysisRequest;
use crate::domain::models::RequirementsAnalysisResponse;
use crate::domain::models::RequirementsContent;
use crate::domain::models::RequirementsOptimizationRequest;
use crate::domain::models::RequirementsOptimizationResponse;
use crate::domain::models::TestGenerationRequest;
use crate::domain::models::TestPriorityAnalysisRequest;
use crate::domain::models::TestPriorityAnalysisResponse;
use crate::domain::models::TestType;
use crate::domain::services::read_files;
use crate::domain::services::CredentialStore;
use crate::domain::services::ProgressSink;
use crate::domain::services::ProgressTicker;
use crate::domain::services::Workspace;

/// Payloads above either limit need the user's go ahead before sending.
pub const MAX_FILES_WITHOUT_CONFIRM: usize = 10;
pub const MAX_CHARS_WITHOUT_CONFIRM: usize = 500_000;

pub const DEFAULT_PRIORITY_DESCRIPTION: &str = "Analyze test case priority and risk assessment";
pub const DEFAULT_REQUIREMENTS_DESCRIPTION: &str =
    "Analyze requirements file for performance and memory usage";
pub const DEFAULT_OPTIMIZATION_DESCRIPTION: &str =
    "Optimize requirements file for better performance and lower memory usage";

pub fn default_optimization_goals() -> Vec<String> {
    return vec![
        "memory".to_string(),
        "performance".to_string(),
        "security".to_string(),
    ];
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TestGenerationResponse {
    #[serde(default)]
    tests: Vec<GeneratedTest>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

/// Inputs of a requirements analysis or optimization run.
#[derive(Clone, Debug, Default)]
pub struct RequirementsInput {
    pub requirements_file: PathBuf,
    pub source_files: Vec<PathBuf>,
    pub description: String,
}

/// Client for the DevExy backend. Every authenticated call follows the same
/// sequence: token, read files, size guard, progress, request, error mapping.
pub struct DevexyClient {
    settings: Settings,
    workspace: Option<Workspace>,
    http: reqwest::Client,
    credentials: Arc<CredentialStore>,
    prompter: PrompterRef,
}

impl DevexyClient {
    pub fn new(
        settings: Settings,
        credentials: Arc<CredentialStore>,
        prompter: PrompterRef,
    ) -> DevexyClient {
        let workspace = Workspace::open(settings.workspace.clone());
        return DevexyClient {
            settings,
            workspace,
            http: reqwest::Client::new(),
            credentials,
            prompter,
        };
    }

    fn url(&self, path: &str) -> String {
        return format!("{}{path}", self.settings.backend_url);
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(DevexyError::Precondition("Username is required".to_string()).into());
        }
        if password.is_empty() {
            return Err(DevexyError::Precondition("Password is required".to_string()).into());
        }

        let res = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "login request failed");
                return Err(DevexyError::Network(
                    "Login request failed. Please check your connection and try again."
                        .to_string(),
                )
                .into());
            }
        };

        let status = res.status();
        if !status.is_success() {
            let detail = error_detail(res)
                .await
                .unwrap_or_else(|| return format!("Request failed with status code {}", status.as_u16()));
            return Err(DevexyError::Auth(detail).into());
        }

        let body = res.json::<LoginResponse>().await?;
        self.credentials
            .store(&body.access_token, Some(username.trim()))
            .await?;

        tracing::info!(username = username.trim(), "logged in");
        return Ok(());
    }

    pub async fn generate_tests(
        &self,
        test_type: TestType,
        files: &[PathBuf],
        test_dir: &str,
        progress: &ProgressSink,
    ) -> Result<Vec<GeneratedTest>> {
        let operation = test_type.operation();
        let token = self.credentials.token().await?;
        progress(operation.preparing_message());

        let test_directory = if test_dir.trim().is_empty() {
            "tests".to_string()
        } else {
            test_dir.trim().to_string()
        };

        let request = TestGenerationRequest {
            files: read_files(self.workspace.as_ref(), files).await?,
            description: test_type.description().to_string(),
            test_directory,
        };

        let res: TestGenerationResponse = self.execute(operation, &token, &request, progress).await?;
        return Ok(res.tests);
    }

    pub async fn analyze_coverage(
        &self,
        source_files: &[PathBuf],
        test_files: &[PathBuf],
        progress: &ProgressSink,
    ) -> Result<CoverageAnalysisResponse> {
        let operation = Operation::Coverage;
        let token = self.credentials.token().await?;
        progress(operation.preparing_message());

        let request = CoverageAnalysisRequest {
            source_files: read_files(self.workspace.as_ref(), source_files).await?,
            test_files: read_files(self.workspace.as_ref(), test_files).await?,
        };

        return self.execute(operation, &token, &request, progress).await;
    }

    pub async fn analyze_test_priority(
        &self,
        source_files: &[PathBuf],
        test_files: &[PathBuf],
        criticality_context: &str,
        progress: &ProgressSink,
    ) -> Result<TestPriorityAnalysisResponse> {
        let operation = Operation::TestPriority;
        let token = self.credentials.token().await?;
        progress(operation.preparing_message());

        let request = TestPriorityAnalysisRequest {
            source_files: read_files(self.workspace.as_ref(), source_files).await?,
            test_files: read_files(self.workspace.as_ref(), test_files).await?,
            description: DEFAULT_PRIORITY_DESCRIPTION.to_string(),
            code_criticality_context: criticality_context.to_string(),
        };

        return self.execute(operation, &token, &request, progress).await;
    }

    pub async fn analyze_requirements(
        &self,
        input: &RequirementsInput,
        progress: &ProgressSink,
    ) -> Result<RequirementsAnalysisResponse> {
        let operation = Operation::RequirementsAnalysis;
        let token = self.credentials.token().await?;
        progress(operation.preparing_message());

        let (requirements_content, source_files) = self.read_requirements(input).await?;
        let request = RequirementsAnalysisRequest {
            requirements_content,
            source_files,
            description: non_empty_or(&input.description, DEFAULT_REQUIREMENTS_DESCRIPTION),
        };

        return self.execute(operation, &token, &request, progress).await;
    }

    pub async fn optimize_requirements(
        &self,
        input: &RequirementsInput,
        goals: &[String],
        keep_dependencies: &[String],
        progress: &ProgressSink,
    ) -> Result<RequirementsOptimizationResponse> {
        let operation = Operation::RequirementsOptimization;
        let token = self.credentials.token().await?;
        progress(operation.preparing_message());

        let (requirements_content, source_files) = self.read_requirements(input).await?;
        let optimization_goals = if goals.is_empty() {
            default_optimization_goals()
        } else {
            goals.to_vec()
        };
        let keep_dependencies = if keep_dependencies.is_empty() {
            None
        } else {
            Some(keep_dependencies.to_vec())
        };

        let request = RequirementsOptimizationRequest {
            requirements_content,
            source_files,
            optimization_goals,
            keep_dependencies,
            description: non_empty_or(&input.description, DEFAULT_OPTIMIZATION_DESCRIPTION),
        };

        return self.execute(operation, &token, &request, progress).await;
    }

    async fn read_requirements(
        &self,
        input: &RequirementsInput,
    ) -> Result<(RequirementsContent, Option<Vec<FileContent>>)> {
        let requirements = read_files(self.workspace.as_ref(), &[input.requirements_file.clone()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                return DevexyError::Precondition("Please select a requirements file first".to_string());
            })?;

        let source_files = if input.source_files.is_empty() {
            None
        } else {
            Some(read_files(self.workspace.as_ref(), &input.source_files).await?)
        };

        return Ok((
            RequirementsContent {
                content: requirements.content,
                filepath: Some(requirements.filepath),
            },
            source_files,
        ));
    }

    async fn confirm_payload_size<Req: FilePayload>(&self, request: &Req) -> Result<()> {
        let file_count = request.file_count();
        let content_length = request.content_length();
        if file_count <= MAX_FILES_WITHOUT_CONFIRM && content_length <= MAX_CHARS_WITHOUT_CONFIRM
        {
            return Ok(());
        }

        let accepted = self
            .prompter
            .confirm(ConfirmPrompt::large_payload(file_count, content_length))
            .await?;
        if !accepted {
            tracing::info!(file_count, content_length, "large payload declined");
            return Err(DevexyError::Cancelled.into());
        }

        return Ok(());
    }

    async fn execute<Req, Res>(
        &self,
        operation: Operation,
        token: &str,
        request: &Req,
        progress: &ProgressSink,
    ) -> Result<Res>
    where
        Req: Serialize + FilePayload + Sync,
        Res: DeserializeOwned,
    {
        self.confirm_payload_size(request).await?;

        let ticker = ProgressTicker::start(
            operation.progress_messages(),
            operation.progress_interval(),
            progress.clone(),
        );
        progress(operation.running_message());

        let res = self.post(operation, token, request).await;
        ticker.stop().await;
        let res = res?;

        progress(operation.processing_message());
        return Ok(res);
    }

    async fn post<Req, Res>(&self, operation: Operation, token: &str, request: &Req) -> Result<Res>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let timeout = self.settings.timeout(operation);
        tracing::debug!(operation = %operation, timeout = ?timeout, "sending request");

        let res = self
            .http
            .post(self.url(operation.path()))
            .bearer_auth(token)
            .json(request)
            .timeout(timeout)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => return Err(transport_error(operation, err)),
        };

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(DevexyError::token_expired().into());
        }

        if !status.is_success() {
            let detail = error_detail(res)
                .await
                .unwrap_or_else(|| return format!("Request failed with status code {}", status.as_u16()));
            tracing::error!(operation = %operation, status = status.as_u16(), detail, "backend error");
            return Err(DevexyError::Backend(operation.backend_message(&detail)).into());
        }

        match res.json::<Res>().await {
            Ok(body) => return Ok(body),
            Err(err) if err.is_timeout() => {
                return Err(DevexyError::Timeout(operation.timeout_message()).into())
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        return default.to_string();
    }

    return value.trim().to_string();
}

fn transport_error(operation: Operation, err: reqwest::Error) -> anyhow::Error {
    tracing::error!(operation = %operation, error = ?err, "request failed");
    if err.is_timeout() {
        return DevexyError::Timeout(operation.timeout_message()).into();
    }

    if err.is_connect() || err.is_request() {
        return DevexyError::Network(operation.network_message()).into();
    }

    return err.into();
}

/// The backend reports failures as `{"detail": ...}`. Validation errors carry
/// a list, which is passed through as JSON.
async fn error_detail(res: reqwest::Response) -> Option<String> {
    let body = res.json::<ErrorResponse>().await.ok()?;
    match body.detail? {
        serde_json::Value::String(detail) => return Some(detail),
        serde_json::Value::Null => return None,
        detail => return Some(detail.to_string()),
    }
}
