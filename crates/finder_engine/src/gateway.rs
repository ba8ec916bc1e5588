use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use finder_core::{ExtractedReview, ExtractionResult, FailureStatus};
use finder_logging::{finder_debug, finder_info, finder_warn};
use serde::Deserialize;
use tokio::process::Command;

use crate::ExecutorError;

#[derive(Debug, Clone)]
pub struct ExecutorSettings {
    /// Program invoked as `<program> check|extract <title> <year>`.
    pub program: PathBuf,
    pub check_timeout: Duration,
    pub extract_timeout: Duration,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            program: PathBuf::from("./ai_wrapper.sh"),
            check_timeout: Duration::from_secs(15),
            extract_timeout: Duration::from_secs(180),
        }
    }
}

/// Availability check and extraction on the review site.
///
/// Neither operation fails: every problem is folded into the return value.
#[async_trait::async_trait]
pub trait ReviewGateway: Send + Sync {
    /// `false` covers both "not on the site" and "could not find out".
    async fn check_exists(&self, title: &str, year: &str) -> bool;

    async fn extract_review(&self, title: &str, year: &str) -> ExtractionResult;
}

/// Gateway backed by an external program that prints one JSON document.
#[derive(Debug, Clone)]
pub struct ProcessGateway {
    settings: ExecutorSettings,
}

impl ProcessGateway {
    pub fn new(settings: ExecutorSettings) -> Self {
        Self { settings }
    }

    async fn invoke<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        title: &str,
        year: &str,
        timeout: Duration,
    ) -> Result<T, ExecutorError> {
        finder_debug!(
            "Running {:?} {} {:?} {}",
            self.settings.program,
            action,
            title,
            year
        );
        let child = Command::new(&self.settings.program)
            .arg(action)
            .arg(title)
            .arg(year)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecutorError::Spawn {
                program: self.settings.program.display().to_string(),
                source,
            })?;

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| ExecutorError::Timeout(timeout))?
            .map_err(|source| ExecutorError::Spawn {
                program: self.settings.program.display().to_string(),
                source,
            })?;

        if !output.stderr.is_empty() {
            finder_debug!(
                "Executor stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Err(ExecutorError::EmptyOutput);
        }
        Ok(serde_json::from_str(stdout)?)
    }
}

#[async_trait::async_trait]
impl ReviewGateway for ProcessGateway {
    async fn check_exists(&self, title: &str, year: &str) -> bool {
        match self
            .invoke::<CheckReply>("check", title, year, self.settings.check_timeout)
            .await
        {
            Ok(reply) => {
                finder_info!("Check {:?} ({}) -> {}", title, year, reply.status);
                reply.status == "found"
            }
            Err(err) => {
                finder_warn!("Check {:?} ({}) failed: {}", title, year, err);
                false
            }
        }
    }

    async fn extract_review(&self, title: &str, year: &str) -> ExtractionResult {
        let result = match self
            .invoke::<ExtractReply>("extract", title, year, self.settings.extract_timeout)
            .await
        {
            Ok(reply) => reply.into_result(),
            Err(err) => {
                let status = match err {
                    ExecutorError::Timeout(_) => FailureStatus::Timeout,
                    ExecutorError::Malformed(_) => FailureStatus::ParseError,
                    ExecutorError::Spawn { .. } | ExecutorError::EmptyOutput => {
                        FailureStatus::Error
                    }
                };
                ExtractionResult::failure(status, err.to_string())
            }
        };
        finder_info!(
            "Extract {:?} ({}) -> {}",
            title,
            year,
            result.status()
        );
        result
    }
}

#[derive(Debug, Deserialize)]
struct CheckReply {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ExtractReply {
    status: String,
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    content_length: Option<u64>,
    file_path: Option<String>,
    message: Option<String>,
}

impl ExtractReply {
    fn into_result(self) -> ExtractionResult {
        let message = self
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        match self.status.as_str() {
            "success" => ExtractionResult::Success(ExtractedReview {
                title: self.title,
                author: self.author,
                date: self.date,
                content_length: self.content_length.unwrap_or(0),
                file_path: self.file_path,
            }),
            "timeout" => ExtractionResult::failure(FailureStatus::Timeout, message),
            "parse_error" => ExtractionResult::failure(FailureStatus::ParseError, message),
            "error" => ExtractionResult::failure(FailureStatus::Error, message),
            other => ExtractionResult::failure(
                FailureStatus::Error,
                format!("unexpected status {other:?}: {message}"),
            ),
        }
    }
}
