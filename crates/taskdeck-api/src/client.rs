use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use taskdeck_types::{ExecutionResponse, Task, TaskPayload};

use crate::error::ApiError;
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the task service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Operations the task service exposes.
///
/// The GUI depends on this trait rather than the concrete client so state
/// transitions can be exercised against a scripted implementation.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task collection.
    async fn list(&self) -> Result<Vec<Task>>;
    /// Fetch tasks whose name contains the given term.
    async fn search(&self, name: &str) -> Result<Vec<Task>>;
    /// Fetch a single task by id.
    async fn get(&self, id: &str) -> Result<Task>;
    /// Create a task and return the server-confirmed record.
    async fn create(&self, payload: &TaskPayload) -> Result<Task>;
    /// Replace a task's editable fields and return the updated record.
    async fn update(&self, id: &str, payload: &TaskPayload) -> Result<Task>;
    /// Delete a task.
    async fn remove(&self, id: &str) -> Result<()>;
    /// Run the task's command remotely and return the execution result.
    async fn execute(&self, id: &str) -> Result<ExecutionResponse>;
}

/// HTTP implementation of [`TaskApi`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = Self::check(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Turn a non-2xx response into a normalized error, consuming the body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "task service returned an error");
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}

#[async_trait]
impl TaskApi for TaskApiClient {
    async fn list(&self) -> Result<Vec<Task>> {
        debug!("listing tasks");
        self.send_json(self.http.get(self.endpoint("/tasks"))).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Task>> {
        debug!(name, "searching tasks");
        self.send_json(
            self.http
                .get(self.endpoint("/tasks/search"))
                .query(&[("name", name)]),
        )
        .await
    }

    async fn get(&self, id: &str) -> Result<Task> {
        self.send_json(self.http.get(self.endpoint(&format!("/tasks/{id}"))))
            .await
    }

    async fn create(&self, payload: &TaskPayload) -> Result<Task> {
        debug!(name = %payload.name, "creating task");
        self.send_json(self.http.post(self.endpoint("/tasks")).json(payload))
            .await
    }

    async fn update(&self, id: &str, payload: &TaskPayload) -> Result<Task> {
        debug!(id, "updating task");
        self.send_json(
            self.http
                .put(self.endpoint(&format!("/tasks/{id}")))
                .json(payload),
        )
        .await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        debug!(id, "deleting task");
        Self::check(
            self.http
                .delete(self.endpoint(&format!("/tasks/{id}")))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    async fn execute(&self, id: &str) -> Result<ExecutionResponse> {
        debug!(id, "executing task");
        self.send_json(
            self.http
                .put(self.endpoint(&format!("/tasks/{id}/execute"))),
        )
        .await
    }
}
