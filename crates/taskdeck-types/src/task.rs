use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, owned shell command record mirrored from the task service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution: Option<TaskExecution>,
}

impl Task {
    /// Start time of the most recent execution, if the task ever ran.
    pub fn last_started(&self) -> Option<DateTime<Utc>> {
        self.last_execution.as_ref().and_then(|e| e.start_time)
    }
}

/// Timing and captured output of the most recent execution.
///
/// Overwritten by each subsequent execution; the service keeps no history
/// beyond the latest record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecution {
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub output: Option<String>,
}

impl TaskExecution {
    /// Wall-clock duration in seconds, when both timestamps are present.
    pub fn duration_seconds(&self) -> Option<f64> {
        duration_seconds(self.start_time, self.end_time)
    }
}

/// Outcome of one execution request. `Success` corresponds to a zero
/// process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Success,
    Failed,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::Failed => "FAILED",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

impl std::str::FromStr for ExecutionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUCCESS" => Ok(ExecutionStatus::Success),
            "FAILED" | "FAILURE" => Ok(ExecutionStatus::Failed),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of `PUT /tasks/{id}/execute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    pub task_id: String,
    pub status: ExecutionStatus,
    pub exit_code: i32,
    pub output: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl ExecutionResponse {
    pub fn duration_seconds(&self) -> Option<f64> {
        duration_seconds(self.start_time, self.end_time)
    }
}

/// The creatable/updatable subset of a task, used by the task form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    pub name: String,
    pub owner: String,
    pub command: String,
}

fn duration_seconds(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<f64> {
    match (start, end) {
        (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 1000.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_wire_format() {
        let json = r#"{
            "id": "665f1c2ab6e7",
            "name": "Backup",
            "owner": "Ops",
            "command": "tar -czf a.tgz /data",
            "lastExecution": {
                "startTime": "2026-08-05T10:00:00Z",
                "endTime": "2026-08-05T10:00:02.500Z",
                "output": "done"
            }
        }"#;

        let task: Task = serde_json::from_str(json).expect("valid task JSON");
        assert_eq!(task.name, "Backup");
        let execution = task.last_execution.expect("execution present");
        assert_eq!(execution.output.as_deref(), Some("done"));
        assert_eq!(execution.duration_seconds(), Some(2.5));
    }

    #[test]
    fn task_without_execution_deserializes() {
        let json = r#"{"id": "1", "name": "Ping", "owner": "Ops", "command": "ping -c 1 host"}"#;
        let task: Task = serde_json::from_str(json).expect("valid task JSON");
        assert!(task.last_execution.is_none());
        assert!(task.last_started().is_none());
    }

    #[test]
    fn payload_serializes_without_extra_fields() {
        let payload = TaskPayload {
            name: "Backup".into(),
            owner: "Ops".into(),
            command: "tar -czf a.tgz /data".into(),
        };
        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Backup",
                "owner": "Ops",
                "command": "tar -czf a.tgz /data"
            })
        );
    }

    #[test]
    fn execution_response_deserializes_wire_format() {
        let json = r#"{
            "taskId": "665f1c2ab6e7",
            "status": "SUCCESS",
            "exitCode": 0,
            "output": "Pod created",
            "startTime": "2026-08-05T10:00:00Z",
            "endTime": "2026-08-05T10:00:01Z"
        }"#;

        let response: ExecutionResponse = serde_json::from_str(json).expect("valid response");
        assert_eq!(response.status, ExecutionStatus::Success);
        assert!(response.status.is_success());
        assert_eq!(response.exit_code, 0);
        assert_eq!(response.duration_seconds(), Some(1.0));
    }

    #[test]
    fn status_parses_and_round_trips() {
        assert_eq!("success".parse(), Ok(ExecutionStatus::Success));
        assert_eq!("FAILED".parse(), Ok(ExecutionStatus::Failed));
        assert!("running".parse::<ExecutionStatus>().is_err());
        assert_eq!(ExecutionStatus::Failed.to_string(), "FAILED");
    }

    #[test]
    fn duration_requires_both_timestamps() {
        let execution = TaskExecution {
            start_time: Some("2026-08-05T10:00:00Z".parse().unwrap()),
            end_time: None,
            output: None,
        };
        assert_eq!(execution.duration_seconds(), None);
    }
}
