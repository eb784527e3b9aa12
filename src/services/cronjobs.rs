use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::edge::EdgeClient;
use crate::error::EdgeError;

pub const CRONJOBS_FUNCTION: &str = "cronjobs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cronjob {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub command: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_status: Option<RunStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failed,
    Running,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCronjob {
    pub name: String,
    pub schedule: String,
    pub command: String,
    pub enabled: bool,
}

/// Partial update; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronjobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CronjobService {
    client: EdgeClient,
}

impl CronjobService {
    pub fn new(client: EdgeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Cronjob>, EdgeError> {
        self.client.call(CRONJOBS_FUNCTION, "list").await
    }

    pub async fn get(&self, id: &str) -> Result<Cronjob, EdgeError> {
        self.client.invoke(CRONJOBS_FUNCTION, "get", &json!({ "id": id })).await
    }

    pub async fn create(&self, job: &NewCronjob) -> Result<Cronjob, EdgeError> {
        self.client.invoke(CRONJOBS_FUNCTION, "create", job).await
    }

    pub async fn update(&self, id: &str, patch: &CronjobPatch) -> Result<Cronjob, EdgeError> {
        self.client
            .invoke(CRONJOBS_FUNCTION, "update", &json!({ "id": id, "updates": patch }))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), EdgeError> {
        let _: IgnoredAny = self
            .client
            .invoke(CRONJOBS_FUNCTION, "delete", &json!({ "id": id }))
            .await?;
        Ok(())
    }

    pub async fn set_enabled(&self, id: &str, enabled: bool) -> Result<Cronjob, EdgeError> {
        self.client
            .invoke(CRONJOBS_FUNCTION, "toggle", &json!({ "id": id, "enabled": enabled }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = CronjobPatch {
            schedule: Some("0 * * * *".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "schedule": "0 * * * *" }));
    }

    #[test]
    fn cronjob_tolerates_missing_optional_fields() {
        let job: Cronjob = serde_json::from_value(json!({
            "id": "a1", "name": "nightly backup", "schedule": "0 3 * * *", "command": "backup.sh",
            "last_status": "failed", "last_run_at": "2024-05-01T03:00:00Z"
        }))
        .unwrap();
        assert!(!job.enabled);
        assert_eq!(job.last_status, Some(RunStatus::Failed));
        assert!(job.created_at.is_none());
    }
}
