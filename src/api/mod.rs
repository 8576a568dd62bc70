use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    #[serde(rename = "type")]
    pub task_type: String,
    pub url: String,
}

/// Task id -> descriptor, as returned by `GET /tasks`. Ids are opaque;
/// BTreeMap keeps listing order stable.
pub type TaskMap = BTreeMap<String, TaskDescriptor>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserKeysRequest {
    pub account_id: Uuid,
    pub encrypted_apikey: String,
    pub encrypted_secret_key: String,
    pub encrypted_passphrase: String,
}

/// Client surface of the bot admin API. Implemented over HTTP for the real
/// server and in-memory for tests.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_config(&self) -> Result<Value>;
    async fn save_config(&self, config: &Value) -> Result<Value>;

    async fn list_tasks(&self) -> Result<TaskMap>;
    async fn delete_task(&self, task_id: &str) -> Result<()>;

    async fn get_public_key(&self) -> Result<String>;
    async fn create_account(&self, user_id: Uuid, body: &Value) -> Result<Value>;
    async fn set_user_keys(&self, request: &UserKeysRequest) -> Result<Value>;
}

pub mod http;
pub use http::HttpAdminApi;
