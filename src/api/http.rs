use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::api::{AdminApi, TaskMap, UserKeysRequest};

pub struct HttpAdminApi {
    base_url: String,
    client: Client,
}

impl HttpAdminApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn get_config(&self) -> Result<Value> {
        let url = format!("{}/conf", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if resp.status().is_success() {
            Ok(resp.json::<Value>().await?)
        } else {
            Err(anyhow!("Failed to fetch config: {}", resp.status()))
        }
    }

    async fn save_config(&self, config: &Value) -> Result<Value> {
        let url = format!("{}/save-config", self.base_url);
        let resp = self.client.post(&url).json(config).send().await?;
        if resp.status().is_success() {
            Ok(resp.json::<Value>().await?)
        } else {
            Err(anyhow!("Failed to save config: {}", resp.text().await?))
        }
    }

    async fn list_tasks(&self) -> Result<TaskMap> {
        let url = format!("{}/tasks", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if resp.status().is_success() {
            Ok(resp.json::<TaskMap>().await?)
        } else {
            Err(anyhow!("Failed to list tasks: {}", resp.status()))
        }
    }

    async fn delete_task(&self, task_id: &str) -> Result<()> {
        let url = format!("{}/delete_task/{}", self.base_url, task_id);
        let resp = self.client.delete(&url).send().await?;
        if resp.status().is_success() {
            // Server returns an empty body on success.
            Ok(())
        } else {
            Err(anyhow!(
                "Failed to delete task {}: {}",
                task_id,
                resp.status()
            ))
        }
    }

    async fn get_public_key(&self) -> Result<String> {
        let url = format!("{}/security/get-public-key", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Accept", "text/plain")
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.text().await?)
        } else {
            Err(anyhow!("Failed to fetch public key: {}", resp.status()))
        }
    }

    async fn create_account(&self, user_id: Uuid, body: &Value) -> Result<Value> {
        let url = format!("{}/create_new_account/{}", self.base_url, user_id);
        let resp = self.client.post(&url).json(body).send().await?;
        if resp.status().is_success() {
            Ok(resp.json::<Value>().await?)
        } else {
            Err(anyhow!("Failed to create account: {}", resp.text().await?))
        }
    }

    async fn set_user_keys(&self, request: &UserKeysRequest) -> Result<Value> {
        let url = format!("{}/set_userkeys", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        if resp.status().is_success() {
            Ok(resp.json::<Value>().await?)
        } else {
            Err(anyhow!("Failed to set user keys: {}", resp.text().await?))
        }
    }
}
