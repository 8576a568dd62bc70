use anyhow::{anyhow, Result};
use async_trait::async_trait;
use botctl::api::{AdminApi, TaskDescriptor, TaskMap, UserKeysRequest};
use botctl::tasks::{self, TaskList, NO_TASKS_MESSAGE};
use serde_json::Value;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory stand-in for the HTTP client; records every delete request.
struct MockApi {
    tasks: TaskMap,
    deletes: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl MockApi {
    fn new(tasks: TaskMap) -> Self {
        Self {
            tasks,
            deletes: Mutex::new(Vec::new()),
            fail_deletes: false,
        }
    }

    fn failing(tasks: TaskMap) -> Self {
        Self {
            fail_deletes: true,
            ..Self::new(tasks)
        }
    }

    fn recorded_deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdminApi for MockApi {
    async fn get_config(&self) -> Result<Value> {
        Err(anyhow!("not used"))
    }

    async fn save_config(&self, _config: &Value) -> Result<Value> {
        Err(anyhow!("not used"))
    }

    async fn list_tasks(&self) -> Result<TaskMap> {
        Ok(self.tasks.clone())
    }

    async fn delete_task(&self, task_id: &str) -> Result<()> {
        self.deletes.lock().unwrap().push(task_id.to_string());
        if self.fail_deletes {
            Err(anyhow!("Failed to delete task {}: 500 Internal Server Error", task_id))
        } else {
            Ok(())
        }
    }

    async fn get_public_key(&self) -> Result<String> {
        Err(anyhow!("not used"))
    }

    async fn create_account(&self, _user_id: Uuid, _body: &Value) -> Result<Value> {
        Err(anyhow!("not used"))
    }

    async fn set_user_keys(&self, _request: &UserKeysRequest) -> Result<Value> {
        Err(anyhow!("not used"))
    }
}

fn sample_tasks() -> TaskMap {
    let mut tasks = TaskMap::new();
    tasks.insert(
        "a1".to_string(),
        TaskDescriptor {
            task_type: "interval_minutes_task".to_string(),
            url: "http://localhost:8000/run/a1".to_string(),
        },
    );
    tasks.insert(
        "b2".to_string(),
        TaskDescriptor {
            task_type: "interval_tasks_unlimited".to_string(),
            url: "http://localhost:8000/run/b2".to_string(),
        },
    );
    tasks
}

#[tokio::test]
async fn delete_removes_exactly_one_entry_and_sends_one_request() {
    let api = MockApi::new(sample_tasks());
    let mut list = TaskList::from_map(api.list_tasks().await.unwrap());
    assert_eq!(list.len(), 2);

    let removed = tasks::delete_task(&api, &mut list, "a1").await.unwrap();
    assert!(removed);
    assert_eq!(list.len(), 1);
    assert_eq!(list.entries()[0].id, "b2");
    assert_eq!(api.recorded_deletes(), vec!["a1".to_string()]);
}

#[tokio::test]
async fn failed_delete_leaves_the_list_untouched() {
    let api = MockApi::failing(sample_tasks());
    let mut list = TaskList::from_map(api.list_tasks().await.unwrap());
    let before = list.clone();

    let result = tasks::delete_task(&api, &mut list, "a1").await;
    assert!(result.is_err());
    assert_eq!(list, before);
    // The request itself was still issued exactly once.
    assert_eq!(api.recorded_deletes(), vec!["a1".to_string()]);
}

#[tokio::test]
async fn deleting_an_unknown_id_removes_nothing() {
    let api = MockApi::new(sample_tasks());
    let mut list = TaskList::from_map(api.list_tasks().await.unwrap());

    let removed = tasks::delete_task(&api, &mut list, "missing").await.unwrap();
    assert!(!removed);
    assert_eq!(list.len(), 2);
}

#[test]
fn empty_map_renders_exactly_one_no_tasks_line() {
    let list = TaskList::from_map(TaskMap::new());
    let lines = list.render_lines();
    assert_eq!(lines, vec![NO_TASKS_MESSAGE.to_string()]);
    assert!(list.is_empty());
}

#[test]
fn listing_is_sorted_by_id_and_shows_type_and_url() {
    let list = TaskList::from_map(sample_tasks());
    let lines = list.render_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("interval_minutes_task"));
    assert!(lines[0].contains("http://localhost:8000/run/a1"));
    assert!(lines[0].contains("a1"));
    assert!(lines[1].starts_with("interval_tasks_unlimited"));
}
