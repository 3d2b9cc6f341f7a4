use goal_service::services::{GoalStore, InMemoryGoalStore};
use goal_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryGoalStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn GoalStore>) -> Self {
        let app = Application::with_store(0, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }

    pub async fn create_goal(&self, client: &reqwest::Client, text: &str) -> serde_json::Value {
        let response = client
            .post(format!("{}/goals", self.address))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn list_goals(&self, client: &reqwest::Client) -> Vec<serde_json::Value> {
        let response = client
            .get(format!("{}/goals", self.address))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["goals"]
            .as_array()
            .expect("goals is not an array")
            .clone()
    }
}
