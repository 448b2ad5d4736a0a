//! Access to the remote todo HTTP service.
//!
//! [`TodoApi`] is the seam between the todo service logic and the network. [`HttpTodoApi`]
//! talks to the real service with reqwest; tests substitute in-memory implementations.

use crate::error::{Result, TodoAgentError};
use crate::todo::models::{NewTodo, Todo, TodoPatch, TodoQuery};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Remote operations offered by the todo service
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// `POST /api/todos`
    async fn create(&self, todo: &NewTodo) -> Result<Todo>;

    /// `PATCH /api/todos/{id}`
    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo>;

    /// `POST /api/todos/{id}/toggle`, flips `completed` unconditionally
    async fn toggle(&self, id: &str) -> Result<Todo>;

    /// `GET /api/todos` with optional server-side filters
    async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>>;
}

/// reqwest-backed client for the todo service
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: &str) -> String {
        format!("{}/{}", self.todos_url(), urlencoding::encode(id))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TodoAgentError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn create(&self, todo: &NewTodo) -> Result<Todo> {
        info!("Creating todo");
        debug!(payload = ?todo, "POST {}", self.todos_url());

        let response = self.client.post(self.todos_url()).json(todo).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        info!(todo_id = id, "Updating todo");
        debug!(payload = ?patch, "PATCH {}", self.todo_url(id));

        let response = self.client.patch(self.todo_url(id)).json(patch).send().await?;
        Self::decode(response).await
    }

    async fn toggle(&self, id: &str) -> Result<Todo> {
        info!(todo_id = id, "Toggling todo");

        let response = self
            .client
            .post(format!("{}/toggle", self.todo_url(id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>> {
        info!("Listing todos");
        debug!(query = ?query, "GET {}", self.todos_url());

        let response = self.client.get(self.todos_url()).query(query).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const TODO_JSON: &str = r#"{"id":"42","text":"Write report","dueDate":null,"tags":["work"],"completed":false}"#;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpTodoApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.todo_url("1"), "http://localhost:3000/api/todos/1");
    }

    #[test]
    fn test_todo_id_is_percent_encoded() {
        let api = HttpTodoApi::new("http://localhost:3000");
        assert_eq!(api.todo_url("a/b c"), "http://localhost:3000/api/todos/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_create_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/todos")
            .match_body(Matcher::Json(json!({
                "text": "Write report",
                "dueDate": null,
                "tags": ["work"]
            })))
            .with_status(201)
            .with_body(TODO_JSON)
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let payload = NewTodo::new("Write report").with_tags(Some(vec!["work".to_string()]));
        let todo = api.create(&payload).await.unwrap();

        mock.assert_async().await;
        assert_eq!(todo.id, "42");
        assert_eq!(todo.tags, vec!["work"]);
    }

    #[tokio::test]
    async fn test_update_sends_partial_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/todos/42")
            .match_body(Matcher::Json(json!({"text": "Write final report"})))
            .with_status(200)
            .with_body(
                r#"{"id":"42","text":"Write final report","dueDate":null,"tags":["work"],"completed":false}"#,
            )
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let patch = TodoPatch {
            text: Some("Write final report".to_string()),
            ..Default::default()
        };
        let todo = api.update("42", &patch).await.unwrap();

        mock.assert_async().await;
        assert_eq!(todo.text, "Write final report");
    }

    #[tokio::test]
    async fn test_toggle_posts_to_toggle_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/todos/42/toggle")
            .with_status(200)
            .with_body(
                r#"{"id":"42","text":"Write report","dueDate":null,"tags":[],"completed":true}"#,
            )
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let todo = api.toggle("42").await.unwrap();

        mock.assert_async().await;
        assert!(todo.completed);
    }

    #[tokio::test]
    async fn test_list_sends_query_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/todos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("dueBefore".into(), "2026-10-18T23:59:59".into()),
                Matcher::UrlEncoded("tags".into(), "work".into()),
            ]))
            .with_status(200)
            .with_body(format!("[{}]", TODO_JSON))
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let query = TodoQuery {
            due_before: Some("2026-10-18T23:59:59".to_string()),
            tags: Some("work".to_string()),
        };
        let todos = api.list(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(todos.len(), 1);
    }

    #[tokio::test]
    async fn test_list_without_filters_sends_no_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/todos")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let todos = api.list(&TodoQuery::default()).await.unwrap();

        mock.assert_async().await;
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/todos/missing/toggle")
            .with_status(404)
            .with_body("Todo not found")
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let result = api.toggle("missing").await;

        mock.assert_async().await;
        match result {
            Err(TodoAgentError::RemoteStatus { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "Todo not found");
            }
            other => panic!("Expected RemoteStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_serialization_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/todos")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let api = HttpTodoApi::new(server.url());
        let result = api.list(&TodoQuery::default()).await;

        assert!(matches!(result, Err(TodoAgentError::SerializationError(_))));
    }
}
