//! HTTP gateway implementations.
//!
//! Concrete gateways over the todo backend's REST endpoints:
//!
//! | Operation | Request                          | Response body                    |
//! |-----------|----------------------------------|----------------------------------|
//! | list      | `GET  {base}/getTodos?page={n}`  | `{ total, todos }`               |
//! | create    | `POST {base}/addTodo`            | `{ status, message, todo }`      |
//! | update    | `PUT  {base}/updateTodo/{id}`    | `{ status, message, todo }`      |
//! | delete    | `DELETE {base}/deleteTodo/{id}`  | `{ status, message }`            |
//! | profile   | `GET  {base}/getUserData/{email}`| `User`                           |

use crate::config::ApiConfig;
use crate::error::{GatewayError, Result};
use crate::providers::{DeleteReceipt, Page, ProfileGateway, TodoDraft, TodoGateway};
use crate::state::{Todo, TodoId, User};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

/// Envelope the backend wraps around mutation responses.
#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[allow(dead_code)]
    status: String,
    #[allow(dead_code)]
    message: String,
    todo: Todo,
}

/// Envelope for delete responses. No todo comes back, only the confirmation.
#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[allow(dead_code)]
    status: String,
    message: String,
}

/// Error body the backend returns on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-success response into a [`GatewayError::Remote`].
///
/// Prefers the server's `message` field; falls back to the status code when
/// the body is not the expected error shape.
async fn remote_error(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => GatewayError::Remote(body.message),
        Err(_) => GatewayError::Remote(format!("Server returned {status}")),
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(remote_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

/// HTTP implementation of [`TodoGateway`].
///
/// # Example
///
/// ```no_run
/// use todo_client_home::config::ApiConfig;
/// use todo_client_home::providers::HttpTodoGateway;
///
/// let gateway = HttpTodoGateway::new(&ApiConfig::from_env());
/// ```
#[derive(Debug, Clone)]
pub struct HttpTodoGateway {
    /// HTTP client for making requests.
    client: Client,

    /// Base URL of the todo API, without trailing slash.
    base_url: String,
}

impl HttpTodoGateway {
    /// Create a gateway against the configured API base.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

impl TodoGateway for HttpTodoGateway {
    fn list(&self, page: u32) -> impl Future<Output = Result<Page>> + Send {
        let client = self.client.clone();
        let url = format!("{}/getTodos", self.base_url);

        async move {
            tracing::debug!(page, "Fetching todo page");
            let response = client
                .get(&url)
                .query(&[("page", page)])
                .send()
                .await
                .map_err(transport)?;

            decode::<Page>(response).await
        }
    }

    fn create(&self, draft: &TodoDraft) -> impl Future<Output = Result<Todo>> + Send {
        let client = self.client.clone();
        let url = format!("{}/addTodo", self.base_url);
        let draft = draft.clone();

        async move {
            tracing::debug!(title = %draft.title, "Creating todo");
            let response = client
                .post(&url)
                .json(&draft)
                .send()
                .await
                .map_err(transport)?;

            let envelope = decode::<MutationResponse>(response).await?;
            Ok(envelope.todo)
        }
    }

    fn update(&self, draft: &TodoDraft, id: &TodoId) -> impl Future<Output = Result<Todo>> + Send {
        let client = self.client.clone();
        let url = format!("{}/updateTodo/{}", self.base_url, id.as_str());
        let draft = draft.clone();

        async move {
            tracing::debug!(title = %draft.title, "Updating todo");
            let response = client
                .put(&url)
                .json(&draft)
                .send()
                .await
                .map_err(transport)?;

            let envelope = decode::<MutationResponse>(response).await?;
            Ok(envelope.todo)
        }
    }

    fn delete(&self, id: &TodoId) -> impl Future<Output = Result<DeleteReceipt>> + Send {
        let client = self.client.clone();
        let url = format!("{}/deleteTodo/{}", self.base_url, id.as_str());

        async move {
            tracing::debug!("Deleting todo");
            let response = client.delete(&url).send().await.map_err(transport)?;

            let envelope = decode::<DeleteResponse>(response).await?;
            Ok(DeleteReceipt {
                message: envelope.message,
            })
        }
    }
}

/// HTTP implementation of [`ProfileGateway`].
#[derive(Debug, Clone)]
pub struct HttpProfileGateway {
    /// HTTP client for making requests.
    client: Client,

    /// Base URL of the todo API, without trailing slash.
    base_url: String,
}

impl HttpProfileGateway {
    /// Create a gateway against the configured API base.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

impl ProfileGateway for HttpProfileGateway {
    fn get_profile(&self, email: &str) -> impl Future<Output = Result<User>> + Send {
        let client = self.client.clone();
        // Emails contain '+' and other reserved characters
        let url = format!(
            "{}/getUserData/{}",
            self.base_url,
            urlencoding::encode(email)
        );

        async move {
            tracing::debug!("Fetching user profile");
            let response = client.get(&url).send().await.map_err(transport)?;

            decode::<User>(response).await
        }
    }
}
