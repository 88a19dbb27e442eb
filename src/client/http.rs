//! reqwest-backed transport for native targets

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::error::TransportError;

/// Native HTTP transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport; `None` leaves requests without a timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;
    use crate::credentials::MemoryCredentialStore;
    use crate::ui::testing::RecordingUi;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::{delete, get},
        Json, Router,
    };
    use serde_json::{json, Value};

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == "secret")
            .unwrap_or(false)
    }

    async fn list_wallets(headers: HeaderMap) -> (StatusCode, Json<Value>) {
        if !authorized(&headers) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid API key"})),
            );
        }
        (
            StatusCode::OK,
            Json(json!({
                "wallets": [{"address": "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0", "balance": "0.5"}],
                "count": 1
            })),
        )
    }

    async fn delete_alert(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
        if id == 1 {
            (
                StatusCode::OK,
                Json(json!({"message": "Alert deleted successfully"})),
            )
        } else {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Alert not found"})),
            )
        }
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/api/v1/wallets", get(list_wallets))
            .route("/api/v1/alerts/:id", delete(delete_alert));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_round_trip_against_stub_backend() {
        let base = spawn_backend().await;
        let client = ApiClient::new(
            base,
            ReqwestTransport::new(Some(Duration::from_secs(5))).unwrap(),
            MemoryCredentialStore::with_key("secret"),
            RecordingUi::default(),
        );

        let list = client.list_wallets().await.unwrap();
        assert_eq!(list.wallets.len(), 1);
        assert_eq!(list.wallets[0].balance.as_deref(), Some("0.5"));

        client.delete_alert(1).await.unwrap();
        let err = client.delete_alert(2).await.unwrap_err();
        assert_eq!(err.to_string(), "Alert not found");
        assert_eq!(client.ui().errors(), vec!["Alert not found"]);
    }

    #[tokio::test]
    async fn test_bad_key_surfaces_server_error() {
        let base = spawn_backend().await;
        let client = ApiClient::new(
            base,
            ReqwestTransport::new(None).unwrap(),
            MemoryCredentialStore::with_key("wrong"),
            RecordingUi::default(),
        );

        let err = client.list_wallets().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(
            format!("http://{}", addr),
            ReqwestTransport::new(Some(Duration::from_secs(2))).unwrap(),
            MemoryCredentialStore::with_key("secret"),
            RecordingUi::default(),
        );

        let err = client.list_wallets().await.unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Transport(_)));
        assert_eq!(client.ui().errors().len(), 1);
    }
}
