//! Wallet Watcher API Client
//!
//! The request helper every view goes through. It attaches the stored API
//! key, encodes and decodes JSON and surfaces failures uniformly: each
//! failed call shows exactly one error notification on the host UI and then
//! returns `Err`, so callers only decide whether to skip further work.

mod transport;

#[cfg(feature = "native")]
mod http;

pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};

#[cfg(feature = "native")]
pub use http::ReqwestTransport;

#[cfg(test)]
pub(crate) use transport::testing;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::credentials::CredentialStore;
use crate::error::{ClientError, ClientResult, GENERIC_FAILURE};
use crate::models::{
    Alert, AlertList, ErrorBody, HealthStatus, NewAlert, NewWallet, TransactionList, Wallet,
    WalletEnvelope, WalletList,
};
use crate::ui::{NotificationLevel, UserInterface};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Versioned API prefix
pub const API_PREFIX: &str = "/api/v1";

/// Per-call options for [`ApiClient::request`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Merged over the default headers; caller values win
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self::new(Method::Post).body(body)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    /// Builder method: set JSON body
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Builder method: add or override a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Merge `overrides` over `defaults`, matching names case-insensitively
pub fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (name, value) in overrides {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        merged.push((name.clone(), value.clone()));
    }
    merged
}

/// REST client bound to one origin, one credential store and one host UI
#[derive(Debug, Clone)]
pub struct ApiClient<T, S, U> {
    base_url: String,
    transport: T,
    credentials: S,
    ui: U,
}

impl<T, S, U> ApiClient<T, S, U>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    /// Create a client for the given origin (e.g. `http://localhost:5000`)
    pub fn new(base_url: impl Into<String>, transport: T, credentials: S, ui: U) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            credentials,
            ui,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credentials(&self) -> &S {
        &self.credentials
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Default headers for the next request
    fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(2);
        // Without a key the header is omitted and the server answers 401
        if let Some(key) = self.credentials.api_key() {
            headers.push((API_KEY_HEADER.to_string(), key));
        }
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        headers
    }

    /// Issue a request and decode the JSON response
    ///
    /// Any failure (HTTP status, network, decoding) is shown to the user
    /// once and returned as `Err`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<R> {
        match self.execute(endpoint, options).await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.report(e)),
        }
    }

    /// Serialize `body` and send it with `method`
    pub async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: &B,
    ) -> ClientResult<R> {
        let body = serde_json::to_value(body)
            .map_err(|e| self.report(ClientError::Encode(e.to_string())))?;
        self.request(endpoint, RequestOptions::new(method).body(body))
            .await
    }

    fn report(&self, error: ClientError) -> ClientError {
        self.ui.notify(NotificationLevel::Error, &error.to_string());
        error
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<R> {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = merge_headers(self.default_headers(), &options.headers);
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ClientError::Encode(e.to_string()))?;

        tracing::debug!(method = %options.method, url = %url, "API request");

        let response = self
            .transport
            .send(HttpRequest {
                method: options.method,
                url,
                headers,
                body,
            })
            .await?;

        if !response.is_success() {
            let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
            let message = body
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(ClientError::Api {
                status: response.status,
                message,
            });
        }

        // DELETE and friends may answer with an empty body
        let text = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ============ Endpoints ============

    /// `GET /api/v1/wallets`
    pub async fn list_wallets(&self) -> ClientResult<WalletList> {
        self.request(&format!("{}/wallets", API_PREFIX), RequestOptions::get())
            .await
    }

    /// `GET /api/v1/wallets/{address}`
    pub async fn get_wallet(&self, address: &str) -> ClientResult<Wallet> {
        let envelope: WalletEnvelope = self
            .request(&wallet_path(address, ""), RequestOptions::get())
            .await?;
        Ok(envelope.wallet)
    }

    /// `POST /api/v1/wallets`
    ///
    /// Any 2xx counts as created. The wallet is returned when the body
    /// carries one, bare or under `wallet`.
    pub async fn add_wallet(&self, address: &str, label: &str) -> ClientResult<Option<Wallet>> {
        let body = NewWallet {
            address: address.to_string(),
            label: label.to_string(),
        };
        let created: serde_json::Value = self
            .send_json(&format!("{}/wallets", API_PREFIX), Method::Post, &body)
            .await?;
        let wallet: Option<Wallet> = created_record(created, "wallet");
        Ok(wallet.filter(|wallet| !wallet.address.is_empty()))
    }

    /// `GET /api/v1/wallets/{address}/transactions`
    pub async fn wallet_transactions(&self, address: &str) -> ClientResult<TransactionList> {
        self.request(&wallet_path(address, "/transactions"), RequestOptions::get())
            .await
    }

    /// `GET /api/v1/wallets/{address}/alerts`
    pub async fn wallet_alerts(&self, address: &str) -> ClientResult<AlertList> {
        self.request(&wallet_path(address, "/alerts"), RequestOptions::get())
            .await
    }

    /// `POST /api/v1/wallets/{address}/alerts`
    ///
    /// Same body handling as [`ApiClient::add_wallet`], keyed on `alert`.
    pub async fn create_alert(
        &self,
        address: &str,
        alert: &NewAlert,
    ) -> ClientResult<Option<Alert>> {
        let created: serde_json::Value = self
            .send_json(&wallet_path(address, "/alerts"), Method::Post, alert)
            .await?;
        let alert: Option<Alert> = created_record(created, "alert");
        Ok(alert.filter(|alert| alert.id.is_some()))
    }

    /// `DELETE /api/v1/alerts/{id}`
    pub async fn delete_alert(&self, alert_id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .request(
                &format!("{}/alerts/{}", API_PREFIX, alert_id),
                RequestOptions::delete(),
            )
            .await?;
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.request("/health", RequestOptions::get()).await
    }
}

/// Record echoed back by a create call, if the body holds a decodable one
fn created_record<R: DeserializeOwned>(body: serde_json::Value, key: &str) -> Option<R> {
    let record = body.get(key).cloned().unwrap_or(body);
    match serde_json::from_value(record) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!("Create response carries no {}: {}", key, e);
            None
        }
    }
}

fn wallet_path(address: &str, suffix: &str) -> String {
    format!(
        "{}/wallets/{}{}",
        API_PREFIX,
        urlencoding::encode(address),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::error::TransportError;
    use crate::ui::testing::RecordingUi;
    use serde_json::json;

    const BASE: &str = "http://wallet.test";

    fn client(
        key: Option<&str>,
    ) -> ApiClient<FakeTransport, MemoryCredentialStore, RecordingUi> {
        let store = match key {
            Some(k) => MemoryCredentialStore::with_key(k),
            None => MemoryCredentialStore::new(),
        };
        ApiClient::new(BASE, FakeTransport::new(BASE), store, RecordingUi::default())
    }

    #[tokio::test]
    async fn test_request_sends_key_and_json_headers() {
        let client = client(Some("secret"));
        client
            .transport
            .respond(Method::Get, "/api/v1/wallets", 200, json!({"wallets": []}));

        let list = client.list_wallets().await.unwrap();
        assert!(list.wallets.is_empty());

        let sent = client.transport.requests.borrow()[0].clone();
        assert_eq!(sent.url, "http://wallet.test/api/v1/wallets");
        assert_eq!(sent.header("x-api-key"), Some("secret"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let client = client(Some("secret"));
        client
            .transport
            .respond(Method::Get, "/health", 200, json!({"status": "healthy"}));

        let options = RequestOptions::get()
            .header("x-api-key", "other")
            .header("X-Trace", "1");
        let _: HealthStatus = client.request("/health", options).await.unwrap();

        let sent = client.transport.requests.borrow()[0].clone();
        assert_eq!(sent.header("X-API-Key"), Some("other"));
        assert_eq!(sent.header("X-Trace"), Some("1"));
        assert_eq!(
            sent.headers
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case("x-api-key"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_missing_key_omits_header() {
        let client = client(None);
        client.transport.respond(
            Method::Get,
            "/api/v1/wallets",
            401,
            json!({"error": "API key required"}),
        );

        let err = client.list_wallets().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(client.transport.requests.borrow()[0]
            .header(API_KEY_HEADER)
            .is_none());
    }

    #[tokio::test]
    async fn test_error_uses_server_message_and_notifies_once() {
        let client = client(Some("k"));
        client.transport.respond(
            Method::Post,
            "/api/v1/wallets",
            400,
            json!({"error": "Invalid Ethereum address"}),
        );

        let err = client.add_wallet("nope", "").await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Api {
                status: 400,
                message: "Invalid Ethereum address".to_string()
            }
        );
        assert_eq!(client.ui.errors(), vec!["Invalid Ethereum address"]);
    }

    #[tokio::test]
    async fn test_error_without_message_falls_back() {
        let client = client(Some("k"));
        client
            .transport
            .respond_raw(Method::Get, "/api/v1/wallets", 500, "<html>oops</html>");

        let err = client.list_wallets().await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
        assert_eq!(client.ui.errors(), vec!["Request failed"]);
    }

    #[tokio::test]
    async fn test_network_failure_treated_like_http_failure() {
        let client = client(Some("k"));
        client.transport.fail(
            Method::Get,
            "/api/v1/wallets",
            TransportError::Network("connection refused".into()),
        );

        let err = client.list_wallets().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(client.ui.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let client = client(Some("k"));
        client
            .transport
            .respond_raw(Method::Get, "/api/v1/wallets", 200, "not json");

        let err = client.list_wallets().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(client.ui.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let client = client(Some("k"));
        client
            .transport
            .respond_raw(Method::Delete, "/api/v1/alerts/7", 204, "");

        client.delete_alert(7).await.unwrap();
        assert_eq!(client.transport.calls(), vec!["DELETE /api/v1/alerts/7"]);
        assert!(client.ui.notifications.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_alert_body() {
        let client = client(Some("k"));
        client.transport.respond(
            Method::Post,
            "/api/v1/wallets/0xabc/alerts",
            201,
            json!({"message": "Alert created successfully", "alert": {"id": 1, "alert_type": "transaction"}}),
        );

        let created = client
            .create_alert("0xabc", &NewAlert::new("transaction", ""))
            .await
            .unwrap();
        assert_eq!(created.map(|alert| alert.id), Some(Some(1)));

        let sent = client.transport.requests.borrow()[0].clone();
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"alert_type": "transaction", "threshold": "", "notification_method": "email"})
        );
    }

    #[tokio::test]
    async fn test_create_accepts_any_success_body() {
        let client = client(Some("k"));
        client.transport.respond(
            Method::Post,
            "/api/v1/wallets",
            201,
            json!({"address": "0xabc", "label": "x"}),
        );
        client.transport.respond(
            Method::Post,
            "/api/v1/wallets/0xabc/alerts",
            201,
            json!({"message": "Alert created successfully"}),
        );

        let wallet = client.add_wallet("0xabc", "x").await.unwrap().unwrap();
        assert_eq!(wallet.address, "0xabc");
        assert_eq!(wallet.label.as_deref(), Some("x"));

        let alert = client
            .create_alert("0xabc", &NewAlert::new("transaction", ""))
            .await
            .unwrap();
        assert!(alert.is_none());
        assert!(client.ui.notifications.borrow().is_empty());
    }

    #[test]
    fn test_wallet_path_is_encoded() {
        assert_eq!(
            wallet_path("0xab cd/ef", "/alerts"),
            "/api/v1/wallets/0xab%20cd%2Fef/alerts"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(
            "http://host:5000/",
            FakeTransport::new("http://host:5000"),
            MemoryCredentialStore::new(),
            RecordingUi::default(),
        );
        assert_eq!(client.base_url(), "http://host:5000");
    }
}
