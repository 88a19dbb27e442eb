//! HTTP transport seam
//!
//! The request helper is written against [`HttpTransport`] so the same code
//! drives reqwest on native targets and `fetch` in the browser. Futures are
//! `?Send` because browser futures never are.

use async_trait::async_trait;
use std::fmt;

use crate::error::TransportError;

/// HTTP verbs used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-resolved outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL (origin + endpoint)
    pub url: String,
    /// Header name/value pairs, already merged
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over whatever network stack the host provides
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    use super::*;

    type Reply = Result<HttpResponse, TransportError>;

    /// Scripted transport keyed by method and endpoint path
    ///
    /// Each route holds a queue of replies; the last reply repeats once the
    /// queue is drained. Unknown routes answer 404.
    pub struct FakeTransport {
        base_url: String,
        routes: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.to_string(),
                routes: RefCell::new(HashMap::new()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
            self.push(method, path, Ok(HttpResponse::new(status, body.to_string())));
        }

        pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
            self.push(method, path, Ok(HttpResponse::new(status, body)));
        }

        pub fn fail(&self, method: Method, path: &str, error: TransportError) {
            self.push(method, path, Err(error));
        }

        fn push(&self, method: Method, path: &str, reply: Reply) {
            self.routes
                .borrow_mut()
                .entry((method, path.to_string()))
                .or_default()
                .push_back(reply);
        }

        /// `METHOD path` for every request sent so far
        pub fn calls(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|r| {
                    let path = r.url.strip_prefix(&self.base_url).unwrap_or(&r.url);
                    format!("{} {}", r.method, path)
                })
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let path = request
                .url
                .strip_prefix(&self.base_url)
                .unwrap_or(&request.url)
                .to_string();
            let key = (request.method, path);
            self.requests.borrow_mut().push(request);

            let mut routes = self.routes.borrow_mut();
            match routes.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
                Some(queue) if !queue.is_empty() => queue[0].clone(),
                _ => Ok(HttpResponse::new(404, r#"{"error": "Not found"}"#)),
            }
        }
    }
}
