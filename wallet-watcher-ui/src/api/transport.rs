//! gloo-net transport
//!
//! Browser `fetch` behind the core's [`HttpTransport`] seam. No timeout is
//! applied; a hung request keeps the loading overlay up.

use async_trait::async_trait;
use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use wallet_watcher::client::{HttpRequest, HttpResponse, HttpTransport, Method};
use wallet_watcher::error::TransportError;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn gloo_method(method: Method) -> GlooMethod {
    match method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Patch => GlooMethod::PATCH,
        Method::Delete => GlooMethod::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url).method(gloo_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(status, url = %request.url, "Response received");
        Ok(HttpResponse::new(status, body))
    }
}
