//! HTTP transport over the browser `fetch()` API via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use momo_core::ports::{HttpMethod, HttpPort, HttpRequest, HttpResponse};
use momo_types::{ClientError, Result};

/// Stateless adapter: every call is a fresh `fetch()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        // A status without a readable body is still a status.
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Response body for {} unreadable: {}", req.url, e);
                String::new()
            }
        };

        Ok(HttpResponse { status, body })
    }
}
