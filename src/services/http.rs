// ============================================================================
// HTTP TRANSPORT - stateless request/response plumbing
// ============================================================================
// No business logic here: services build `HttpRequest`s and interpret
// `HttpResponse`s, the transport only moves bytes.
// ============================================================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TransportError;
use crate::models::ApiErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path relative to the backend base URL, e.g. `/api/reports`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl HttpRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: None,
            bearer: None,
        }
    }

    pub fn post_json<T: Serialize>(path: &str, body: &T) -> Result<Self, TransportError> {
        let body = serde_json::to_value(body)
            .map_err(|e| TransportError::Serialization(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body),
            bearer: None,
        })
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Non-empty `message` field of an error body, if any.
    pub fn error_message(&self) -> Option<String> {
        self.json::<ApiErrorBody>()
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::{HttpRequest, HttpResponse, HttpTransport, Method};
    use crate::config::CONFIG;
    use crate::error::TransportError;

    /// Browser `fetch` via gloo-net, against the configured backend.
    #[derive(Clone)]
    pub struct FetchTransport {
        base_url: String,
    }

    impl FetchTransport {
        pub fn new() -> Self {
            Self {
                base_url: CONFIG.backend_url().to_string(),
            }
        }
    }

    impl Default for FetchTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FetchTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let url = format!("{}{}", self.base_url, request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }

            let response = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| TransportError::Serialization(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            log::debug!("🌐 {:?} {} -> {}", request.method, request.path, status);
            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::{HttpRequest, HttpResponse, HttpTransport};
    use crate::error::TransportError;

    /// Replays scripted responses in order and records every request.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
        requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn respond_raw(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, error: TransportError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
        }
    }
}
