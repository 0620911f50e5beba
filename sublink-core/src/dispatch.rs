use std::future::Future;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One HTTP call: a path relative to the API root, a method, query
/// parameters and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub params: Vec<(String, String)>,
    pub data: Option<Value>,
}

impl RequestDescriptor {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            params: Vec::new(),
            data: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.data = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Sends a [`RequestDescriptor`] and yields the decoded response body.
///
/// Implementations perform exactly one request per call. Clients are generic
/// over this trait so they can run against a stand-in during tests.
pub trait Dispatcher {
    fn dispatch(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}

/// [`Dispatcher`] backed by a `reqwest` client and a base URL.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: Client,
    base_url: Url,
}

impl HttpDispatcher {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("base url {base_url} cannot carry a path")));
        }
        // Url::join drops the last segment unless the base ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Self::new(client, &config.base_url)
    }

    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl Dispatcher for HttpDispatcher {
    fn dispatch(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send {
        let client = self.client.clone();
        let target = self.resolve(&request.url);
        async move {
            let target = target?;
            debug!(method = request.method.as_str(), url = %target, "dispatching request");

            let mut builder = client.request(request.method.into(), target.clone());
            if !request.params.is_empty() {
                builder = builder.query(&request.params);
            }
            if let Some(body) = &request.data {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;

            if !status.is_success() {
                let body = String::from_utf8_lossy(&bytes).into_owned();
                warn!(url = %target, status = status.as_u16(), "request rejected");
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}
