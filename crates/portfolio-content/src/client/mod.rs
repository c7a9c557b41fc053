//! Content Client
//!
//! Thin HTTP layer over the portfolio REST backend.
//! One attempt per call: no retry, no backoff, no caching, no timeout.
//! Failures are logged here and handed back to the caller unchanged.

mod source;


use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ContentError, ContentResult};
use crate::models::{Certificate, Experience, Project, Service, Technology};

pub use source::ContentSource;

const JSON_CONTENT_TYPE: &str = "application/json";

// ========================
// Endpoints
// ========================

pub const SERVICES: &str = "/services";
pub const TECHNOLOGIES: &str = "/technologies";
pub const EXPERIENCES: &str = "/experiences";
pub const PROJECTS: &str = "/projects";
pub const CERTIFICATES: &str = "/certificates";
pub const CONTACT: &str = "/contact";
pub const HEALTH: &str = "/health";

/// Per-request overrides; the default is a bodiless GET
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    /// Extra headers. `Content-Type` is always forced to JSON.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with an already-encoded JSON body
    pub fn post(body: String) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Shared HTTP access to the portfolio backend
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    config: ClientConfig,
}

impl ContentClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request and return the parsed JSON body
    pub async fn fetch(&self, endpoint: &str, options: RequestOptions) -> ContentResult<Value> {
        self.fetch_json(endpoint, options).await
    }

    /// Issue a request and decode the JSON body into `T`
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ContentResult<T> {
        let result = self.send(endpoint, options).await;
        if let Err(err) = &result {
            log::error!("API request failed for {}: {}", endpoint, err);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ContentResult<T> {
        let url = self.config.endpoint_url(endpoint);
        log::debug!("{} {}", options.method, url);

        let mut request = self.http.request(options.method, url.as_str());
        for (name, value) in &options.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }
        request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ========================
    // Portfolio Data Endpoints
    // ========================

    pub async fn services(&self) -> ContentResult<Vec<Service>> {
        self.fetch_json(SERVICES, RequestOptions::get()).await
    }

    pub async fn technologies(&self) -> ContentResult<Vec<Technology>> {
        self.fetch_json(TECHNOLOGIES, RequestOptions::get()).await
    }

    pub async fn experiences(&self) -> ContentResult<Vec<Experience>> {
        self.fetch_json(EXPERIENCES, RequestOptions::get()).await
    }

    pub async fn projects(&self) -> ContentResult<Vec<Project>> {
        self.fetch_json(PROJECTS, RequestOptions::get()).await
    }

    pub async fn certificates(&self) -> ContentResult<Vec<Certificate>> {
        self.fetch_json(CERTIFICATES, RequestOptions::get()).await
    }

    // ========================
    // Contact & Health
    // ========================

    /// POST the form fields as JSON. Field rules belong to the backend.
    pub async fn submit_contact_form<F: Serialize + ?Sized>(&self, form: &F) -> ContentResult<Value> {
        let body = serde_json::to_string(form)?;
        self.fetch(CONTACT, RequestOptions::post(body)).await
    }

    pub async fn health(&self) -> ContentResult<Value> {
        self.fetch(HEALTH, RequestOptions::get()).await
    }
}
