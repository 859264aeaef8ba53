use gloo_net::http::{Request, Response};
use leptos::logging::error;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    entry_api_path, entry_comments_api_path, ErrorDetails, LandingPageDiaryEntry, NewDiaryComment,
    WholeDiaryEntry,
};
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        if status == 404 {
            return RequestError::NotFound;
        }

        let message = serde_json::from_str::<ErrorDetails>(body)
            .map(|details| details.error_message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    "An unknown error occurred".to_string()
                } else {
                    status_text.to_string()
                }
            });

        RequestError::Server { status, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Client for the diary REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<Response, RequestError> {
        let url = self.url(path);

        let request = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| RequestError::Network(e.to_string()))?
                .send()
                .await
        } else {
            request.send().await
        }
        .map_err(|e| {
            error!("{:?} {} failed: {}", method, url, e);
            RequestError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = RequestError::from_status(response.status(), &response.status_text(), &body);
        error!("{:?} {} failed: {}", method, url, err);
        Err(err)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, RequestError> {
        self.send(method, path, body)
            .await?
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    // Entry endpoints
    pub async fn list_entries(&self) -> Result<Vec<LandingPageDiaryEntry>, RequestError> {
        self.request(Method::Get, "/entries/all", None::<()>).await
    }

    pub async fn get_entry(&self, id: i32) -> Result<WholeDiaryEntry, RequestError> {
        self.request(Method::Get, &entry_api_path(id), None::<()>).await
    }

    // Comment endpoints

    /// Post a comment. The response body is not used.
    pub async fn submit_new_comment(
        &self,
        entry_id: i32,
        comment: NewDiaryComment,
    ) -> Result<(), RequestError> {
        self.send(Method::Post, &entry_comments_api_path(entry_id), Some(comment))
            .await
            .map(|_| ())
    }
}
