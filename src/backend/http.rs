use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::ChecklistError,
    types::{CheckUpdate, Groups, SwaggerLinks},
};

use super::ChecklistBackend;

/// Checker backend reached over HTTP.
///
/// No timeout is configured: a hung request never resolves and the caller
/// simply keeps waiting, the same as the browser page did.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for `base_url` (e.g. `http://localhost:8080/v1/api/link/checker`).
    pub fn new(base_url: &str) -> Result<Self, ChecklistError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ChecklistError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, ChecklistError> {
        let response = self.send(self.http.get(&endpoint), &endpoint).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ChecklistError::Decode {
                endpoint,
                reason: e.to_string(),
            })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<Response, ChecklistError> {
        debug!(endpoint, "calling checker backend");

        let response = request.send().await.map_err(|e| ChecklistError::Request {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChecklistError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

impl ChecklistBackend for HttpBackend {
    async fn fetch_groups(&self) -> Result<Groups, ChecklistError> {
        self.get_json(self.endpoint("")).await
    }

    async fn fetch_swagger_links(&self) -> Result<SwaggerLinks, ChecklistError> {
        self.get_json(self.endpoint("/swagger-links")).await
    }

    async fn update_check(&self, update: &CheckUpdate) -> Result<(), ChecklistError> {
        let endpoint = self.endpoint("/check");
        self.send(self.http.get(&endpoint).query(update), &endpoint)
            .await
            .map(|_| ())
    }
}
