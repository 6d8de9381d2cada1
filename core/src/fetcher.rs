//! Generic GET-and-decode over the transport boundary.
//!
//! # Design
//! Each fetch is split into a `build_*` method that produces an
//! `HttpRequest` and [`ResourceFetcher::parse`] which consumes the
//! `HttpResponse`. The async `fetch_*` methods glue the two together through
//! the configured [`Transport`]. Errors from any stage propagate unchanged;
//! deciding whether a failure matters is left to the services.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::resource::{build_url, Resource};

/// Shared by every service and every hydration task of a client.
pub struct ResourceFetcher {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ResourceFetcher {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /{resource}`
    pub fn build_collection(&self, resource: Resource) -> HttpRequest {
        HttpRequest::get(build_url(&self.base_url, &[&resource]))
    }

    /// `GET /{resource}/{id}`
    pub fn build_by_id(&self, resource: Resource, id: u64) -> HttpRequest {
        HttpRequest::get(build_url(&self.base_url, &[&resource, &id]))
    }

    /// `GET /{parent}/{parent_id}/{sub}`
    pub fn build_sub_collection(&self, parent: Resource, parent_id: u64, sub: Resource) -> HttpRequest {
        HttpRequest::get(build_url(&self.base_url, &[&parent, &parent_id, &sub]))
    }

    /// Check the status and decode the body into `T`.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T> {
        check_status(&response)?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        resource: Resource,
    ) -> Result<Vec<T>> {
        self.fetch(cancel, self.build_collection(resource)).await
    }

    /// The id is passed through as given; guard values are rejected by the
    /// services before they get here.
    pub async fn fetch_by_id<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        resource: Resource,
        id: u64,
    ) -> Result<T> {
        self.fetch(cancel, self.build_by_id(resource, id)).await
    }

    pub async fn fetch_sub_collection<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        parent: Resource,
        parent_id: u64,
        sub: Resource,
    ) -> Result<Vec<T>> {
        self.fetch(cancel, self.build_sub_collection(parent, parent_id, sub))
            .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        request: HttpRequest,
    ) -> Result<T> {
        debug!(url = %request.url, "fetching");
        let response = self.transport.execute(cancel, request).await?;
        self.parse(response)
    }
}

impl fmt::Debug for ResourceFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Map non-success status codes to [`TransportError::Status`].
fn check_status(response: &HttpResponse) -> std::result::Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    debug!(status = response.status, "upstream returned non-success status");
    Err(TransportError::Status {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
