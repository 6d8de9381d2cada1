use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::require_id;
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::resource::Resource;
use crate::types::Photo;

/// `/photos` and `/photos/{id}`.
#[derive(Debug, Clone)]
pub struct PhotoService {
    fetcher: Arc<ResourceFetcher>,
}

impl PhotoService {
    pub(crate) fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Photo>> {
        self.fetcher.fetch_collection(cancel, Resource::Photos).await
    }

    pub async fn get(&self, cancel: &CancellationToken, photo_id: u64) -> Result<Photo> {
        let id = require_id(photo_id, "photo id")?;
        self.fetcher.fetch_by_id(cancel, Resource::Photos, id).await
    }
}
