use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::require_id;
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::resource::Resource;
use crate::types::Comment;

/// `/comments` and `/comments/{id}`. Comments are leaves; nothing is hydrated.
#[derive(Debug, Clone)]
pub struct CommentService {
    fetcher: Arc<ResourceFetcher>,
}

impl CommentService {
    pub(crate) fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Comment>> {
        self.fetcher
            .fetch_collection(cancel, Resource::Comments)
            .await
    }

    pub async fn get(&self, cancel: &CancellationToken, comment_id: u64) -> Result<Comment> {
        let id = require_id(comment_id, "comment id")?;
        self.fetcher
            .fetch_by_id(cancel, Resource::Comments, id)
            .await
    }
}
