use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::require_id;
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::resource::Resource;
use crate::types::Todo;

/// `/todos`, `/todos/{id}` and `/users/{id}/todos`.
#[derive(Debug, Clone)]
pub struct TodoService {
    fetcher: Arc<ResourceFetcher>,
}

impl TodoService {
    pub(crate) fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Todo>> {
        self.fetcher.fetch_collection(cancel, Resource::Todos).await
    }

    pub async fn get(&self, cancel: &CancellationToken, todo_id: u64) -> Result<Todo> {
        let id = require_id(todo_id, "todo id")?;
        self.fetcher.fetch_by_id(cancel, Resource::Todos, id).await
    }

    /// Todos owned by `user_id`.
    pub async fn search_by_user_id(&self, cancel: &CancellationToken, user_id: u64) -> Result<Vec<Todo>> {
        let id = require_id(user_id, "user id")?;
        self.fetcher
            .fetch_sub_collection(cancel, Resource::Users, id, Resource::Todos)
            .await
    }
}
