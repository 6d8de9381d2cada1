use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;

use super::require_id;
use super::{AlbumService, PostService, TodoService};
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::hydrate::{best_effort, hydrate_each, joined};
use crate::resource::Resource;
use crate::types::User;

/// `/users` and `/users/{id}`, hydrated with everything the user owns.
///
/// # Design
/// Hydration is two-level. Each user gets its own task, and that task spawns
/// three more (albums, todos, posts) which run in parallel and are all
/// joined before the user is returned. Dropping the call aborts every task
/// it spawned. Albums and posts go through their own services, so their
/// photos and comments are hydrated too: a returned user is the full object
/// graph. Each of the three collections degrades to empty
/// on its own failure.
#[derive(Debug, Clone)]
pub struct UserService {
    fetcher: Arc<ResourceFetcher>,
    albums: AlbumService,
    todos: TodoService,
    posts: PostService,
}

impl UserService {
    pub(crate) fn new(
        fetcher: Arc<ResourceFetcher>,
        albums: AlbumService,
        todos: TodoService,
        posts: PostService,
    ) -> Self {
        Self {
            fetcher,
            albums,
            todos,
            posts,
        }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<User>> {
        let users = self.fetcher.fetch_collection(cancel, Resource::Users).await?;
        Ok(hydrate_each(users, |user| self.clone().attach_owned(cancel.clone(), user)).await)
    }

    pub async fn get(&self, cancel: &CancellationToken, user_id: u64) -> Result<User> {
        let id = require_id(user_id, "user id")?;
        let user = self.fetcher.fetch_by_id(cancel, Resource::Users, id).await?;
        Ok(self.clone().attach_owned(cancel.clone(), user).await)
    }

    async fn attach_owned(self, cancel: CancellationToken, mut user: User) -> User {
        let id = user.id;

        let albums = AbortOnDropHandle::new(tokio::spawn({
            let (service, cancel) = (self.albums, cancel.clone());
            async move { service.search_by_user_id(&cancel, id).await }
        }));
        let todos = AbortOnDropHandle::new(tokio::spawn({
            let (service, cancel) = (self.todos, cancel.clone());
            async move { service.search_by_user_id(&cancel, id).await }
        }));
        let posts = AbortOnDropHandle::new(tokio::spawn({
            let (service, cancel) = (self.posts, cancel);
            async move { service.search_by_user_id(&cancel, id).await }
        }));

        let (albums, todos, posts) = tokio::join!(albums, todos, posts);
        user.albums = joined(albums)
            .map(|r| best_effort(r, Resource::Users, id, Resource::Albums))
            .unwrap_or_default();
        user.todos = joined(todos)
            .map(|r| best_effort(r, Resource::Users, id, Resource::Todos))
            .unwrap_or_default();
        user.posts = joined(posts)
            .map(|r| best_effort(r, Resource::Users, id, Resource::Posts))
            .unwrap_or_default();
        user
    }
}
