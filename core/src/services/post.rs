use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::require_id;
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::hydrate::{best_effort, hydrate_each};
use crate::resource::Resource;
use crate::types::Post;

/// `/posts`, `/posts/{id}` and `/users/{id}/posts`, each hydrated with the
/// post's comments.
///
/// A comment fetch that fails leaves that post's `comments` empty without
/// touching its siblings or failing the call.
#[derive(Debug, Clone)]
pub struct PostService {
    fetcher: Arc<ResourceFetcher>,
}

impl PostService {
    pub(crate) fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Post>> {
        let posts = self.fetcher.fetch_collection(cancel, Resource::Posts).await?;
        Ok(self.hydrate(cancel, posts).await)
    }

    pub async fn get(&self, cancel: &CancellationToken, post_id: u64) -> Result<Post> {
        let id = require_id(post_id, "post id")?;
        let post = self.fetcher.fetch_by_id(cancel, Resource::Posts, id).await?;
        Ok(attach_comments(Arc::clone(&self.fetcher), cancel.clone(), post).await)
    }

    /// Posts written by `user_id`.
    pub async fn search_by_user_id(&self, cancel: &CancellationToken, user_id: u64) -> Result<Vec<Post>> {
        let id = require_id(user_id, "user id")?;
        let posts = self
            .fetcher
            .fetch_sub_collection(cancel, Resource::Users, id, Resource::Posts)
            .await?;
        Ok(self.hydrate(cancel, posts).await)
    }

    async fn hydrate(&self, cancel: &CancellationToken, posts: Vec<Post>) -> Vec<Post> {
        hydrate_each(posts, |post| {
            attach_comments(Arc::clone(&self.fetcher), cancel.clone(), post)
        })
        .await
    }
}

async fn attach_comments(fetcher: Arc<ResourceFetcher>, cancel: CancellationToken, mut post: Post) -> Post {
    let comments = fetcher
        .fetch_sub_collection(&cancel, Resource::Posts, post.id, Resource::Comments)
        .await;
    post.comments = best_effort(comments, Resource::Posts, post.id, Resource::Comments);
    post
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::services::testing::{calls, comment, post, routed, Reply};

    #[tokio::test]
    async fn get_attaches_comments() {
        let (fetcher, _) = routed(vec![
            ("/posts/1", Reply::Json(post(1, 1))),
            (
                "/posts/1/comments",
                Reply::Json(json!([comment(1, 1), comment(1, 2)])),
            ),
        ]);
        let found = PostService::new(fetcher)
            .get(&CancellationToken::new(), 1)
            .await
            .unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.comments.len(), 2);
        assert!(found.comments.iter().all(|c| c.post_id == 1));
    }

    #[tokio::test]
    async fn list_hydrates_every_post_in_order() {
        let (fetcher, counter) = routed(vec![
            ("/posts", Reply::Json(json!([post(1, 1), post(1, 2), post(2, 3)]))),
            ("/posts/1/comments", Reply::Json(json!([comment(1, 1)]))),
            ("/posts/2/comments", Reply::Json(json!([comment(2, 2), comment(2, 3)]))),
            ("/posts/3/comments", Reply::Json(json!([comment(3, 4)]))),
        ]);
        let posts = PostService::new(fetcher)
            .list(&CancellationToken::new())
            .await
            .unwrap();

        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let counts: Vec<_> = posts.iter().map(|p| p.comments.len()).collect();
        assert_eq!(counts, vec![1, 2, 1]);
        for p in &posts {
            assert!(p.comments.iter().all(|c| c.post_id == p.id));
        }
        assert_eq!(calls(&counter), 4);
    }

    #[tokio::test]
    async fn one_failing_comment_fetch_only_empties_that_post() {
        let (fetcher, _) = routed(vec![
            ("/users/1/posts", Reply::Json(json!([post(1, 1), post(1, 2), post(1, 3)]))),
            ("/posts/1/comments", Reply::Json(json!([comment(1, 1)]))),
            ("/posts/2/comments", Reply::Fail),
            ("/posts/3/comments", Reply::Status(500)),
        ]);
        let posts = PostService::new(fetcher)
            .search_by_user_id(&CancellationToken::new(), 1)
            .await
            .unwrap();

        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].comments.len(), 1);
        assert!(posts[1].comments.is_empty());
        assert!(posts[2].comments.is_empty());
    }

    #[tokio::test]
    async fn undecodable_comments_degrade_to_empty() {
        let (fetcher, _) = routed(vec![
            ("/posts/1", Reply::Json(post(1, 1))),
            ("/posts/1/comments", Reply::Json(json!("garbage"))),
        ]);
        let found = PostService::new(fetcher)
            .get(&CancellationToken::new(), 1)
            .await
            .unwrap();
        assert!(found.comments.is_empty());
    }

    #[tokio::test]
    async fn primary_fetch_failure_is_reported() {
        let (fetcher, _) = routed(vec![("/posts", Reply::Status(500))]);
        let err = PostService::new(fetcher)
            .list(&CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let (fetcher, _) = routed(vec![]);
        let err = PostService::new(fetcher)
            .get(&CancellationToken::new(), 101)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn guard_values_never_reach_the_transport() {
        let (fetcher, counter) = routed(vec![]);
        let service = PostService::new(fetcher);
        let cancel = CancellationToken::new();

        let err = service.get(&cancel, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument("post id")));
        let err = service.search_by_user_id(&cancel, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument("user id")));
        assert_eq!(calls(&counter), 0);
    }

    #[tokio::test]
    async fn cancellation_mid_call_empties_comments_without_failing() {
        let (fetcher, _) = routed(vec![
            ("/posts", Reply::JsonThenCancel(json!([post(1, 1), post(1, 2)]))),
            ("/posts/1/comments", Reply::Json(json!([comment(1, 1)]))),
            ("/posts/2/comments", Reply::Json(json!([comment(2, 2)]))),
        ]);
        let posts = PostService::new(fetcher)
            .list(&CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.comments.is_empty()));
    }
}
