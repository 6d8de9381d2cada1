//! Client facade and its builder.
//!
//! # Design
//! `Client` owns one [`ResourceFetcher`] behind an `Arc` and hands out
//! service handles that share it. Nothing is cached between calls. The only
//! configuration is where to send requests and how to send them: a base URL
//! and a [`Transport`]. When no transport is supplied a [`ReqwestTransport`]
//! with a 10 second timeout is built.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::http::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};
use crate::resource::API_URL;
use crate::services::{AlbumService, CommentService, PhotoService, PostService, TodoService, UserService};

/// Read-only client for the jsonplaceholder API.
///
/// ```no_run
/// use jsonplaceholder::{CancellationToken, Client};
///
/// # async fn run() -> jsonplaceholder::Result<()> {
/// let client = Client::new()?;
/// let user = client.users().get(&CancellationToken::new(), 1).await?;
/// println!("{} wrote {} posts", user.name, user.posts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    fetcher: Arc<ResourceFetcher>,
    posts: PostService,
    comments: CommentService,
    albums: AlbumService,
    photos: PhotoService,
    todos: TodoService,
    users: UserService,
}

impl Client {
    /// Client for the public upstream with the default transport.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn from_fetcher(fetcher: Arc<ResourceFetcher>) -> Self {
        let posts = PostService::new(Arc::clone(&fetcher));
        let albums = AlbumService::new(Arc::clone(&fetcher));
        let todos = TodoService::new(Arc::clone(&fetcher));
        Self {
            comments: CommentService::new(Arc::clone(&fetcher)),
            photos: PhotoService::new(Arc::clone(&fetcher)),
            users: UserService::new(Arc::clone(&fetcher), albums.clone(), todos.clone(), posts.clone()),
            posts,
            albums,
            todos,
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        self.fetcher.base_url()
    }

    pub fn posts(&self) -> &PostService {
        &self.posts
    }

    pub fn comments(&self) -> &CommentService {
        &self.comments
    }

    pub fn albums(&self) -> &AlbumService {
        &self.albums
    }

    pub fn photos(&self) -> &PhotoService {
        &self.photos
    }

    pub fn todos(&self) -> &TodoService {
        &self.todos
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }
}

/// Builder for [`Client`].
///
/// A custom transport takes precedence over `http_client`, which in turn
/// takes precedence over `timeout`.
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Upstream root. Trailing slashes are stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send requests through a caller-configured `reqwest::Client`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::with_client(client)),
            (None, None) => Arc::new(ReqwestTransport::new(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };
        let base_url = self.base_url.as_deref().unwrap_or(API_URL);
        Ok(Client::from_fetcher(Arc::new(ResourceFetcher::new(
            base_url, transport,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::http::{HttpResponse, MockTransport};

    #[test]
    fn default_client_targets_the_public_api() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = Client::builder()
            .base_url("http://localhost:3000/")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn custom_http_client_is_accepted() {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let client = Client::builder().http_client(http).build().unwrap();
        assert_eq!(client.base_url(), API_URL);
    }

    #[tokio::test]
    async fn custom_transport_is_used_by_every_service() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|_, req| req.url == "http://api.test/todos/1")
            .times(1)
            .returning(|_, _| {
                Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: br#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#
                        .to_vec(),
                })
            });

        let client = Client::builder()
            .base_url("http://api.test")
            .transport(Arc::new(transport))
            .build()
            .unwrap();
        let todo = client
            .todos()
            .get(&CancellationToken::new(), 1)
            .await
            .unwrap();
        assert_eq!(todo.title, "delectus aut autem");
    }
}
