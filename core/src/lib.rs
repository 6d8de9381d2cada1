//! Read-only async client for the jsonplaceholder REST API.
//!
//! # Overview
//! Six resources (posts, comments, albums, photos, todos, users) are exposed
//! through one service each. Services for resources with relationships
//! return fully hydrated values: posts carry their comments, albums their
//! photos, and users their albums, todos and posts (recursively hydrated).
//!
//! # Design
//! - `ResourceFetcher` turns a resource path into an `HttpRequest`, runs it
//!   through a [`Transport`] and decodes the `HttpResponse`.
//! - Nested collections are fetched concurrently, one tokio task per parent,
//!   and every task is joined before a call returns.
//! - Failures of the primary fetch are returned as [`ApiError`]. Failures
//!   while hydrating a nested collection leave that collection empty.
//! - Every operation takes a [`CancellationToken`] which is threaded into
//!   each spawned task and each transport call.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod hydrate;
pub mod resource;
pub mod services;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Result, TransportError};
pub use fetcher::ResourceFetcher;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, DEFAULT_TIMEOUT};
pub use resource::{build_url, Resource, API_URL};
pub use services::{AlbumService, CommentService, PhotoService, PostService, TodoService, UserService};
pub use tokio_util::sync::CancellationToken;
pub use types::{Address, Album, Comment, Company, Geo, Photo, Post, Todo, User};
