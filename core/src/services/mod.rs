//! Per-resource services.
//!
//! Every service is a cheap `Clone` handle over the client's shared
//! [`ResourceFetcher`](crate::fetcher::ResourceFetcher). Services hold no
//! state between calls: each operation is a fresh fetch (and, for posts,
//! albums and users, a fresh hydration).

mod album;
mod comment;
mod photo;
mod post;
mod todo;
mod user;

pub use album::AlbumService;
pub use comment::CommentService;
pub use photo::PhotoService;
pub use post::PostService;
pub use todo::TodoService;
pub use user::UserService;

use crate::error::{ApiError, Result};

/// Reject the guard value 0 before any request is made.
fn require_id(id: u64, name: &'static str) -> Result<u64> {
    if id == 0 {
        return Err(ApiError::InvalidArgument(name));
    }
    Ok(id)
}
