use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::require_id;
use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::hydrate::{best_effort, hydrate_each};
use crate::resource::Resource;
use crate::types::Album;

/// `/albums`, `/albums/{id}` and `/users/{id}/albums`, each hydrated with
/// the album's photos.
#[derive(Debug, Clone)]
pub struct AlbumService {
    fetcher: Arc<ResourceFetcher>,
}

impl AlbumService {
    pub(crate) fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Album>> {
        let albums = self.fetcher.fetch_collection(cancel, Resource::Albums).await?;
        Ok(self.hydrate(cancel, albums).await)
    }

    pub async fn get(&self, cancel: &CancellationToken, album_id: u64) -> Result<Album> {
        let id = require_id(album_id, "album id")?;
        let album = self.fetcher.fetch_by_id(cancel, Resource::Albums, id).await?;
        Ok(attach_photos(Arc::clone(&self.fetcher), cancel.clone(), album).await)
    }

    /// Albums owned by `user_id`.
    pub async fn search_by_user_id(&self, cancel: &CancellationToken, user_id: u64) -> Result<Vec<Album>> {
        let id = require_id(user_id, "user id")?;
        let albums = self
            .fetcher
            .fetch_sub_collection(cancel, Resource::Users, id, Resource::Albums)
            .await?;
        Ok(self.hydrate(cancel, albums).await)
    }

    async fn hydrate(&self, cancel: &CancellationToken, albums: Vec<Album>) -> Vec<Album> {
        hydrate_each(albums, |album| {
            attach_photos(Arc::clone(&self.fetcher), cancel.clone(), album)
        })
        .await
    }
}

async fn attach_photos(fetcher: Arc<ResourceFetcher>, cancel: CancellationToken, mut album: Album) -> Album {
    let photos = fetcher
        .fetch_sub_collection(&cancel, Resource::Albums, album.id, Resource::Photos)
        .await;
    album.photos = best_effort(photos, Resource::Albums, album.id, Resource::Photos);
    album
}
