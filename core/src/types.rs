//! Domain DTOs for the jsonplaceholder API.
//!
//! # Design
//! Field names follow the upstream JSON (`userId`, `thumbnailUrl`,
//! `catchPhrase`). Nested collections (`comments`, `photos`, `albums`,
//! `todos`, `posts`) are not part of the upstream payloads; they default to
//! empty on decode and are filled in by the services during hydration. They
//! are plain `Vec`s, so a returned entity never has an unset collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// A user together with everything they own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates are kept as the strings the API sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catchphrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_without_comments_decodes_to_empty_sequence() {
        let post: Post = serde_json::from_str(
            r#"{"userId":1,"id":1,"title":"sunt aut facere","body":"quia et suscipit"}"#,
        )
        .unwrap();
        assert_eq!(post.user_id, 1);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn photo_uses_upstream_field_names() {
        let photo: Photo = serde_json::from_str(
            r#"{"albumId":1,"id":2,"title":"t","url":"https://via.placeholder.com/600/771796","thumbnailUrl":"https://via.placeholder.com/150/771796"}"#,
        )
        .unwrap();
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/771796");
    }

    #[test]
    fn user_decodes_nested_value_objects() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": {
                    "street": "Kulas Light",
                    "suite": "Apt. 556",
                    "city": "Gwenborough",
                    "zipcode": "92998-3874",
                    "geo": { "lat": "-37.3159", "lng": "81.1496" }
                },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": {
                    "name": "Romaguera-Crona",
                    "catchPhrase": "Multi-layered client-server neural-net",
                    "bs": "harness real-time e-markets"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catchphrase, "Multi-layered client-server neural-net");
        assert!(user.albums.is_empty());
        assert!(user.todos.is_empty());
        assert!(user.posts.is_empty());
    }

    #[test]
    fn todo_rejects_missing_fields() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":1,"title":"x"}"#);
        assert!(result.is_err());
    }
}
