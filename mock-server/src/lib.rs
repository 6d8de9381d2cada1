//! In-memory replica of the jsonplaceholder API for tests and local runs.
//!
//! The dataset is generated deterministically from a [`Shape`], with ids
//! assigned the same way the upstream assigns them (user 1 owns posts
//! 1..=10, post 1 owns comments 1..=5, ...). Paths listed in [`Faults`]
//! answer 500 so partial failures can be exercised over real HTTP.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, warn};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// How many records of each kind to generate.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub users: u64,
    pub posts_per_user: u64,
    pub comments_per_post: u64,
    pub albums_per_user: u64,
    pub photos_per_album: u64,
    pub todos_per_user: u64,
}

impl Default for Shape {
    /// Upstream proportions, with fewer photos per album.
    fn default() -> Self {
        Self {
            users: 10,
            posts_per_user: 10,
            comments_per_post: 5,
            albums_per_user: 10,
            photos_per_album: 5,
            todos_per_user: 20,
        }
    }
}

const PEOPLE: [(&str, &str); 10] = [
    ("Leanne Graham", "Bret"),
    ("Ervin Howell", "Antonette"),
    ("Clementine Bauch", "Samantha"),
    ("Patricia Lebsack", "Karianne"),
    ("Chelsey Dietrich", "Kamren"),
    ("Mrs. Dennis Schulist", "Leopoldo_Corkery"),
    ("Kurtis Weissnat", "Elwyn.Skiles"),
    ("Nicholas Runolfsdottir V", "Maxime_Nienow"),
    ("Glenna Reichert", "Delphine"),
    ("Clementina DuBuque", "Moriah.Stanton"),
];

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    pub todos: Vec<Todo>,
    pub users: Vec<User>,
}

impl Dataset {
    pub fn generate(shape: Shape) -> Self {
        let mut data = Dataset::default();
        for user_id in 1..=shape.users {
            data.users.push(user(user_id));

            for k in 1..=shape.posts_per_user {
                let post_id = (user_id - 1) * shape.posts_per_user + k;
                let title = if post_id == 1 {
                    "sunt aut facere repellat provident occaecati excepturi optio reprehenderit".to_string()
                } else {
                    format!("post {post_id}")
                };
                data.posts.push(Post {
                    user_id,
                    id: post_id,
                    title,
                    body: format!("body of post {post_id}"),
                });

                for c in 1..=shape.comments_per_post {
                    let id = (post_id - 1) * shape.comments_per_post + c;
                    data.comments.push(Comment {
                        post_id,
                        id,
                        name: format!("comment {id}"),
                        email: format!("commenter{id}@example.com"),
                        body: format!("body of comment {id}"),
                    });
                }
            }

            for k in 1..=shape.albums_per_user {
                let album_id = (user_id - 1) * shape.albums_per_user + k;
                data.albums.push(Album {
                    user_id,
                    id: album_id,
                    title: format!("album {album_id}"),
                });

                for p in 1..=shape.photos_per_album {
                    let id = (album_id - 1) * shape.photos_per_album + p;
                    data.photos.push(Photo {
                        album_id,
                        id,
                        title: format!("photo {id}"),
                        url: format!("https://via.placeholder.com/600/{id:06x}"),
                        thumbnail_url: format!("https://via.placeholder.com/150/{id:06x}"),
                    });
                }
            }

            for k in 1..=shape.todos_per_user {
                let id = (user_id - 1) * shape.todos_per_user + k;
                let title = if id == 1 {
                    "delectus aut autem".to_string()
                } else {
                    format!("todo {id}")
                };
                data.todos.push(Todo {
                    user_id,
                    id,
                    title,
                    completed: id % 3 == 0,
                });
            }
        }
        data
    }
}

fn user(id: u64) -> User {
    let (name, username) = PEOPLE[((id - 1) % PEOPLE.len() as u64) as usize];
    let (name, username) = if id as usize > PEOPLE.len() {
        (format!("{name} {id}"), format!("{username}{id}"))
    } else {
        (name.to_string(), username.to_string())
    };
    User {
        id,
        email: format!("{}@example.com", username.to_lowercase()),
        name,
        username,
        address: Address {
            street: format!("{id} Kulas Light"),
            suite: format!("Apt. {}", 500 + id),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

/// Request paths (e.g. `/posts/3/comments`) that answer 500.
pub type Faults = HashSet<String>;

#[derive(Clone)]
struct AppState {
    data: Arc<Dataset>,
    faults: Arc<Faults>,
}

/// Router over the default dataset with no faults.
pub fn app() -> Router {
    app_with(Dataset::generate(Shape::default()), Faults::new())
}

pub fn app_with(data: Dataset, faults: Faults) -> Router {
    let state = AppState {
        data: Arc::new(data),
        faults: Arc::new(faults),
    };
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(post_comments))
        .route("/comments", get(list_comments))
        .route("/comments/{id}", get(get_comment))
        .route("/albums", get(list_albums))
        .route("/albums/{id}", get(get_album))
        .route("/albums/{id}/photos", get(album_photos))
        .route("/photos", get(list_photos))
        .route("/photos/{id}", get(get_photo))
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/posts", get(user_posts))
        .route("/users/{id}/albums", get(user_albums))
        .route("/users/{id}/todos", get(user_todos))
        .layer(middleware::from_fn_with_state(state.clone(), inject_faults))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn inject_faults(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if state.faults.contains(path) {
        warn!(%path, "injecting failure");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    debug!(%path, "serving");
    next.run(request).await
}

fn find<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool) -> Result<Json<T>, StatusCode> {
    items
        .iter()
        .find(|item| matches(*item))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn filter<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool) -> Json<Vec<T>> {
    Json(items.iter().filter(|item| matches(*item)).cloned().collect())
}

async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.data.posts.clone())
}

async fn get_post(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    find(&state.data.posts, |p| p.id == id)
}

async fn post_comments(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Vec<Comment>> {
    filter(&state.data.comments, |c| c.post_id == id)
}

async fn list_comments(State(state): State<AppState>) -> Json<Vec<Comment>> {
    Json(state.data.comments.clone())
}

async fn get_comment(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Comment>, StatusCode> {
    find(&state.data.comments, |c| c.id == id)
}

async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.data.albums.clone())
}

async fn get_album(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Album>, StatusCode> {
    find(&state.data.albums, |a| a.id == id)
}

async fn album_photos(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Vec<Photo>> {
    filter(&state.data.photos, |p| p.album_id == id)
}

async fn list_photos(State(state): State<AppState>) -> Json<Vec<Photo>> {
    Json(state.data.photos.clone())
}

async fn get_photo(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Photo>, StatusCode> {
    find(&state.data.photos, |p| p.id == id)
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.data.todos.clone())
}

async fn get_todo(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    find(&state.data.todos, |t| t.id == id)
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.data.users.clone())
}

async fn get_user(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    find(&state.data.users, |u| u.id == id)
}

async fn user_posts(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Vec<Post>> {
    filter(&state.data.posts, |p| p.user_id == id)
}

async fn user_albums(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Vec<Album>> {
    filter(&state.data.albums, |a| a.user_id == id)
}

async fn user_todos(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Vec<Todo>> {
    filter(&state.data.todos, |t| t.user_id == id)
}
