//! In-process stand-in for the todo backend.
//!
//! Mirrors the real backend's observable behavior: `u64` ids handed out from
//! a monotonic sequence, list responses ordered by ascending id, `done`
//! forced to `false` on create, and a plain-text `/healthz`. Integration
//! tests in the client crate run against this over real HTTP.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

#[derive(Deserialize)]
pub struct NewTask {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Deserialize)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub done: Option<bool>,
}

/// Tasks in creation order, which is also ascending id order.
#[derive(Default)]
pub struct Store {
    next_id: u64,
    tasks: Vec<Task>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/healthz", get(health))
        .route("/todos", get(list_tasks).post(create_task))
        .route(
            "/todos/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> &'static str {
    "OK"
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<NewTask>,
) -> (StatusCode, Json<Task>) {
    let mut store = db.write().await;
    store.next_id += 1;
    // The real backend ignores the submitted `done` and stores false.
    let task = Task {
        id: store.next_id,
        text: input.text,
        done: false,
    };
    store.tasks.push(task.clone());
    info!(id = task.id, "task created");
    (StatusCode::CREATED, Json(task))
}

async fn get_task(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Task>, StatusCode> {
    let store = db.read().await;
    store
        .tasks
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TaskPatch>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let task = store
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(text) = input.text {
        task.text = text;
    }
    if let Some(done) = input.done {
        task.done = done;
    }
    Ok(Json(task.clone()))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.tasks.len();
    store.tasks.retain(|t| t.id != id);
    if store.tasks.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
