//! HTTP front end: axum router, handlers, HTML pages, and the single shared
//! game every request plays against.

mod pages;
mod redirect;
mod routes;
mod view;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::game::GameSession;
use crate::leaderboard::LeaderboardStore;

pub use view::{ColumnView, EndPageView, GamePageView};

/// Configuration for the HTTP server.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Served under `/static/`.
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "127.0.0.1:8000".to_string(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

/// The game currently being played, plus the id it was saved under once it
/// has been written to the leaderboard.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    pub session: GameSession,
    pub record_id: Option<u32>,
}

/// Shared handler state. There is exactly one game per process; every handler
/// that touches it does its whole read-modify-write under one lock.
#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<Option<ActiveGame>>>,
    store: Arc<LeaderboardStore>,
}

impl AppState {
    pub fn new(store: LeaderboardStore) -> Self {
        AppState {
            game: Arc::new(Mutex::new(None)),
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &LeaderboardStore {
        &self.store
    }

    /// Copy of the game in flight, if any.
    pub fn active_game(&self) -> Option<ActiveGame> {
        self.lock_game().clone()
    }

    /// The session holds plain data that is consistent between calls, so a
    /// poisoned lock is still safe to use.
    fn lock_game(&self) -> MutexGuard<'_, Option<ActiveGame>> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/game/init", get(routes::init_page))
        .route(
            "/game/init/traitement",
            post(routes::init_submit).fallback(routes::method_not_allowed),
        )
        .route("/game/play", get(routes::play_page))
        .route(
            "/game/play/move",
            post(routes::play_move).fallback(routes::method_not_allowed),
        )
        .route("/game/end", get(routes::game_end))
        .route("/game/leaderboard", get(routes::leaderboard))
        .route("/game/grid/{id}", get(routes::game_grid))
        .route("/error", get(routes::error_page))
        .nest_service("/static", ServeDir::new(assets_dir.as_ref()))
        .fallback(routes::home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
