use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Local;
use serde::Deserialize;

use crate::game::{GameSession, Token};

use super::view::{EndPageView, GamePageView};
use super::{pages, redirect, ActiveGame, AppState};

const NOT_STARTED: &str = "The game has not been set up yet.";

#[derive(Debug, Deserialize)]
pub struct InitForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    name2: String,
    #[serde(default)]
    jetoncolor: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveForm {
    #[serde(default)]
    column: String,
}

#[derive(Debug, Deserialize)]
pub struct FlashQuery {
    msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorQuery {
    code: Option<String>,
    message: Option<String>,
}

pub async fn home() -> Html<String> {
    Html(pages::home())
}

pub async fn init_page() -> Html<String> {
    Html(pages::init_form())
}

/// Any method other than POST on a form target.
pub async fn method_not_allowed() -> Redirect {
    redirect::to_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
}

pub async fn init_submit(State(state): State<AppState>, Form(form): Form<InitForm>) -> Redirect {
    let name1 = form.name.trim();
    let name2 = form.name2.trim();
    if name1.is_empty() || name2.is_empty() {
        return redirect::to_error(StatusCode::BAD_REQUEST, "Both player names are required.");
    }

    let token = Token::parse_or_default(&form.jetoncolor);
    let session = GameSession::initialize(name1, name2, token);
    *state.lock_game() = Some(ActiveGame {
        session,
        record_id: None,
    });

    tracing::info!(player1 = name1, player2 = name2, token = token.as_str(), "new game");
    Redirect::to("/game/play")
}

pub async fn play_page(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Response {
    let game = state.lock_game();
    let Some(active) = game.as_ref() else {
        return redirect::to_error(StatusCode::BAD_REQUEST, NOT_STARTED).into_response();
    };

    let view = GamePageView::build(&active.session, query.msg.unwrap_or_default());
    Html(pages::game(&view)).into_response()
}

pub async fn play_move(State(state): State<AppState>, Form(form): Form<MoveForm>) -> Redirect {
    let Ok(column) = form.column.trim().parse::<isize>() else {
        return redirect::to_error(StatusCode::BAD_REQUEST, "Choose a valid column.");
    };

    let mut game = state.lock_game();
    let Some(active) = game.as_mut() else {
        return redirect::to_error(StatusCode::BAD_REQUEST, NOT_STARTED);
    };

    let player = active.session.current_player_index();
    match active.session.drop_token(column) {
        Ok(()) => {
            tracing::debug!(player, column, turn = active.session.turn_count(), "token dropped");
            if active.session.is_terminal() {
                tracing::info!(
                    outcome = ?active.session.outcome(),
                    turns = active.session.turn_count(),
                    "game finished"
                );
            }
            Redirect::to("/game/play")
        }
        Err(e) => {
            tracing::debug!(player, column, error = %e, "drop rejected");
            redirect::with_message("/game/play", &e.to_string())
        }
    }
}

/// Result page. The finished game is written to the leaderboard on the first
/// visit only.
pub async fn game_end(State(state): State<AppState>) -> Response {
    let mut game = state.lock_game();
    let Some(active) = game.as_mut() else {
        return redirect::to_error(StatusCode::BAD_REQUEST, NOT_STARTED).into_response();
    };
    if !active.session.is_terminal() {
        return redirect::to_error(StatusCode::BAD_REQUEST, "The game is not over yet.")
            .into_response();
    }

    // Blocking file I/O under the session lock: the leaderboard is a small
    // file and the lock is what serializes appends.
    if active.record_id.is_none() {
        match state.store().append(&active.session, Local::now().fixed_offset()) {
            Ok(record) => active.record_id = Some(record.id),
            Err(e) => tracing::error!(error = %e, "failed to save finished game"),
        }
    }

    let view = EndPageView::build(&active.session, active.record_id);
    Html(pages::game_end(&view)).into_response()
}

pub async fn leaderboard(State(state): State<AppState>) -> Html<String> {
    Html(pages::leaderboard(&state.store().newest_first()))
}

pub async fn game_grid(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.trim().parse::<u32>() else {
        return redirect::to_error(StatusCode::BAD_REQUEST, "Invalid game id.").into_response();
    };

    match state.store().find(id) {
        Some(record) => Html(pages::game_grid(&record)).into_response(),
        None => redirect::to_error(StatusCode::NOT_FOUND, "Game not found.").into_response(),
    }
}

pub async fn error_page(Query(query): Query<ErrorQuery>) -> Html<String> {
    Html(pages::error(
        query.code.as_deref().unwrap_or_default(),
        query.message.as_deref().unwrap_or_default(),
    ))
}
