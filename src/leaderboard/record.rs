use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::game::{Board, GameSession, Token};

/// Snapshot of a finished game, as written to the leaderboard file.
///
/// Field names on the wire are the ones existing leaderboard files use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Zero means the entry predates ids; the store renumbers those on load.
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "joueur1")]
    pub player1: String,
    #[serde(rename = "joueur2")]
    pub player2: String,
    /// Empty for a draw.
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub draw: bool,
    pub date: DateTime<FixedOffset>,
    #[serde(rename = "turnCount", default)]
    pub turn_count: usize,
    #[serde(rename = "grille", default)]
    pub board: Board,
    /// Token of the player who moved first.
    #[serde(rename = "jetonCouleur", default)]
    pub first_token: Token,
}

impl GameRecord {
    /// Capture a finished session. Sessions still in progress are refused.
    pub fn from_session(
        id: u32,
        session: &GameSession,
        date: DateTime<FixedOffset>,
    ) -> Result<Self, StoreError> {
        if !session.is_terminal() {
            return Err(StoreError::GameInProgress);
        }

        let [first, second] = session.players();
        Ok(GameRecord {
            id,
            player1: first.name.clone(),
            player2: second.name.clone(),
            winner: session.winner_name().to_string(),
            draw: session.is_draw(),
            date,
            turn_count: session.turn_count(),
            board: *session.board(),
            first_token: first.token,
        })
    }
}
