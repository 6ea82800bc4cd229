use crate::game::{Board, GameSession, Token, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView {
    pub index: usize,
    /// False once the column is full or the game is over.
    pub open: bool,
}

/// Everything the play page shows.
#[derive(Debug, Clone)]
pub struct GamePageView {
    pub grid: Board,
    pub player1: String,
    pub player2: String,
    pub first_token: Token,
    /// None once the game has ended.
    pub current_player: Option<(usize, String, Token)>,
    pub winner: String,
    pub draw: bool,
    pub message: String,
    pub columns: Vec<ColumnView>,
}

impl GamePageView {
    pub fn build(session: &GameSession, message: impl Into<String>) -> Self {
        let [first, second] = session.players();
        let open = session.open_columns();

        let current_player = (!session.is_terminal()).then(|| {
            let player = session.current_player();
            (
                session.current_player_index(),
                player.name.clone(),
                player.token,
            )
        });

        GamePageView {
            grid: *session.board(),
            player1: first.name.clone(),
            player2: second.name.clone(),
            first_token: first.token,
            current_player,
            winner: session.winner_name().to_string(),
            draw: session.is_draw(),
            message: message.into(),
            columns: (0..COLS)
                .map(|index| ColumnView {
                    index,
                    open: open.contains(&index),
                })
                .collect(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.current_player.is_none()
    }
}

/// Final board and result, shown once the game is over.
#[derive(Debug, Clone)]
pub struct EndPageView {
    pub grid: Board,
    pub player1: String,
    pub player2: String,
    pub first_token: Token,
    pub winner: String,
    pub draw: bool,
    /// Leaderboard id, when saving succeeded.
    pub record_id: Option<u32>,
}

impl EndPageView {
    pub fn build(session: &GameSession, record_id: Option<u32>) -> Self {
        let [first, second] = session.players();
        EndPageView {
            grid: *session.board(),
            player1: first.name.clone(),
            player2: second.name.clone(),
            first_token: first.token,
            winner: session.winner_name().to_string(),
            draw: session.is_draw(),
            record_id,
        }
    }
}
