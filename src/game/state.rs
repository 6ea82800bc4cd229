use serde::{Deserialize, Serialize};

use super::board::{Board, COLS};
use super::player::{Player, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    /// Index of the winning player.
    Won(usize),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Rejected drops. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("The game is over.")]
    GameOver,

    #[error("That column does not exist.")]
    InvalidColumn,

    #[error("This column is full.")]
    ColumnFull,
}

/// The one game in flight: board, seats, turn and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current_player_index: usize,
    turn_count: usize,
    outcome: GameOutcome,
}

impl GameSession {
    /// Start a fresh game. Player 0 gets `first_token` and moves first;
    /// player 1 gets the other token.
    pub fn initialize(name1: impl Into<String>, name2: impl Into<String>, first_token: Token) -> Self {
        GameSession {
            board: Board::new(),
            players: [
                Player::new(name1, first_token),
                Player::new(name2, first_token.other()),
            ],
            current_player_index: 0,
            turn_count: 0,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Whose turn it is. Meaningless once the game is over.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == GameOutcome::Draw
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            GameOutcome::Won(index) => Some(&self.players[index]),
            _ => None,
        }
    }

    /// Winner's name, empty when there is none yet or the game was drawn.
    pub fn winner_name(&self) -> &str {
        self.winner().map_or("", |player| player.name.as_str())
    }

    /// Columns that still accept a token. Empty once the game is over.
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `column` and settle the outcome.
    ///
    /// Checks run in a fixed order: game over, then column range, then
    /// column capacity.
    pub fn drop_token(&mut self, column: isize) -> Result<(), DropError> {
        if self.is_terminal() {
            return Err(DropError::GameOver);
        }

        let column = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(DropError::InvalidColumn)?;

        let token = self.current_player().token;
        let row = self.board.drop_piece(column, token.to_cell())?;
        self.turn_count += 1;

        if self.board.check_win(row, column) {
            self.outcome = GameOutcome::Won(self.current_player_index);
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        } else {
            self.current_player_index = 1 - self.current_player_index;
        }

        Ok(())
    }
}
