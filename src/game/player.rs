use serde::{Deserialize, Serialize};

use super::board::Cell;

/// The two token colours. The wire names are the ones the setup form and the
/// leaderboard file use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Token {
    #[default]
    #[serde(rename = "rouge")]
    Red,
    #[serde(rename = "jaune")]
    Yellow,
}

impl Token {
    /// Get the other token
    pub fn other(self) -> Token {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }

    /// Convert token to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Token::Red => Cell::Red,
            Token::Yellow => Cell::Yellow,
        }
    }

    /// Name used in forms, CSS classes and the leaderboard file
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Red => "rouge",
            Token::Yellow => "jaune",
        }
    }

    /// Parse a form value. Anything unrecognized falls back to the default.
    pub fn parse_or_default(value: &str) -> Token {
        match value {
            "rouge" => Token::Red,
            "jaune" => Token::Yellow,
            _ => Token::default(),
        }
    }
}

/// A seat at the table: display name plus assigned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }
}
