//! # Connect Four server
//!
//! Two-player Connect Four played in the browser. One game is in flight per
//! process; finished games are appended to a JSON leaderboard file.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, tokens and players, session state machine
//! - [`leaderboard`]: Finished-game records and their flat-file store
//! - [`web`]: axum router, handlers, HTML pages
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod web;
