//! Finished-game history: the [`GameRecord`] snapshot and the flat JSON file
//! that stores them.

mod record;
mod store;

pub use record::GameRecord;
pub use store::{LeaderboardConfig, LeaderboardStore};
