//! Score rounds of the Lost Cities expedition card game and rank them on a
//! per-session leaderboard.

pub mod config;
pub mod input;
pub mod leaderboard;
pub mod model;
pub mod output;
pub mod play;
pub mod prompt;
pub mod scoring;
pub mod session;
