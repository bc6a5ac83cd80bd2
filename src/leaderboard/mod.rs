pub mod board;
pub mod storage;

pub use board::{Leaderboard, LeaderboardEntry, DEFAULT_CAPACITY};
pub use storage::{export_snapshot, read_snapshot, LeaderboardSnapshot};
