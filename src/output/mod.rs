pub mod formatter;

pub use formatter::{
    format_breakdown, format_leaderboard, format_placement, format_timestamp, format_tsv,
    format_validation_error, should_use_colors,
};
