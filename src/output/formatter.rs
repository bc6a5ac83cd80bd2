use std::io::IsTerminal;

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::leaderboard::LeaderboardEntry;
use crate::scoring::{ExpeditionScore, ScoreBreakdown, ScoringRules, ValidationError};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Local wall-clock label for a submission ("14:05")
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Describe how one expedition's score came together, without the points.
fn describe_expedition(exp: &ExpeditionScore, rules: &ScoringRules) -> String {
    let mut text = if exp.card_count > 0 {
        let noun = if exp.card_count == 1 { "card" } else { "cards" };
        format!(
            "{} {} (sum {}) - {} penalty",
            exp.card_count, noun, exp.card_sum, rules.expedition_cost
        )
    } else {
        let noun = if exp.wager_count == 1 { "wager card" } else { "wager cards" };
        format!(
            "{} {}, no number cards (-{} each)",
            exp.wager_count, noun, rules.expedition_cost
        )
    };

    if exp.wager_count > 0 {
        text.push_str(&format!(" x {} (wager)", exp.multiplier));
    }
    if exp.bonus {
        text.push_str(&format!(" + {} bonus", rules.bonus_points));
    }
    text
}

fn format_points(points: i64, use_colors: bool) -> String {
    let text = format!("{:>5} pts", points);
    if !use_colors {
        text
    } else if points < 0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

/// Format a scored round: one line per expedition, then totals.
pub fn format_breakdown(
    breakdown: &ScoreBreakdown,
    rules: &ScoringRules,
    use_colors: bool,
) -> String {
    let mut rows: Vec<(String, String, i64)> = breakdown
        .expeditions
        .iter()
        .map(|exp| {
            (
                format!("{} expedition:", exp.color.label()),
                describe_expedition(exp, rules),
                exp.score,
            )
        })
        .collect();

    rows.push((
        "Expedition total:".to_string(),
        String::new(),
        breakdown.expedition_total,
    ));
    if breakdown.target_cards > 0 {
        rows.push((
            "Target cards:".to_string(),
            format!("{} x {} points", breakdown.target_cards, rules.target_card_points),
            breakdown.target_score,
        ));
    }

    let label_width = rows
        .iter()
        .map(|(label, detail, _)| label.chars().count() + 1 + detail.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, detail, points)| {
            let plain_len = label.chars().count() + 1 + detail.chars().count();
            let pad = " ".repeat(label_width - plain_len);
            let label = if use_colors {
                label.bold().to_string()
            } else {
                label.clone()
            };
            format!("{} {}{}  {}", label, detail, pad, format_points(*points, use_colors))
        })
        .collect();

    let total = format!("Final total: {} points", breakdown.final_total);
    if use_colors {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }

    lines.join("\n")
}

/// Format a validation failure for display
pub fn format_validation_error(err: &ValidationError, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Error:".red().bold(), err)
    } else {
        format!("Error: {}", err)
    }
}

/// Describe where a fresh score landed
pub fn format_placement(player: &str, rank: Option<usize>, capacity: usize) -> String {
    match rank {
        Some(rank) => format!("{} placed #{} on the leaderboard.", player, rank),
        None => format!("{} did not make the top {}.", player, capacity),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked entries as a table: rank, player, score, time.
/// Rank column: 3 chars (fits "10."), score column right-aligned, 6 chars.
pub fn format_leaderboard(entries: &[LeaderboardEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No scores yet.".to_string();
    }

    let score_width = 6;
    let time_width = 5;
    let separator = "  ";
    let fixed_width = 3 + separator.len() * 3 + score_width + time_width;

    let name_width = entries
        .iter()
        .map(|e| e.player.chars().count())
        .max()
        .unwrap_or(0);
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => name_width.min(width - fixed_width),
        Some(_) => name_width.min(20),
        None => name_width,
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let rank = idx + 1;
            let rank_str = format!("{:>2}.", rank);
            let name = truncate_name(&entry.player, name_width);
            let name_padded = format!("{:<width$}", name, width = name_width);
            let score_str = format!("{:>width$}", entry.score, width = score_width);
            let time = format_timestamp(entry.submitted_at);

            if use_colors {
                let rank_str = if rank <= 3 {
                    rank_str.yellow().bold().to_string()
                } else {
                    rank_str.dimmed().to_string()
                };
                format!(
                    "{}{}{}{}{}{}{}",
                    rank_str,
                    separator,
                    name_padded,
                    separator,
                    score_str.bold(),
                    separator,
                    time.dimmed()
                )
            } else {
                format!(
                    "{}{}{}{}{}{}{}",
                    rank_str, separator, name_padded, separator, score_str, separator, time
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format entries as tab-separated values for scripting
/// Columns: rank, player, score, submitted_at (RFC 3339). No headers, no colors.
pub fn format_tsv(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}\t{}\t{}\t{}",
                idx + 1,
                entry.player,
                entry.score,
                entry.submitted_at.to_rfc3339()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
