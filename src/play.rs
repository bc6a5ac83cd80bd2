use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

use crate::input::{normalize_target, normalize_wager, parse_cards, parse_colors};
use crate::leaderboard::export_snapshot;
use crate::model::{Expedition, RoundInput};
use crate::output::{
    format_breakdown, format_leaderboard, format_placement, format_validation_error,
};
use crate::prompt::{is_input_closed, prompt, prompt_with_default, prompt_yes_no};
use crate::session::Session;

/// What to do after a round has been shown
#[derive(Debug, Clone, PartialEq, Eq)]
enum NextStep {
    NextRound,
    Clear,
    Export(Option<PathBuf>),
    Quit,
}

fn parse_next_step(input: &str) -> Option<NextStep> {
    let input = input.trim();
    let (cmd, arg) = match input.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (input, ""),
    };
    match cmd.to_lowercase().as_str() {
        "" | "n" | "next" => Some(NextStep::NextRound),
        "c" | "clear" => Some(NextStep::Clear),
        "e" | "export" => Some(NextStep::Export(
            (!arg.is_empty()).then(|| PathBuf::from(arg)),
        )),
        "q" | "quit" | "exit" => Some(NextStep::Quit),
        _ => None,
    }
}

/// Ask for one round's selections. Malformed cards or colors re-prompt the
/// field; counts are normalized leniently.
fn read_round(session: &Session) -> Result<(String, RoundInput)> {
    let player = prompt_with_default("Player name", session.suggested_player())?;

    let colors = loop {
        let raw = prompt("Expeditions (red yellow green blue purple): ")?;
        match parse_colors(&raw) {
            Ok(colors) => break colors,
            Err(e) => println!("  {}. Try again.", e),
        }
    };

    let mut round = RoundInput::new();
    for color in colors {
        let cards = loop {
            let raw = prompt(&format!("  {} cards (2-10, e.g. '3 5 10'): ", color.label()))?;
            match parse_cards(&raw) {
                Ok(cards) => break cards,
                Err(e) => println!("  {}. Try again.", e),
            }
        };
        let wagers = normalize_wager(&prompt(&format!(
            "  {} wager cards (0-{}): ",
            color.label(),
            session.rules().max_wagers
        ))?);
        round.insert(Expedition::new(color).with_cards(cards).with_wagers(wagers));
    }

    let target_cards = normalize_target(&prompt("Target score cards: ")?);
    Ok((player, round.with_target_cards(target_cards)))
}

fn play_round(session: &mut Session, use_colors: bool, verbose: bool) -> Result<()> {
    let (player, round) = read_round(session)?;
    println!();

    match session.score_round(&player, &round, Utc::now()) {
        Ok(outcome) => {
            println!(
                "{}",
                format_breakdown(&outcome.breakdown, session.rules(), use_colors)
            );
            println!();
            println!(
                "{}",
                format_placement(
                    &outcome.player,
                    outcome.rank,
                    session.leaderboard().capacity()
                )
            );
            if verbose {
                eprintln!(
                    "Leaderboard holds {}/{} entries",
                    session.leaderboard().len(),
                    session.leaderboard().capacity()
                );
            }
        }
        Err(e) => {
            println!("{}", format_validation_error(&e, use_colors));
            if verbose {
                eprintln!("Round rejected; leaderboard unchanged");
            }
        }
    }

    println!();
    println!("Leaderboard");
    println!(
        "{}",
        format_leaderboard(session.leaderboard().snapshot(), use_colors)
    );
    Ok(())
}

fn export(session: &Session, path: Option<PathBuf>, verbose: bool) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => PathBuf::from(prompt_with_default("Export to", "leaderboard.json")?),
    };
    export_snapshot(&path, session.leaderboard())
        .with_context(|| format!("Export to {} failed", path.display()))?;
    println!("Leaderboard exported to {}", path.display());
    if verbose {
        eprintln!("Wrote {} entries", session.leaderboard().len());
    }
    Ok(())
}

fn session_loop(session: &mut Session, use_colors: bool, verbose: bool) -> Result<()> {
    loop {
        play_round(session, use_colors, verbose)?;

        loop {
            println!();
            let raw = prompt("[Enter] next round, (c)lear, (e)xport [path], (q)uit: ")?;
            match parse_next_step(&raw) {
                Some(NextStep::NextRound) => break,
                Some(NextStep::Clear) => {
                    if prompt_yes_no("Are you sure you want to clear all score history?", false)? {
                        session.clear_leaderboard();
                        println!("Leaderboard cleared.");
                    }
                }
                Some(NextStep::Export(path)) => {
                    if let Err(e) = export(session, path, verbose) {
                        if is_input_closed(&e) {
                            return Err(e);
                        }
                        eprintln!("{:#}", e);
                    }
                }
                Some(NextStep::Quit) => return Ok(()),
                None => println!("  Unknown command '{}'.", raw),
            }
        }
        println!();
    }
}

/// Run an interactive scoring session until the user quits or stdin closes.
pub fn run_session(session: &mut Session, use_colors: bool, verbose: bool) -> Result<()> {
    println!("Lost Cities score calculator. Enter a round to score it.");
    println!();

    match session_loop(session, use_colors, verbose) {
        Err(e) if is_input_closed(&e) => {
            println!();
            Ok(())
        }
        other => other,
    }
}
