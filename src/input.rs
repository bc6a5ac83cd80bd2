//! Turns raw user text into typed round input.
//!
//! Numeric counts are lenient: blank or non-numeric text counts as zero and
//! trailing garbage after the leading digits is ignored. Card lists and
//! colors are strict, since they can only name things that exist.

use anyhow::{bail, Context, Result};

use crate::model::{CardSet, Color, Expedition, RoundInput};

/// Parse a count the lenient way: optional sign, then leading digits.
///
/// `""` -> 0, `"abc"` -> 0, `"3abc"` -> 3, `" -2"` -> -2. Saturates on overflow.
pub fn parse_count(raw: &str) -> i64 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Wager count as entered. Out-of-range values are kept for validation to
/// report.
pub fn normalize_wager(raw: &str) -> i32 {
    parse_count(raw).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Target card count. Negative input counts as zero.
pub fn normalize_target(raw: &str) -> u32 {
    parse_count(raw).clamp(0, i64::from(u32::MAX)) as u32
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Parse card values separated by commas or whitespace ("3 5 10", "3,5,10").
pub fn parse_cards(raw: &str) -> Result<CardSet> {
    let mut cards = CardSet::new();
    for token in tokens(raw) {
        let value: u8 = token
            .parse()
            .with_context(|| format!("Invalid card value '{}'", token))?;
        cards.insert(value)?;
    }
    Ok(cards)
}

/// Parse a color list, dropping repeats and keeping first-seen order.
pub fn parse_colors(raw: &str) -> Result<Vec<Color>> {
    let mut colors = Vec::new();
    for token in tokens(raw) {
        let color: Color = token.parse()?;
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    Ok(colors)
}

/// Parse the command-line expedition form `color[:cards[:wagers]]`.
///
/// Examples: `red:3,4,5:2`, `blue::1` (wagers only), `green` (selected, empty).
pub fn parse_expedition(raw: &str) -> Result<Expedition> {
    let mut parts = raw.splitn(3, ':');
    let color: Color = parts.next().unwrap_or_default().parse()?;
    let cards = match parts.next() {
        Some(cards) => parse_cards(cards)
            .with_context(|| format!("Invalid cards for {} expedition", color))?,
        None => CardSet::new(),
    };
    let wagers = parts.next().map(normalize_wager).unwrap_or(0);

    Ok(Expedition::new(color).with_cards(cards).with_wagers(wagers))
}

/// Assemble a round. Each color may appear only once.
pub fn build_round(expeditions: Vec<Expedition>, target_cards: u32) -> Result<RoundInput> {
    let mut round = RoundInput::new().with_target_cards(target_cards);
    for exp in expeditions {
        if round.is_selected(exp.color) {
            bail!("{} expedition given more than once", exp.color.label());
        }
        round.insert(exp);
    }
    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_lenient() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("   "), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("3abc"), 3);
        assert_eq!(parse_count("-2"), -2);
        assert_eq!(parse_count("+4"), 4);
        assert_eq!(parse_count("-"), 0);
    }

    #[test]
    fn test_parse_count_saturates() {
        assert_eq!(parse_count("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_normalize_wager_keeps_out_of_range() {
        assert_eq!(normalize_wager(""), 0);
        assert_eq!(normalize_wager("x"), 0);
        assert_eq!(normalize_wager("-1"), -1);
        assert_eq!(normalize_wager("5"), 5);
        assert_eq!(normalize_wager("99999999999"), i32::MAX);
    }

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target(""), 0);
        assert_eq!(normalize_target("3"), 3);
        assert_eq!(normalize_target("-3"), 0);
        assert_eq!(normalize_target("two"), 0);
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards("3, 5 10").unwrap();
        assert_eq!(cards.values().collect::<Vec<_>>(), vec![3, 5, 10]);
        assert!(parse_cards("").unwrap().is_empty());
        assert_eq!(parse_cards("4 4").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_cards_rejects_bad_values() {
        assert!(parse_cards("1").is_err());
        assert!(parse_cards("11").is_err());
        assert!(parse_cards("five").is_err());
    }

    #[test]
    fn test_parse_colors() {
        let colors = parse_colors("blue, red blue").unwrap();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
        assert!(parse_colors("").unwrap().is_empty());
        assert!(parse_colors("red orange").is_err());
    }

    #[test]
    fn test_parse_expedition_full() {
        let exp = parse_expedition("red:3,4,5:2").unwrap();
        assert_eq!(exp.color, Color::Red);
        assert_eq!(exp.cards.sum(), 12);
        assert_eq!(exp.wager_count, 2);
    }

    #[test]
    fn test_parse_expedition_wagers_only() {
        let exp = parse_expedition("Blue::1").unwrap();
        assert_eq!(exp.color, Color::Blue);
        assert!(exp.cards.is_empty());
        assert_eq!(exp.wager_count, 1);
    }

    #[test]
    fn test_parse_expedition_color_only() {
        let exp = parse_expedition("green").unwrap();
        assert!(exp.cards.is_empty());
        assert_eq!(exp.wager_count, 0);
    }

    #[test]
    fn test_parse_expedition_blank_wagers_are_zero() {
        let exp = parse_expedition("yellow:7:").unwrap();
        assert_eq!(exp.wager_count, 0);
    }

    #[test]
    fn test_parse_expedition_errors() {
        assert!(parse_expedition("").is_err());
        assert!(parse_expedition("teal:3").is_err());
        assert!(parse_expedition("red:12").is_err());
    }

    #[test]
    fn test_build_round_rejects_repeated_color() {
        let exps = vec![Expedition::new(Color::Red), Expedition::new(Color::Red)];
        assert!(build_round(exps, 0).is_err());
    }

    #[test]
    fn test_build_round() {
        let exps = vec![
            parse_expedition("red:3,4,5:2").unwrap(),
            parse_expedition("blue::1").unwrap(),
        ];
        let round = build_round(exps, 2).unwrap();
        assert_eq!(round.expeditions().len(), 2);
        assert_eq!(round.target_cards, 2);
    }
}
