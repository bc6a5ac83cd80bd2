use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{get_config_path, Config, DEFAULT_PLAYER};
use crate::leaderboard::DEFAULT_CAPACITY;
use crate::prompt::{prompt_with_default, prompt_yes_no};
use crate::scoring::{validate_rules, ScoringRules, MAX_POINTS, MAX_WAGER_LIMIT};

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

fn valid_points(n: &i64) -> bool {
    (0..=MAX_POINTS).contains(n)
}

/// Keep asking until the answer parses as `T`.
fn prompt_parsed<T>(message: &str, default: T, valid: impl Fn(&T) -> bool) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display,
{
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<T>() {
            Ok(v) if valid(&v) => return Ok(v),
            _ => println!("  Invalid value. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Lost Cities Score Configuration");
    println!("===============================");
    println!();

    // 1. Player defaults
    typewriter("Scores submitted without a name are recorded under a default player name.");
    let default_player = loop {
        let name = prompt_with_default("Default player name", DEFAULT_PLAYER)?;
        if !name.trim().is_empty() {
            break name;
        }
        println!("  Name must not be blank.");
    };

    println!();
    typewriter("The leaderboard keeps only the best scores of the session.");
    let leaderboard_capacity =
        prompt_parsed("Leaderboard size", DEFAULT_CAPACITY, |n: &usize| *n >= 1)?;

    // 2. Scoring rules
    println!();
    let customize =
        prompt_yes_no("Customize scoring rules? (n keeps the standard rules)", false)?;
    let scoring = if customize {
        let defaults = ScoringRules::default();
        println!();
        typewriter("Every started expedition costs a fixed amount before wagers multiply it.");
        let expedition_cost =
            prompt_parsed("Expedition cost", defaults.expedition_cost, valid_points)?;
        let max_wagers = prompt_parsed(
            "Max wager cards per expedition",
            defaults.max_wagers,
            |n: &i32| (0..=MAX_WAGER_LIMIT).contains(n),
        )?;
        typewriter(
            "Long expeditions earn a flat bonus once card + wager count reaches a threshold.",
        );
        let bonus_threshold =
            prompt_parsed("Bonus threshold", defaults.bonus_threshold, |n: &u32| *n >= 1)?;
        let bonus_points = prompt_parsed("Bonus points", defaults.bonus_points, valid_points)?;
        let target_card_points = prompt_parsed(
            "Points per target card",
            defaults.target_card_points,
            valid_points,
        )?;

        let rules = ScoringRules {
            expedition_cost,
            max_wagers,
            bonus_threshold,
            bonus_points,
            target_card_points,
        };
        if let Err(errors) = validate_rules(&rules) {
            anyhow::bail!("Invalid scoring rules: {}", errors.join("; "));
        }
        Some(rules)
    } else {
        None
    };

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        default_player,
        leaderboard_capacity,
        scoring,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `lost-cities-score` to start a scoring session.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_share_rule_bounds() {
        assert!(valid_points(&0));
        assert!(valid_points(&MAX_POINTS));
        assert!(!valid_points(&-1));
        assert!(!valid_points(&(MAX_POINTS + 1)));
    }
}
