pub mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{Config, DEFAULT_PLAYER};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/lost-cities-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("lost-cities-score"))
}

/// Get the default config file path (~/.config/lost-cities-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path,
///   and a missing default file yields `Config::default()`.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Validate a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.default_player.trim().is_empty() {
        errors.push("default_player: must not be blank".to_string());
    }

    if config.leaderboard_capacity == 0 {
        errors.push("leaderboard_capacity: must be at least 1".to_string());
    }

    if let Some(ref rules) = config.scoring {
        if let Err(rule_errors) = crate::scoring::validate_rules(rules) {
            errors.extend(rule_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringRules;
    use std::env;

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp_path = env::temp_dir().join("lost_cities_score_no_such_config.yaml");
        let _ = fs::remove_file(&temp_path);
        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_path = env::temp_dir().join("lost_cities_score_test_config.yaml");
        fs::write(&temp_path, "default_player: Tess\nleaderboard_capacity: 4\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.default_player, "Tess");
        assert_eq!(config.leaderboard_capacity, 4);
        assert!(config.scoring.is_none());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_path = env::temp_dir().join("lost_cities_score_bad_config.yaml");
        fs::write(&temp_path, "leaderboard_capacity: [not, a, number]\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_all_config_errors() {
        let config = Config {
            default_player: "   ".to_string(),  // Error 1
            leaderboard_capacity: 0,           // Error 2
            scoring: Some(ScoringRules {
                bonus_points: -5,              // Error 3
                ..ScoringRules::default()
            }),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("default_player"));
        assert!(errors[1].contains("leaderboard_capacity"));
        assert!(errors[2].contains("scoring.bonus_points"));
    }

    #[test]
    fn test_rejects_max_wagers_that_would_overflow() {
        let temp_path = env::temp_dir().join("lost_cities_score_huge_wagers.yaml");
        fs::write(&temp_path, "scoring:\n  max_wagers: 2147483647\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.max_wagers"));

        let _ = fs::remove_file(&temp_path);
    }
}
