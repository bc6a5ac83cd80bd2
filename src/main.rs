use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_VALIDATION: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_IO: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score rounds interactively and keep a session leaderboard (default if no subcommand)
    Play,
    /// Score a single round given on the command line
    Score {
        /// Expedition as COLOR[:CARDS[:WAGERS]], e.g. red:3,4,5:2 or blue::1 (repeatable)
        #[arg(short, long = "expedition", value_name = "EXPEDITION")]
        expeditions: Vec<String>,

        /// Number of target score cards (blank or non-numeric counts as 0)
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        targets: String,

        /// Player name (defaults to the configured default player)
        #[arg(short, long)]
        player: Option<String>,

        /// Print the score breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a leaderboard exported from a session
    Show {
        /// Path to the exported JSON file
        path: PathBuf,

        /// Print tab-separated values instead of a table
        #[arg(long)]
        tsv: bool,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "lost-cities-score")]
#[command(about = "Lost Cities round scorer with a session leaderboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lost-cities-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Load and validate config, exiting with EXIT_CONFIG on failure.
fn load_config_or_exit(path: Option<PathBuf>, verbose: bool) -> lost_cities_score::config::Config {
    let config = match lost_cities_score::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = lost_cities_score::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        let rules = config.rules();
        eprintln!(
            "Rules: expedition cost {}, max wagers {}, bonus +{} at {} cards, target cards {} pts",
            rules.expedition_cost,
            rules.max_wagers,
            rules.bonus_points,
            rules.bonus_threshold,
            rules.target_card_points
        );
        eprintln!(
            "Leaderboard capacity: {}, default player: {}",
            config.leaderboard_capacity, config.default_player
        );
    }

    config
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = !cli.no_color && lost_cities_score::output::should_use_colors();

    match command {
        Commands::Init => {
            if let Err(e) = lost_cities_score::config::run_init_wizard(config_path) {
                if lost_cities_score::prompt::is_input_closed(&e) {
                    eprintln!("Aborted.");
                } else {
                    eprintln!("Init failed: {:#}", e);
                }
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Play => {
            let config = load_config_or_exit(config_path, cli.verbose);
            let mut session = lost_cities_score::session::Session::new(&config);
            if let Err(e) =
                lost_cities_score::play::run_session(&mut session, use_colors, cli.verbose)
            {
                eprintln!("Session error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Score {
            expeditions,
            targets,
            player,
            json,
        } => {
            let config = load_config_or_exit(config_path, cli.verbose);
            let mut session = lost_cities_score::session::Session::new(&config);

            let parsed: anyhow::Result<Vec<_>> = expeditions
                .iter()
                .map(|raw| lost_cities_score::input::parse_expedition(raw))
                .collect();
            let target_cards = lost_cities_score::input::normalize_target(&targets);
            let round = match parsed
                .and_then(|exps| lost_cities_score::input::build_round(exps, target_cards))
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Scoring {} expeditions, {} target cards",
                    round.expeditions().len(),
                    round.target_cards
                );
            }

            let player = player.unwrap_or_default();
            let outcome = match session.score_round(&player, &round, Utc::now()) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!(
                        "{}",
                        lost_cities_score::output::format_validation_error(&e, use_colors)
                    );
                    std::process::exit(EXIT_VALIDATION);
                }
            };

            if json {
                match serde_json::to_string_pretty(&outcome.breakdown) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize breakdown: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                println!("Player: {}", outcome.player);
                println!(
                    "{}",
                    lost_cities_score::output::format_breakdown(
                        &outcome.breakdown,
                        session.rules(),
                        use_colors
                    )
                );
            }
        }
        Commands::Show { path, tsv } => {
            // The exported file is standalone; config is not needed
            let snapshot = match lost_cities_score::leaderboard::read_snapshot(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read leaderboard: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Loaded {} entries exported at {}",
                    snapshot.entries.len(),
                    snapshot.exported_at.to_rfc3339()
                );
            }

            if tsv {
                println!("{}", lost_cities_score::output::format_tsv(&snapshot.entries));
            } else {
                println!(
                    "{}",
                    lost_cities_score::output::format_leaderboard(&snapshot.entries, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
