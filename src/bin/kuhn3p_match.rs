use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kuhn3p::arena::{Agent, Competition, HandSimulation};
use kuhn3p::config::{ConfigError, PlayerConfig};
use kuhn3p::game::NUM_SEATS;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "kuhn3p-match")]
#[command(about = "Play three player Kuhn poker hands between equilibrium players")]
struct Cli {
    /// JSON player config. Uses a built in sub-family 1 profile if not given.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of hands to play
    #[arg(short = 'n', long, default_value_t = 10_000)]
    hands: usize,

    /// Seed S. Seat i's player is seeded with S + i and the deal with S.
    /// Replaces the config's seed when given.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<PlayerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => PlayerConfig::from_path(path)?,
        None => PlayerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn build_agents(config: &PlayerConfig) -> Result<Vec<Box<dyn Agent>>, ConfigError> {
    (0..NUM_SEATS as u64)
        .map(|i| -> Result<Box<dyn Agent>, ConfigError> { Ok(Box::new(config.build_player(i)?)) })
        .collect()
}

fn run(cli: Cli) -> Result<Competition, Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    tracing::info!(seed = config.seed, params = ?config.params.values(), "Loaded player config");

    let agents = build_agents(&config)?;
    let sim = HandSimulation::new(config.game.clone(), agents)?;

    let mut competition = Competition::new(sim);
    let mut rng = StdRng::seed_from_u64(config.seed);
    competition.run(cli.hands, &mut rng)?;
    Ok(competition)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let competition = match run(Cli::parse()) {
        Ok(competition) => competition,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Hands played = {}", competition.num_hands);
    for (seat, avg) in competition.average_payoff().iter().enumerate() {
        println!(
            "Seat {seat}: average {avg:+.4} (won {}, lost {})",
            competition.win_count[seat], competition.loss_count[seat]
        );
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn player_seeds(config: &PlayerConfig) -> Vec<u64> {
        (0..NUM_SEATS as u64)
            .map(|i| config.build_player(i).unwrap().seed())
            .collect()
    }

    #[test]
    fn test_seed_flag_seeds_players() {
        let cli = Cli::try_parse_from(["kuhn3p-match", "--seed", "7"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(7, config.seed);
        assert_eq!(vec![7, 8, 9], player_seeds(&config));
    }

    #[test]
    fn test_seed_flag_overrides_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"seed": 42, "params": {"b11": 0.1, "b21": 0.2, "b32": 0.5, "c11": 0.25, "c33": 0.25, "c34": 0.5}}"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["kuhn3p-match", "-c", path]).unwrap();
        assert_eq!(vec![42, 43, 44], player_seeds(&load_config(&cli).unwrap()));

        let cli = Cli::try_parse_from(["kuhn3p-match", "-c", path, "-s", "100"]).unwrap();
        assert_eq!(vec![100, 101, 102], player_seeds(&load_config(&cli).unwrap()));
    }

    #[test]
    fn test_run_is_repeatable_for_a_seed() {
        let a = run(Cli::try_parse_from(["kuhn3p-match", "-n", "200", "-s", "3"]).unwrap()).unwrap();
        let b = run(Cli::try_parse_from(["kuhn3p-match", "-n", "200", "-s", "3"]).unwrap()).unwrap();
        assert_eq!(200, a.num_hands);
        assert_eq!(a.total_payoff, b.total_payoff);
        assert_eq!(a.win_count, b.win_count);
    }
}
