use blackjack_odds::{calculate, SimulationOptions, Situation};
use blackjack_odds_drivers::{parse_config_from_file, Config};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = ".blackjack_odds.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file. Defaults to ~/.blackjack_odds.yml if it exists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player card codes, rank then suit, e.g. TH 7D
    #[arg(short, long, num_args = 1.., required = true)]
    player: Vec<String>,

    /// Dealer up card code, e.g. 6S
    #[arg(short, long)]
    dealer: String,

    /// Number of simulated rounds
    #[arg(short, long)]
    trials: Option<u64>,

    /// Number of worker threads, 0 for all cores
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => parse_config_from_file(path),
        None => {
            let default_path = home::home_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE));
            match default_path {
                Some(path) if path.is_file() => parse_config_from_file(path),
                _ => {
                    log::debug!("no config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = load_config(args.config.as_ref())?;
    if let Some(trials) = args.trials {
        config.odds_calculator.trials = trials;
    }
    if let Some(threads) = args.threads {
        config.odds_calculator.number_of_threads = threads;
    }
    if args.seed.is_some() {
        config.odds_calculator.seed = args.seed;
    }
    let options = SimulationOptions::try_from(config.odds_calculator)?;

    let situation = Situation::parse(&args.player, &args.dealer)?;
    println!("{}", situation);

    let report = calculate(&situation, &options)?;
    println!("{}", report.probabilities);
    println!(
        "The probabilities represent your chances of winning, drawing, or losing the hand based on {} simulations.",
        report.trials
    );
    println!("Suggestion: {}", report.suggestion);

    Ok(())
}
