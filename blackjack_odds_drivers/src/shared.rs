use blackjack_odds::{SimulationOptions, DEFAULT_TRIALS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub odds_calculator: ConfigOddsCalculator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigOddsCalculator {
    #[serde(default = "default_trials")]
    pub trials: u64,
    /// 0 lets the calculator use every available core.
    #[serde(default)]
    pub number_of_threads: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_trials() -> u64 {
    DEFAULT_TRIALS
}

impl Default for ConfigOddsCalculator {
    fn default() -> Self {
        ConfigOddsCalculator {
            trials: DEFAULT_TRIALS,
            number_of_threads: 0,
            seed: None,
        }
    }
}

impl TryFrom<ConfigOddsCalculator> for SimulationOptions {
    type Error = blackjack_odds::OddsError;

    fn try_from(config: ConfigOddsCalculator) -> Result<Self, Self::Error> {
        if config.trials == 0 {
            return Err(blackjack_odds::OddsError::ZeroTrials);
        }
        Ok(SimulationOptions {
            trials: config.trials,
            number_of_threads: config.number_of_threads,
            seed: config.seed,
        })
    }
}

/// Parses the YAML content of a config file.
pub fn parse_config(content: &str) -> anyhow::Result<Config> {
    Ok(serde_yaml::from_str(content)?)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file<P: AsRef<Path>>(filename: P) -> anyhow::Result<Config> {
    let filename = filename.as_ref();
    let file_content = fs::read_to_string(filename).map_err(|e| {
        anyhow::anyhow!("cannot read config file {}: {}", filename.display(), e)
    })?;
    parse_config(&file_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            "odds_calculator:\n  trials: 1000\n  number_of_threads: 4\n  seed: 17\n",
        )
        .unwrap();
        let options: SimulationOptions = config.odds_calculator.try_into().unwrap();
        assert_eq!(options.trials, 1000);
        assert_eq!(options.number_of_threads, 4);
        assert_eq!(options.seed, Some(17));
    }

    #[test]
    fn fills_in_missing_fields() {
        let config = parse_config("odds_calculator:\n  number_of_threads: 2\n").unwrap();
        assert_eq!(config.odds_calculator.trials, DEFAULT_TRIALS);
        assert_eq!(config.odds_calculator.seed, None);

        let config = parse_config("{}").unwrap();
        assert_eq!(config.odds_calculator.trials, DEFAULT_TRIALS);
        assert_eq!(config.odds_calculator.number_of_threads, 0);
    }

    #[test]
    fn should_return_error_for_zero_trials() {
        let config = parse_config("odds_calculator:\n  trials: 0\n").unwrap();
        let converted: Result<SimulationOptions, _> = config.odds_calculator.try_into();
        assert_eq!(converted, Err(blackjack_odds::OddsError::ZeroTrials));
    }

    #[test]
    fn should_return_error_for_malformed_config() {
        assert!(parse_config("odds_calculator:\n  trials: many\n").is_err());
        assert!(parse_config_from_file("/nonexistent/blackjack_odds.yml").is_err());
    }
}
