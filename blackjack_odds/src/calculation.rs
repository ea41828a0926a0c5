use crate::{
    play_round, suggest, OddsError, Outcome, Shoe, Situation, Suggestion, DEFAULT_TRIALS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    pub trials: u64,
    /// 0 means one worker per available core.
    pub number_of_threads: usize,
    /// Fixes every worker's random source. The same seed and thread count
    /// reproduce the same result.
    pub seed: Option<u64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        SimulationOptions {
            trials: DEFAULT_TRIALS,
            number_of_threads: 0,
            seed: None,
        }
    }
}

impl SimulationOptions {
    fn resolved_number_of_threads(&self) -> usize {
        let number_of_threads = {
            if self.number_of_threads == 0 {
                match std::thread::available_parallelism() {
                    Ok(n) => n.get(),
                    Err(_) => 1,
                }
            } else {
                self.number_of_threads
            }
        };
        // No point in a worker with nothing to do.
        number_of_threads.min(self.trials.max(1) as usize)
    }
}

/// Tally of round outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub win: u64,
    pub draw: u64,
    pub lose: u64,
}

impl OutcomeCount {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.win += 1,
            Outcome::Draw => self.draw += 1,
            Outcome::Lose => self.lose += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.win + self.draw + self.lose
    }
}

impl AddAssign for OutcomeCount {
    fn add_assign(&mut self, rhs: Self) {
        self.win += rhs.win;
        self.draw += rhs.draw;
        self.lose += rhs.lose;
    }
}

/// Estimated chances of each outcome. The three fractions add up to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probabilities {
    pub win: f64,
    pub draw: f64,
    pub lose: f64,
}

impl TryFrom<OutcomeCount> for Probabilities {
    type Error = OddsError;

    fn try_from(count: OutcomeCount) -> Result<Self, Self::Error> {
        let total = count.total();
        if total == 0 {
            return Err(OddsError::ZeroTrials);
        }
        let total = total as f64;
        Ok(Probabilities {
            win: count.win as f64 / total,
            draw: count.draw as f64 / total,
            lose: count.lose as f64 / total,
        })
    }
}

impl std::fmt::Display for Probabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Probabilities: Win: {:.2}%, Draw: {:.2}%, Lose: {:.2}%",
            self.win * 100.0,
            self.draw * 100.0,
            self.lose * 100.0
        )
    }
}

/// Everything a caller shows after a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub trials: u64,
    pub probabilities: Probabilities,
    pub suggestion: Suggestion,
}

/// Estimates the player's chances by playing `options.trials` independent
/// rounds, each on a freshly shuffled copy of the situation's shoe.
///
/// Trials are spread over worker threads. Each worker owns its random source
/// and its tally, and the tallies are summed at the end.
pub fn simulate(
    situation: &Situation,
    options: &SimulationOptions,
) -> Result<Probabilities, OddsError> {
    if options.trials == 0 {
        return Err(OddsError::ZeroTrials);
    }

    let base_shoe = situation.base_shoe();
    let number_of_threads = options.resolved_number_of_threads();
    log::debug!(
        "simulating {} trials on {} threads against {} cards",
        options.trials,
        number_of_threads,
        base_shoe.len()
    );

    let count = std::thread::scope(|scope| {
        let mut workers = Vec::with_capacity(number_of_threads);
        for worker_index in 0..number_of_threads {
            let trials = trials_for_worker(options.trials, number_of_threads, worker_index);
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker_index as u64)),
                None => StdRng::from_entropy(),
            };
            let base_shoe = &base_shoe;
            workers.push(scope.spawn(move || {
                run_trials(situation, base_shoe, trials, &mut rng)
            }));
        }

        let mut count = OutcomeCount::default();
        for worker in workers {
            count += worker.join().map_err(|_| OddsError::WorkerPanicked)??;
        }
        Ok::<OutcomeCount, OddsError>(count)
    })?;

    log::debug!(
        "finished with {} wins, {} draws, {} losses",
        count.win,
        count.draw,
        count.lose
    );
    Probabilities::try_from(count)
}

/// Runs the simulation and looks up the basic strategy suggestion for the
/// same situation.
pub fn calculate(situation: &Situation, options: &SimulationOptions) -> Result<Report, OddsError> {
    let probabilities = simulate(situation, options)?;
    let suggestion = suggest(situation.player_hand(), situation.dealer_up_card());
    log::info!("{} {} -> {}", situation, probabilities, suggestion);
    Ok(Report {
        trials: options.trials,
        probabilities,
        suggestion,
    })
}

fn trials_for_worker(trials: u64, number_of_threads: usize, worker_index: usize) -> u64 {
    let number_of_threads = number_of_threads as u64;
    let worker_index = worker_index as u64;
    let extra = if worker_index < trials % number_of_threads {
        1
    } else {
        0
    };
    trials / number_of_threads + extra
}

fn run_trials(
    situation: &Situation,
    base_shoe: &Shoe,
    trials: u64,
    rng: &mut StdRng,
) -> Result<OutcomeCount, OddsError> {
    let mut count = OutcomeCount::default();
    for _ in 0..trials {
        let mut shoe = base_shoe.shuffled(rng);
        let outcome = play_round(situation.player_hand(), situation.dealer_up_card(), &mut shoe)?;
        count.record(outcome);
    }
    Ok(count)
}
