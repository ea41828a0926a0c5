use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("The shoe ran out of cards in the middle of a round")]
    ExhaustedShoe,
    #[error("Number of trials must be positive")]
    ZeroTrials,
    #[error("A simulation worker panicked")]
    WorkerPanicked,
}
