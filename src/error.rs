//! Error types surfaced by the simulation core.

use thiserror::Error;

use crate::dolphin::Sex;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("name supply exhausted for {sex} calves")]
    SupplyExhausted { sex: Sex },

    #[error("invalid founder spec: {0}")]
    InvalidFounderSpec(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("name '{0}' is already taken in this pod")]
    NameCollision(String),

    #[error("no dolphin with id {0} in this pod")]
    UnknownDolphin(usize),

    #[error("trial {trial} failed in year {year}: {source}")]
    TrialFailed {
        trial: usize,
        year: u32,
        #[source]
        source: Box<SimError>,
    },

    #[error("every trial failed; no statistics to aggregate")]
    NoCompletedTrials,

    #[error("scenario parse error: {0}")]
    Scenario(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn founder<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFounderSpec(msg.into())
    }

    /// Attaches the trial and year a failure happened in.
    pub fn in_trial(self, trial: usize, year: u32) -> Self {
        match self {
            already @ SimError::TrialFailed { .. } => already,
            other => SimError::TrialFailed {
                trial,
                year,
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, looking through trial context.
    pub fn root(&self) -> &SimError {
        match self {
            SimError::TrialFailed { source, .. } => source.root(),
            other => other,
        }
    }
}
