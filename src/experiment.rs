//! Many independent trials folded into per-year population statistics.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    dolphin::FounderSpec,
    error::{Result, SimError},
    names::NameSupplyFactory,
    rng::trial_seed,
    trial::{run_trial, TrialConfig, TrialReport},
};

/// What to do when a trial fails part-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first failure (by trial index) aborts the experiment.
    #[default]
    Abort,
    /// Failed trials are reported and left out of the statistics.
    SkipTrial,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperimentConfig {
    pub trials: usize,
    pub seed: u64,
    pub trial: TrialConfig,
    pub failure_policy: FailurePolicy,
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearStats {
    pub year: u32,
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub trial: usize,
    pub seed: u64,
    pub population: u64,
    pub births: u64,
    pub deaths: u64,
    pub living: u64,
}

impl From<&TrialReport> for TrialSummary {
    fn from(report: &TrialReport) -> Self {
        Self {
            trial: report.trial,
            seed: report.seed,
            population: report.population(),
            births: report.births(),
            deaths: report.deaths(),
            living: report.living(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialFailure {
    pub trial: usize,
    pub year: Option<u32>,
    pub message: String,
}

impl TrialFailure {
    fn new(trial: usize, err: &SimError) -> Self {
        let year = match err {
            SimError::TrialFailed { year, .. } => Some(*year),
            _ => None,
        };
        Self {
            trial,
            year,
            message: err.root().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub trials_requested: usize,
    pub trials: Vec<TrialSummary>,
    pub years: Vec<YearStats>,
    pub failures: Vec<TrialFailure>,
}

impl ExperimentResult {
    pub fn trials_completed(&self) -> usize {
        self.trials.len()
    }
}

pub struct Experiment<'a> {
    config: ExperimentConfig,
    founders: &'a [FounderSpec],
    names: &'a dyn NameSupplyFactory,
}

impl<'a> Experiment<'a> {
    pub fn new(
        config: ExperimentConfig,
        founders: &'a [FounderSpec],
        names: &'a dyn NameSupplyFactory,
    ) -> Self {
        Self {
            config,
            founders,
            names,
        }
    }

    pub fn run(&self) -> Result<ExperimentResult> {
        if self.config.trials == 0 {
            return Err(SimError::configuration("trial count must be positive"));
        }
        if self.config.trial.years == 0 {
            return Err(SimError::configuration("year count must be positive"));
        }

        let outcomes = if self.config.parallel {
            (0..self.config.trials)
                .into_par_iter()
                .map(|trial| self.run_one(trial))
                .collect::<Vec<_>>()
        } else {
            (0..self.config.trials)
                .map(|trial| self.run_one(trial))
                .collect::<Vec<_>>()
        };

        let mut reports = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (trial, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(report) => reports.push(report),
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::SkipTrial => {
                        tracing::warn!(trial, error = %err, "skipping failed trial");
                        failures.push(TrialFailure::new(trial, &err));
                    }
                },
            }
        }
        if reports.is_empty() {
            return Err(SimError::NoCompletedTrials);
        }

        let series: Vec<Vec<u64>> = reports.iter().map(TrialReport::living_series).collect();
        Ok(ExperimentResult {
            trials_requested: self.config.trials,
            trials: reports.iter().map(TrialSummary::from).collect(),
            years: aggregate(&series),
            failures,
        })
    }

    fn run_one(&self, trial: usize) -> Result<TrialReport> {
        let seed = trial_seed(self.config.seed, trial);
        run_trial(trial, seed, self.founders, self.names, &self.config.trial)
    }
}

/// Cross-trial mean and population standard deviation per year.
pub fn aggregate(series: &[Vec<u64>]) -> Vec<YearStats> {
    let years = series.iter().map(Vec::len).min().unwrap_or(0);
    (0..years)
        .map(|year| {
            let values: Vec<f64> = series.iter().map(|trial| trial[year] as f64).collect();
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std_dev = variance.sqrt();
            YearStats {
                year: year as u32,
                mean,
                std_dev,
                lower: mean - std_dev,
                upper: mean + std_dev,
            }
        })
        .collect()
}
