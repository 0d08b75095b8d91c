mod common;

use common::{immortal_config, pod_of_four};
use pod_census::{
    names::{
        GeneratedNames, GeneratedRoster, NamePool, NameRoster, NameSupply, NameSupplyFactory,
    },
    Experiment, ExperimentConfig, FailurePolicy, Scenario, SimError,
};

fn config(parallel: bool) -> ExperimentConfig {
    let mut scenario = Scenario::bottlenose_pod();
    scenario.trials = 6;
    scenario.years = 60;
    scenario.parallel = parallel;
    scenario.experiment_config().unwrap()
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let founders = pod_of_four();
    let parallel = Experiment::new(config(true), &founders, &GeneratedRoster::default())
        .run()
        .unwrap();
    let sequential = Experiment::new(config(false), &founders, &GeneratedRoster::default())
        .run()
        .unwrap();

    assert_eq!(parallel.years, sequential.years);
    assert_eq!(parallel.trials, sequential.trials);
    assert_eq!(parallel.years.len(), 60);
    assert_eq!(parallel.trials_completed(), 6);
}

#[test]
fn bands_bracket_the_mean() {
    let founders = pod_of_four();
    let result = Experiment::new(config(true), &founders, &GeneratedRoster::default())
        .run()
        .unwrap();

    // no calves and no deaths in the first years: every trial agrees
    assert_eq!(result.years[0].mean, 4.0);
    assert_eq!(result.years[0].std_dev, 0.0);
    for stats in &result.years {
        assert!(stats.std_dev >= 0.0);
        assert!((stats.lower - (stats.mean - stats.std_dev)).abs() < 1e-9);
        assert!((stats.upper - (stats.mean + stats.std_dev)).abs() < 1e-9);
    }
}

#[test]
fn trials_draw_independent_streams() {
    let founders = pod_of_four();
    let result = Experiment::new(config(true), &founders, &GeneratedRoster::default())
        .run()
        .unwrap();
    let seeds: std::collections::HashSet<u64> = result.trials.iter().map(|t| t.seed).collect();
    assert_eq!(seeds.len(), result.trials.len());
}

fn starved_config(policy: FailurePolicy) -> ExperimentConfig {
    ExperimentConfig {
        trials: 3,
        seed: 1,
        trial: immortal_config(10, 1),
        failure_policy: policy,
        parallel: true,
    }
}

#[test]
fn exhausted_trial_aborts_by_default() {
    let founders = pod_of_four();
    let names = NameRoster::new(vec!["Arlo".into()], vec!["Bea".into()]);
    let err = Experiment::new(starved_config(FailurePolicy::Abort), &founders, &names)
        .run()
        .unwrap_err();
    assert!(matches!(err, SimError::TrialFailed { trial: 0, .. }));
    assert!(matches!(err.root(), SimError::SupplyExhausted { .. }));
}

#[test]
fn skip_policy_with_no_survivors_reports_no_trials() {
    let founders = pod_of_four();
    let names = NameRoster::new(vec!["Arlo".into()], vec!["Bea".into()]);
    let err = Experiment::new(starved_config(FailurePolicy::SkipTrial), &founders, &names)
        .run()
        .unwrap_err();
    assert!(matches!(err, SimError::NoCompletedTrials));
}

/// Hands trial `starved` an empty pool and every other trial generated names.
struct StarveOne {
    starved: usize,
}

impl NameSupplyFactory for StarveOne {
    fn open(&self, trial: usize) -> Box<dyn NameSupply> {
        if trial == self.starved {
            Box::new(NamePool::default())
        } else {
            Box::new(GeneratedNames::default())
        }
    }
}

#[test]
fn skip_policy_aggregates_the_surviving_trials() {
    let founders = pod_of_four();
    let config = ExperimentConfig {
        trials: 3,
        seed: 1,
        trial: immortal_config(12, 8),
        failure_policy: FailurePolicy::SkipTrial,
        parallel: true,
    };
    let result = Experiment::new(config, &founders, &StarveOne { starved: 1 })
        .run()
        .unwrap();

    assert_eq!(result.trials_requested, 3);
    assert_eq!(result.trials_completed(), 2);
    assert!(result.trials.iter().all(|trial| trial.trial != 1));
    assert_eq!(result.failures.len(), 1);
    let failure = &result.failures[0];
    assert_eq!(failure.trial, 1);
    // the first calves are due once the founders reach 8
    assert_eq!(failure.year, Some(8));
    assert!(failure.message.contains("exhausted"));
    assert_eq!(result.years.len(), 12);
}

#[test]
fn zero_trials_is_rejected() {
    let founders = pod_of_four();
    let mut config = config(false);
    config.trials = 0;
    let err = Experiment::new(config, &founders, &GeneratedRoster::default())
        .run()
        .unwrap_err();
    assert!(matches!(err, SimError::Configuration(_)));
}
