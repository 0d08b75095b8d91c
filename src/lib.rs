pub mod dolphin;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod mating;
pub mod names;
pub mod report;
pub mod rng;
pub mod scenario;
pub mod systems;
pub mod trial;
pub mod world;

pub use dolphin::{Dolphin, DolphinId, FounderSpec, LifespanModel, Sex};
pub use eligibility::BreedingRules;
pub use error::{Result, SimError};
pub use experiment::{Experiment, ExperimentConfig, ExperimentResult, FailurePolicy, YearStats};
pub use scenario::{Scenario, ScenarioLoader};
pub use trial::{run_trial, TrialConfig, TrialReport};
pub use world::World;
