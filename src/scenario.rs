use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    dolphin::{FounderSpec, LifespanModel, Sex},
    eligibility::BreedingRules,
    error::{Result, SimError},
    experiment::{ExperimentConfig, FailurePolicy},
    names::{GeneratedRoster, NameRoster, NameSupplyFactory},
    trial::TrialConfig,
};

fn default_trials() -> usize {
    10
}

fn default_years() -> u32 {
    101
}

fn default_progress_every() -> u32 {
    25
}

fn default_parallel() -> bool {
    true
}

fn default_lifespan_mean() -> f64 {
    35.0
}

fn default_lifespan_std_dev() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_years")]
    pub years: u32,
    pub founders: Vec<FounderSpec>,
    #[serde(default)]
    pub rules: BreedingRules,
    #[serde(default)]
    pub lifespan: LifespanConfig,
    #[serde(default)]
    pub names: NameSource,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_progress_every")]
    pub progress_every_years: u32,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifespanConfig {
    #[serde(default = "default_lifespan_mean")]
    pub mean: f64,
    #[serde(default = "default_lifespan_std_dev")]
    pub std_dev: f64,
}

impl Default for LifespanConfig {
    fn default() -> Self {
        Self {
            mean: default_lifespan_mean(),
            std_dev: default_lifespan_std_dev(),
        }
    }
}

/// Where calf names come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameSource {
    #[default]
    Generated,
    Inline {
        male: Vec<String>,
        female: Vec<String>,
    },
    Files {
        male: PathBuf,
        female: PathBuf,
    },
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Parses a scenario. Name-list paths are resolved against the base dir.
    ///
    /// Nothing is validated here; callers apply overrides first and then
    /// call [`Scenario::validate`].
    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)?;
        let mut scenario: Scenario = serde_yaml::from_str(&data)
            .map_err(|err| SimError::Scenario(format!("{}: {err}", path.display())))?;
        if let NameSource::Files { male, female } = &mut scenario.names {
            *male = self.base_dir.join(&*male);
            *female = self.base_dir.join(&*female);
        }
        Ok(scenario)
    }
}

impl Scenario {
    /// The four elder dolphins of the reference pod.
    pub fn bottlenose_pod() -> Self {
        Self {
            name: "bottlenose_pod".to_string(),
            description: Some("Four unrelated elders, a century of breeding".to_string()),
            seed: 7,
            trials: default_trials(),
            years: default_years(),
            founders: vec![
                FounderSpec::new("Shakira", Sex::Female, "Jen", "Sven"),
                FounderSpec::new("Jency", Sex::Female, "Jan", "Stan"),
                FounderSpec::new("Lothar", Sex::Male, "June", "Stoon"),
                FounderSpec::new("JinBiao", Sex::Male, "Jill", "Skrill"),
            ],
            rules: BreedingRules::default(),
            lifespan: LifespanConfig::default(),
            names: NameSource::Generated,
            failure_policy: FailurePolicy::Abort,
            progress_every_years: default_progress_every(),
            parallel: default_parallel(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SimError::configuration("trials must be greater than zero"));
        }
        if self.years == 0 {
            return Err(SimError::configuration("years must be greater than zero"));
        }
        self.lifespan_model()?;

        if self.founders.is_empty() {
            return Err(SimError::founder("scenario must define at least one founder"));
        }
        let mut seen = HashSet::new();
        for founder in &self.founders {
            founder.parsed_sex()?;
            if !seen.insert(founder.name.as_str()) {
                return Err(SimError::founder(format!(
                    "founder name '{}' defined more than once",
                    founder.name
                )));
            }
        }

        if self.rules.maturity_age >= self.years {
            tracing::warn!(
                maturity_age = self.rules.maturity_age,
                years = self.years,
                "no founder can mature within the horizon; expect zero births"
            );
        }
        Ok(())
    }

    pub fn lifespan_model(&self) -> Result<LifespanModel> {
        LifespanModel::new(self.lifespan.mean, self.lifespan.std_dev)
    }

    pub fn trial_config(&self) -> Result<TrialConfig> {
        Ok(TrialConfig {
            years: self.years,
            rules: self.rules,
            lifespan: self.lifespan_model()?,
            progress_every: self.progress_every_years,
        })
    }

    pub fn experiment_config(&self) -> Result<ExperimentConfig> {
        Ok(ExperimentConfig {
            trials: self.trials,
            seed: self.seed,
            trial: self.trial_config()?,
            failure_policy: self.failure_policy,
            parallel: self.parallel,
        })
    }

    /// Builds the name factory, keeping founder names out of the calf lists.
    pub fn name_factory(&self) -> Result<Box<dyn NameSupplyFactory>> {
        let founders = self.founders.iter().map(|f| f.name.as_str());
        let factory: Box<dyn NameSupplyFactory> = match &self.names {
            NameSource::Generated => Box::new(GeneratedRoster::excluding(founders)),
            NameSource::Inline { male, female } => {
                Box::new(NameRoster::new(male.clone(), female.clone()).excluding(founders))
            }
            NameSource::Files { male, female } => {
                Box::new(NameRoster::from_files(male, female)?.excluding(founders))
            }
        };
        Ok(factory)
    }

    /// Serialises the scenario back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| SimError::Scenario(err.to_string()))
    }
}
