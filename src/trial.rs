use serde::{Deserialize, Serialize};

use crate::{
    dolphin::{Dolphin, FounderSpec, LifespanModel},
    eligibility::BreedingRules,
    engine::{Engine, EngineBuilder, EngineSettings},
    error::Result,
    mating::MatingEngine,
    names::NameSupplyFactory,
    systems::{AgingSystem, BookkeepingSystem, MatingSystem, MortalitySystem},
    world::{World, YearCensus},
};

/// Everything a single trial needs besides its seed and name supply.
#[derive(Debug, Clone, Copy)]
pub struct TrialConfig {
    pub years: u32,
    pub rules: BreedingRules,
    pub lifespan: LifespanModel,
    pub progress_every: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialReport {
    pub trial: usize,
    pub seed: u64,
    pub founders: u64,
    pub census: Vec<YearCensus>,
}

impl TrialReport {
    pub fn living_series(&self) -> Vec<u64> {
        self.census.iter().map(|year| year.living).collect()
    }

    fn last(&self) -> Option<&YearCensus> {
        self.census.last()
    }

    pub fn population(&self) -> u64 {
        self.last().map_or(self.founders, |year| year.population)
    }

    pub fn deaths(&self) -> u64 {
        self.last().map_or(0, |year| year.deceased)
    }

    pub fn births(&self) -> u64 {
        self.population() - self.founders
    }

    pub fn living(&self) -> u64 {
        self.population() - self.deaths()
    }
}

/// Runs one independent population for `config.years` years.
pub fn run_trial(
    trial: usize,
    seed: u64,
    founders: &[FounderSpec],
    names: &dyn NameSupplyFactory,
    config: &TrialConfig,
) -> Result<TrialReport> {
    let mut engine = build_engine(trial, seed, config);
    let mut world = World::new(names.open(trial));
    seed_founders(&mut engine, &mut world, founders, &config.lifespan)?;

    engine.run(&mut world, config.years)?;

    let founders = world.founders() as u64;
    let report = TrialReport {
        trial,
        seed,
        founders,
        census: world.into_census(),
    };
    tracing::info!(
        trial,
        living = report.living(),
        births = report.births(),
        deaths = report.deaths(),
        "trial finished"
    );
    Ok(report)
}

fn build_engine(trial: usize, seed: u64, config: &TrialConfig) -> Engine {
    let mating = MatingEngine::new(config.rules, config.lifespan);
    EngineBuilder::new(EngineSettings { trial, seed })
        .with_system(MatingSystem::new(mating))
        .with_system(MortalitySystem::new())
        .with_system(AgingSystem::new())
        .with_system(BookkeepingSystem::new().with_progress_every(config.progress_every))
        .build()
}

fn seed_founders(
    engine: &mut Engine,
    world: &mut World,
    founders: &[FounderSpec],
    lifespan: &LifespanModel,
) -> Result<()> {
    let mut rng = engine.rng_stream("founders");
    for spec in founders {
        let sex = spec.parsed_sex()?;
        let founder = Dolphin::new(
            spec.name.clone(),
            sex,
            spec.mother.clone(),
            spec.father.clone(),
            lifespan.sample(&mut rng),
        );
        world.add_founder(founder)?;
    }
    Ok(())
}
