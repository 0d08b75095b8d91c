#![allow(dead_code)]

use pod_census::{
    engine::{Engine, EngineBuilder, EngineSettings},
    mating::MatingEngine,
    names::NameSupply,
    systems::{AgingSystem, BookkeepingSystem, MatingSystem, MortalitySystem},
    BreedingRules, Dolphin, FounderSpec, LifespanModel, Sex, TrialConfig, World,
};

pub fn pod_of_four() -> Vec<FounderSpec> {
    vec![
        FounderSpec::new("Shakira", Sex::Female, "Jen", "Sven"),
        FounderSpec::new("Jency", Sex::Female, "Jan", "Stan"),
        FounderSpec::new("Lothar", Sex::Male, "June", "Stoon"),
        FounderSpec::new("JinBiao", Sex::Male, "Jill", "Skrill"),
    ]
}

/// Fixed lifespan of 100 and no refractory period once mature.
pub fn immortal_config(years: u32, maturity_age: u32) -> TrialConfig {
    TrialConfig {
        years,
        rules: BreedingRules {
            maturity_age,
            max_age_gap: 10,
            refractory_years: 0,
        },
        lifespan: LifespanModel::fixed(100.0).unwrap(),
        progress_every: 0,
    }
}

pub fn build_engine(seed: u64, config: &TrialConfig) -> Engine {
    EngineBuilder::new(EngineSettings { trial: 0, seed })
        .with_system(MatingSystem::new(MatingEngine::new(
            config.rules,
            config.lifespan,
        )))
        .with_system(MortalitySystem::new())
        .with_system(AgingSystem::new())
        .with_system(BookkeepingSystem::new())
        .build()
}

pub fn seeded_world(
    founders: &[FounderSpec],
    lifespan: f64,
    names: Box<dyn NameSupply>,
) -> World {
    let mut world = World::new(names);
    for spec in founders {
        let sex = spec.parsed_sex().unwrap();
        world
            .add_founder(Dolphin::new(
                spec.name.clone(),
                sex,
                spec.mother.clone(),
                spec.father.clone(),
                lifespan,
            ))
            .unwrap();
    }
    world
}
