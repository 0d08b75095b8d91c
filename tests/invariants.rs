mod common;

use common::{build_engine, immortal_config, pod_of_four, seeded_world};
use pod_census::{
    names::{GeneratedNames, GeneratedRoster},
    run_trial, Scenario,
};

#[test]
fn census_counts_never_shrink() {
    let scenario = Scenario::bottlenose_pod();
    let config = scenario.trial_config().unwrap();
    let report = run_trial(0, 2024, &scenario.founders, &GeneratedRoster::default(), &config).unwrap();

    assert_eq!(report.census.len(), 101);
    for window in report.census.windows(2) {
        let (before, after) = (window[0], window[1]);
        assert_eq!(after.year, before.year + 1);
        assert!(after.population >= before.population);
        assert!(after.deceased >= before.deceased);
    }
    for year in &report.census {
        assert_eq!(year.living, year.population - year.deceased);
        assert!(year.deceased <= year.population);
    }
}

#[test]
fn everyone_in_the_cohort_ages_exactly_one_year() {
    let config = immortal_config(1, 8);
    let mut world = seeded_world(&pod_of_four(), 30.0, Box::new(GeneratedNames::default()));
    let mut engine = build_engine(4, &config);

    for _ in 0..30 {
        let before: Vec<u32> = world.pod().iter().map(|d| d.age).collect();
        engine.run(&mut world, 1).unwrap();
        let after: Vec<u32> = world.pod().iter().map(|d| d.age).collect();
        for (index, age) in before.iter().enumerate() {
            assert_eq!(after[index], age + 1, "dolphin {index} skipped a year");
        }
        assert!(after[before.len()..].iter().all(|&age| age == 0));
    }
}

#[test]
fn parents_cooldown_restarts_after_breeding() {
    let config = immortal_config(1, 8);
    let mut world = seeded_world(&pod_of_four(), 100.0, Box::new(GeneratedNames::default()));
    let mut engine = build_engine(4, &config);

    engine.run(&mut world, 8).unwrap();
    assert_eq!(world.pod().len(), 4);
    assert!(world.pod().iter().all(|d| d.cooldown == 8));

    engine.run(&mut world, 1).unwrap();
    assert_eq!(world.pod().len(), 6);
    for founder in world.pod().iter().take(4) {
        assert_eq!(founder.cooldown, 1, "{} bred and then aged once", founder.name);
    }
    for calf in world.pod().iter().skip(4) {
        assert_eq!((calf.age, calf.cooldown), (0, 0));
    }
}

#[test]
fn deaths_are_recorded_before_aging() {
    let config = immortal_config(1, 1000);
    let mut world = seeded_world(&pod_of_four(), 3.0, Box::new(GeneratedNames::default()));
    let mut engine = build_engine(4, &config);

    engine.run(&mut world, 3).unwrap();
    assert_eq!(world.living(), 4);
    // ages reach 3 at the start of year 3, so that year's census already counts the deaths
    engine.run(&mut world, 1).unwrap();
    assert_eq!(world.deceased().len(), 4);
    assert_eq!(world.census().last().unwrap().living, 0);

    engine.run(&mut world, 2).unwrap();
    assert_eq!(world.deceased().len(), 4);
    assert!(world.pod().iter().all(|d| d.age == 6));
}
