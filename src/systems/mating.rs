use crate::{
    engine::{System, SystemContext},
    error::Result,
    mating::{MatingEngine, MatingOutcome},
    rng::SystemRng,
    world::World,
};

/// Tries every ordered pair of the year-start cohort.
pub struct MatingSystem {
    engine: MatingEngine,
}

impl MatingSystem {
    pub fn new(engine: MatingEngine) -> Self {
        Self { engine }
    }
}

impl System for MatingSystem {
    fn name(&self) -> &str {
        "mating"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let ids: Vec<_> = world.pod.cohort(ctx.cohort).collect();
        let mut births = 0;
        for &dolphin in &ids {
            for &partner in &ids {
                if dolphin == partner {
                    continue;
                }
                let outcome = self.engine.attempt(
                    &mut world.pod,
                    dolphin,
                    partner,
                    world.names.as_mut(),
                    rng,
                )?;
                if let MatingOutcome::Bred(_) = outcome {
                    births += 1;
                }
            }
        }
        world.bookkeeping.births_this_year = births;
        world.bookkeeping.total_births += births;
        Ok(())
    }
}
