use crate::{
    engine::{System, SystemContext},
    error::Result,
    rng::SystemRng,
    world::World,
};

/// Records cohort members whose age has reached their lifespan. Runs before aging.
pub struct MortalitySystem;

impl MortalitySystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MortalitySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MortalitySystem {
    fn name(&self) -> &str {
        "mortality"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        for id in world.pod.cohort(ctx.cohort) {
            let Some(dolphin) = world.pod.get(id) else {
                continue;
            };
            if dolphin.is_dead() && world.deceased.record(id) {
                tracing::trace!(name = %dolphin.name, age = dolphin.age, "died");
            }
        }
        Ok(())
    }
}
