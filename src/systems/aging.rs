use crate::{
    engine::{System, SystemContext},
    error::Result,
    rng::SystemRng,
    world::World,
};

/// Ages the year-start cohort, the dead included. This year's calves are skipped.
pub struct AgingSystem;

impl AgingSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AgingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for AgingSystem {
    fn name(&self) -> &str {
        "aging"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let ids: Vec<_> = world.pod.cohort(ctx.cohort).collect();
        for id in ids {
            if let Some(dolphin) = world.pod.get_mut(id) {
                dolphin.advance_year();
            }
        }
        Ok(())
    }
}
