use crate::{
    engine::{System, SystemContext},
    error::Result,
    rng::SystemRng,
    world::{World, YearCensus},
};

/// Appends the year's census and logs progress every `progress_every` years.
pub struct BookkeepingSystem {
    progress_every: u32,
}

impl BookkeepingSystem {
    pub fn new() -> Self {
        Self { progress_every: 0 }
    }

    pub fn with_progress_every(mut self, years: u32) -> Self {
        self.progress_every = years;
        self
    }
}

impl Default for BookkeepingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for BookkeepingSystem {
    fn name(&self) -> &str {
        "bookkeeping"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let census = YearCensus {
            year: ctx.year,
            population: world.pod.len() as u64,
            deceased: world.deceased.len() as u64,
            living: world.living(),
            births: world.bookkeeping.births_this_year,
        };
        world.census.push(census);

        if self.progress_every > 0 && ctx.year % self.progress_every == 0 {
            tracing::info!(
                trial = ctx.trial,
                year = ctx.year,
                living = census.living,
                births = world.bookkeeping.total_births,
                "year census"
            );
        }
        Ok(())
    }
}
