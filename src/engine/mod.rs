use crate::{
    error::Result,
    rng::{RngManager, SystemRng},
    world::World,
};

pub struct EngineSettings {
    pub trial: usize,
    pub seed: u64,
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: RngManager::new(self.settings.seed),
            systems: self.systems,
            settings: self.settings,
        }
    }
}

pub struct Engine {
    rng: RngManager,
    systems: Vec<Box<dyn System>>,
    settings: EngineSettings,
}

impl Engine {
    /// Simulates `years` consecutive years. Each system sees the same
    /// year-start cohort; calves born this year are outside it.
    pub fn run(&mut self, world: &mut World, years: u32) -> Result<()> {
        for _ in 0..years {
            let year = world.year();
            let ctx = SystemContext {
                trial: self.settings.trial,
                year,
                cohort: world.pod().len(),
            };
            for system in &mut self.systems {
                let mut rng_stream = self.rng.stream(system.name());
                system
                    .run(&ctx, world, &mut rng_stream)
                    .map_err(|err| err.in_trial(ctx.trial, year))?;
            }
            world.advance_time();
        }
        Ok(())
    }

    /// Random stream for work done outside the yearly systems, e.g. seeding founders.
    pub fn rng_stream(&mut self, name: &str) -> SystemRng<'_> {
        self.rng.stream(name)
    }
}

pub struct SystemContext {
    pub trial: usize,
    pub year: u32,
    /// Pod size at the start of the year.
    pub cohort: usize,
}

pub trait System {
    fn name(&self) -> &str;
    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()>;
}
