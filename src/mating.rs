use rand::Rng;

use crate::dolphin::{Dolphin, DolphinId, LifespanModel, Sex};
use crate::eligibility::BreedingRules;
use crate::error::{Result, SimError};
use crate::names::NameSupply;
use crate::world::Pod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatingOutcome {
    NoMatch,
    Bred(String),
}

#[derive(Debug, Clone, Copy)]
pub struct MatingEngine {
    rules: BreedingRules,
    lifespan: LifespanModel,
}

impl MatingEngine {
    pub fn new(rules: BreedingRules, lifespan: LifespanModel) -> Self {
        Self { rules, lifespan }
    }

    /// Breeds `a` with `b` if the rules allow it, appending the calf to `pod`.
    ///
    /// Self-pairing is a cheap `NoMatch`. An id outside the pod or a drained
    /// name supply is an error and leaves the pod untouched.
    pub fn attempt<R: Rng + ?Sized>(
        &self,
        pod: &mut Pod,
        a: DolphinId,
        b: DolphinId,
        names: &mut dyn NameSupply,
        rng: &mut R,
    ) -> Result<MatingOutcome> {
        if a == b {
            return Ok(MatingOutcome::NoMatch);
        }
        let first = pod.get(a).ok_or(SimError::UnknownDolphin(a.index()))?;
        let second = pod.get(b).ok_or(SimError::UnknownDolphin(b.index()))?;
        if !self.rules.is_eligible(first, second) {
            return Ok(MatingOutcome::NoMatch);
        }

        let (mother, father) = if first.sex == Sex::Female {
            (first.name.clone(), second.name.clone())
        } else {
            (second.name.clone(), first.name.clone())
        };

        let sex = Sex::sample(rng);
        let name = names.next(sex)?;
        let lifespan = self.lifespan.sample(rng);
        pod.insert(Dolphin::new(name.clone(), sex, mother, father, lifespan))?;

        for parent in [a, b] {
            if let Some(parent) = pod.get_mut(parent) {
                parent.cooldown = 0;
            }
        }
        tracing::debug!(calf = %name, %sex, lifespan, "calf born");
        Ok(MatingOutcome::Bred(name))
    }
}
