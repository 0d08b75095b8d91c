use serde::{Deserialize, Serialize};

use crate::dolphin::Dolphin;

fn default_maturity_age() -> u32 {
    8
}

fn default_max_age_gap() -> u32 {
    10
}

fn default_refractory_years() -> u32 {
    5
}

/// Thresholds gating which pairs may breed in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingRules {
    #[serde(default = "default_maturity_age")]
    pub maturity_age: u32,
    #[serde(default = "default_max_age_gap")]
    pub max_age_gap: u32,
    /// Cooldown must strictly exceed this before a dolphin breeds again.
    #[serde(default = "default_refractory_years")]
    pub refractory_years: u32,
}

impl Default for BreedingRules {
    fn default() -> Self {
        Self {
            maturity_age: default_maturity_age(),
            max_age_gap: default_max_age_gap(),
            refractory_years: default_refractory_years(),
        }
    }
}

impl BreedingRules {
    /// Kinship is checked on immediate parents only; grandparent pairings pass.
    pub fn is_eligible(&self, a: &Dolphin, b: &Dolphin) -> bool {
        a.age >= self.maturity_age
            && b.age >= self.maturity_age
            && a.age.abs_diff(b.age) <= self.max_age_gap
            && a.sex != b.sex
            && a.father != b.father
            && a.mother != b.mother
            && a.cooldown > self.refractory_years
            && b.cooldown > self.refractory_years
            && f64::from(a.age) <= a.lifespan
            && f64::from(b.age) <= b.lifespan
    }
}
