use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Uniform draw over both categories.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = SimError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(SimError::founder(format!("unknown sex category '{other}'"))),
        }
    }
}

/// Index of a dolphin within its pod. Stable for the lifetime of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DolphinId(pub(crate) usize);

impl DolphinId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dolphin {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    /// Age at which the dolphin dies. Drawn once; may be negative.
    pub lifespan: f64,
    pub mother: String,
    pub father: String,
    /// Years since the last successful mating.
    pub cooldown: u32,
}

impl Dolphin {
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        mother: impl Into<String>,
        father: impl Into<String>,
        lifespan: f64,
    ) -> Self {
        Self {
            name: name.into(),
            sex,
            age: 0,
            lifespan,
            mother: mother.into(),
            father: father.into(),
            cooldown: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        f64::from(self.age) >= self.lifespan
    }

    pub fn advance_year(&mut self) {
        self.age += 1;
        self.cooldown += 1;
    }
}

/// Normal lifespan distribution. A zero standard deviation yields a fixed lifespan.
#[derive(Debug, Clone, Copy)]
pub struct LifespanModel {
    normal: Normal<f64>,
}

impl LifespanModel {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(SimError::configuration(format!(
                "lifespan mean must be finite, got {mean}"
            )));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SimError::configuration(format!(
                "lifespan std_dev must be finite and non-negative, got {std_dev}"
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|err| SimError::configuration(format!("lifespan distribution: {err}")))?;
        Ok(Self { normal })
    }

    pub fn fixed(years: f64) -> Result<Self> {
        Self::new(years, 0.0)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng)
    }
}

/// A pre-seeded individual with synthetic parent names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderSpec {
    pub name: String,
    pub sex: String,
    pub mother: String,
    pub father: String,
}

impl FounderSpec {
    pub fn new(name: &str, sex: Sex, mother: &str, father: &str) -> Self {
        let sex = match sex {
            Sex::Male => "M",
            Sex::Female => "F",
        };
        Self {
            name: name.to_string(),
            sex: sex.to_string(),
            mother: mother.to_string(),
            father: father.to_string(),
        }
    }

    pub fn parsed_sex(&self) -> Result<Sex> {
        self.sex.parse().map_err(|_| {
            SimError::founder(format!(
                "founder '{}' has unknown sex '{}'",
                self.name, self.sex
            ))
        })
    }
}
