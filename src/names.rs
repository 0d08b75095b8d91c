//! Name supplies for newborn calves.
//!
//! A supply is trial-scoped: every trial opens its own streams through a
//! [`NameSupplyFactory`] so one trial can never drain another's names.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::dolphin::Sex;
use crate::error::{Result, SimError};

pub trait NameSupply: Send {
    /// Next unused name for a calf of `sex`.
    fn next(&mut self, sex: Sex) -> Result<String>;
}

pub trait NameSupplyFactory: Sync {
    fn open(&self, trial: usize) -> Box<dyn NameSupply>;
}

/// Finite per-sex name queues.
#[derive(Debug, Clone, Default)]
pub struct NamePool {
    male: VecDeque<String>,
    female: VecDeque<String>,
}

impl NamePool {
    pub fn new(
        male: impl IntoIterator<Item = String>,
        female: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            male: male.into_iter().collect(),
            female: female.into_iter().collect(),
        }
    }

    pub fn remaining(&self, sex: Sex) -> usize {
        match sex {
            Sex::Male => self.male.len(),
            Sex::Female => self.female.len(),
        }
    }
}

impl NameSupply for NamePool {
    fn next(&mut self, sex: Sex) -> Result<String> {
        let queue = match sex {
            Sex::Male => &mut self.male,
            Sex::Female => &mut self.female,
        };
        queue.pop_front().ok_or(SimError::SupplyExhausted { sex })
    }
}

/// Unbounded supply producing `M0001`, `F0001`, ... and skipping taken names.
#[derive(Debug, Clone, Default)]
pub struct GeneratedNames {
    male: u64,
    female: u64,
    taken: HashSet<String>,
}

impl GeneratedNames {
    pub fn excluding<'a>(taken: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: taken.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }
}

impl NameSupply for GeneratedNames {
    fn next(&mut self, sex: Sex) -> Result<String> {
        let (prefix, counter) = match sex {
            Sex::Male => ('M', &mut self.male),
            Sex::Female => ('F', &mut self.female),
        };
        loop {
            *counter += 1;
            let name = format!("{prefix}{counter:04}");
            if !self.taken.contains(&name) {
                return Ok(name);
            }
        }
    }
}

/// Distinct name lists, copied into a fresh [`NamePool`] per trial.
#[derive(Debug, Clone, Default)]
pub struct NameRoster {
    male: Vec<String>,
    female: Vec<String>,
}

impl NameRoster {
    pub fn new(male: Vec<String>, female: Vec<String>) -> Self {
        Self {
            male: distinct(male),
            female: distinct(female),
        }
    }

    /// Reads newline-separated lists, skipping blank lines.
    pub fn from_files(male: impl AsRef<Path>, female: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_list(male.as_ref())?, read_list(female.as_ref())?))
    }

    pub fn len(&self, sex: Sex) -> usize {
        match sex {
            Sex::Male => self.male.len(),
            Sex::Female => self.female.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    /// Drops names that would collide with the founders.
    pub fn excluding<'a>(mut self, taken: impl IntoIterator<Item = &'a str>) -> Self {
        let taken: HashSet<&str> = taken.into_iter().collect();
        self.male.retain(|name| !taken.contains(name.as_str()));
        self.female.retain(|name| !taken.contains(name.as_str()));
        self
    }
}

impl NameSupplyFactory for NameRoster {
    fn open(&self, _trial: usize) -> Box<dyn NameSupply> {
        Box::new(NamePool::new(self.male.clone(), self.female.clone()))
    }
}

/// Factory for [`GeneratedNames`].
#[derive(Debug, Clone, Default)]
pub struct GeneratedRoster {
    taken: HashSet<String>,
}

impl GeneratedRoster {
    /// Never hands out any of `taken`, e.g. the founders' names.
    pub fn excluding<'a>(taken: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: taken.into_iter().map(str::to_string).collect(),
        }
    }
}

impl NameSupplyFactory for GeneratedRoster {
    fn open(&self, _trial: usize) -> Box<dyn NameSupply> {
        Box::new(GeneratedNames::excluding(self.taken.iter().map(String::as_str)))
    }
}

fn distinct(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
