use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::dolphin::{Dolphin, DolphinId};
use crate::error::{Result, SimError};
use crate::names::NameSupply;

/// Append-only roster of every dolphin born into a trial, dead or alive.
#[derive(Debug, Clone, Default)]
pub struct Pod {
    members: Vec<Dolphin>,
    by_name: HashMap<String, DolphinId>,
}

impl Pod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dolphin: Dolphin) -> Result<DolphinId> {
        if self.by_name.contains_key(&dolphin.name) {
            return Err(SimError::NameCollision(dolphin.name));
        }
        let id = DolphinId(self.members.len());
        self.by_name.insert(dolphin.name.clone(), id);
        self.members.push(dolphin);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: DolphinId) -> Option<&Dolphin> {
        self.members.get(id.0)
    }

    pub fn get_mut(&mut self, id: DolphinId) -> Option<&mut Dolphin> {
        self.members.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<&Dolphin> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The first `cohort` members, i.e. everyone present when that cohort was taken.
    pub fn cohort(&self, cohort: usize) -> impl Iterator<Item = DolphinId> {
        (0..cohort.min(self.members.len())).map(DolphinId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dolphin> {
        self.members.iter()
    }
}

/// Names recorded the first year each dolphin reached its lifespan.
#[derive(Debug, Clone, Default)]
pub struct DeceasedSet {
    ids: HashSet<DolphinId>,
}

impl DeceasedSet {
    /// Returns `true` when the id was not yet recorded.
    pub fn record(&mut self, id: DolphinId) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// End-of-year tallies for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCensus {
    pub year: u32,
    pub population: u64,
    pub deceased: u64,
    pub living: u64,
    pub births: u64,
}

#[derive(Debug, Default, Clone)]
pub struct Bookkeeping {
    pub births_this_year: u64,
    pub total_births: u64,
}

/// Mutable state of a single trial.
pub struct World {
    year: u32,
    pub(crate) pod: Pod,
    pub(crate) deceased: DeceasedSet,
    pub(crate) names: Box<dyn NameSupply>,
    pub(crate) census: Vec<YearCensus>,
    pub(crate) bookkeeping: Bookkeeping,
    founders: usize,
}

impl World {
    pub fn new(names: Box<dyn NameSupply>) -> Self {
        Self {
            year: 0,
            pod: Pod::new(),
            deceased: DeceasedSet::default(),
            names,
            census: Vec::new(),
            bookkeeping: Bookkeeping::default(),
            founders: 0,
        }
    }

    pub fn add_founder(&mut self, dolphin: Dolphin) -> Result<DolphinId> {
        let name = dolphin.name.clone();
        let id = self
            .pod
            .insert(dolphin)
            .map_err(|_| SimError::founder(format!("duplicate founder name '{name}'")))?;
        self.founders += 1;
        Ok(id)
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn advance_time(&mut self) {
        self.year += 1;
    }

    pub fn pod(&self) -> &Pod {
        &self.pod
    }

    pub fn deceased(&self) -> &DeceasedSet {
        &self.deceased
    }

    pub fn census(&self) -> &[YearCensus] {
        &self.census
    }

    pub fn founders(&self) -> usize {
        self.founders
    }

    pub fn living(&self) -> u64 {
        (self.pod.len() - self.deceased.len()) as u64
    }

    pub(crate) fn into_census(self) -> Vec<YearCensus> {
        self.census
    }
}
