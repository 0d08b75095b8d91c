mod aging;
mod bookkeeping;
mod mating;
mod mortality;

pub use aging::AgingSystem;
pub use bookkeeping::BookkeepingSystem;
pub use mating::MatingSystem;
pub use mortality::MortalitySystem;
