//! Entity model: what we believe about each Pokemon and each side

mod abilities;
mod item;
mod moves;
mod pokemon;
mod stats;
mod status;
mod team;

pub use abilities::{ABILITY_CAPACITY, AbilitySet};
pub use item::HeldItem;
pub use moves::Move;
pub use pokemon::{FAINTED_CONDITION, Pokemon};
pub use stats::{STAGE_MULTIPLIERS, StatStages, estimate_hp, estimate_stat};
pub use status::Status;
pub use team::{EntryHazards, MAX_TEAM_SIZE, SideCondition, Team};
