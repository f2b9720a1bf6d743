//! Battle state tracking from server records

mod battle;
mod request;
mod species;
mod updater;

pub use battle::Battle;
pub use species::{ResolvedSpecies, resolve_species};
