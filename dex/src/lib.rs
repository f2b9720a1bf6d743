//! # geniusect-dex
//!
//! Read-only reference data for the geniusect battle engine: species, moves
//! and the type-effectiveness chart, keyed by normalized identifiers.
//!
//! The tables follow the layout of Pokemon Showdown's data exports
//! (`pokedex.json`, `moves.json`, `typechart.json`, `formats-data.json`), so
//! a [`LocalDex`] can be built straight from those files. Battles only ever
//! read through the [`Dex`] trait, which is `Send + Sync`; one loaded dex is
//! shared by every battle running in the process.
//!
//! ```ignore
//! use std::sync::Arc;
//! use geniusect_dex::{Dex, LocalDex, Type};
//!
//! let dex: Arc<dyn Dex> = Arc::new(LocalDex::load_dir("data/")?);
//! let garchomp = dex.lookup_species("Garchomp")?;
//! assert_eq!(garchomp.types, vec![Type::Dragon, Type::Ground]);
//! ```

mod dex;
mod id;
mod local;
pub mod moves;
pub mod species;
pub mod stats;
pub mod types;

pub use dex::{Dex, DexError};
pub use id::to_id;
pub use local::LocalDex;
pub use moves::{
    BoostTable, FixedDamage, MoveCategory, MoveData, MoveFlag, NEVER_MISSES, SecondaryEffect,
};
pub use species::SpeciesData;
pub use stats::{Stat, StatTable};
pub use types::{Effectiveness, Type, TypeChart};
