use thiserror::Error;

use crate::id::to_id;
use crate::moves::MoveData;
use crate::species::SpeciesData;
use crate::types::TypeChart;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),
}

/// Read-only access to reference data
///
/// Implementations are never mutated after load and are shared between
/// concurrently running battles.
pub trait Dex: Send + Sync {
    /// Species by normalized id
    fn species(&self, id: &str) -> Option<&SpeciesData>;

    /// Move by normalized id
    fn move_data(&self, id: &str) -> Option<&MoveData>;

    fn type_chart(&self) -> &TypeChart;

    /// Species by display name or id
    fn lookup_species(&self, name: &str) -> Result<&SpeciesData, DexError> {
        let id = to_id(name);
        self.species(&id).ok_or(DexError::UnknownSpecies(id))
    }

    /// Move by display name or id
    fn lookup_move(&self, name: &str) -> Result<&MoveData, DexError> {
        let id = to_id(name);
        self.move_data(&id).ok_or(DexError::UnknownMove(id))
    }

    /// Randomized-battle movepool, falling back to the base species' pool
    /// for formes that have none of their own
    fn random_battle_moves(&self, name: &str) -> Result<&[String], DexError> {
        let species = self.lookup_species(name)?;
        if !species.random_battle_moves.is_empty() {
            return Ok(&species.random_battle_moves);
        }
        match &species.base_species {
            Some(base) => Ok(&self.lookup_species(base)?.random_battle_moves),
            None => Ok(&species.random_battle_moves),
        }
    }
}
