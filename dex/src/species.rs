//! Species records

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::stats::StatTable;
use crate::types::Type;

/// Static data for one species (one entry of `pokedex.json`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesData {
    pub name: String,

    #[serde(default)]
    pub types: Vec<Type>,

    #[serde(default)]
    pub base_stats: StatTable,

    /// Possible abilities in slot order (0, 1, H, S)
    #[serde(default, deserialize_with = "abilities_in_slot_order")]
    pub abilities: Vec<String>,

    /// Species this one is a form of ("Charizard" for "Charizard-Mega-X")
    #[serde(default)]
    pub base_species: Option<String>,

    /// Randomized-battle movepool, by move id
    #[serde(default)]
    pub random_battle_moves: Vec<String>,
}

impl SpeciesData {
    pub fn new(name: impl Into<String>, types: Vec<Type>, base_stats: StatTable) -> Self {
        Self {
            name: name.into(),
            types,
            base_stats,
            abilities: Vec::new(),
            base_species: None,
            random_battle_moves: Vec::new(),
        }
    }

    pub fn with_abilities(mut self, abilities: &[&str]) -> Self {
        self.abilities = abilities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.random_battle_moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }
}

fn abilities_in_slot_order<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    // BTreeMap orders "0" < "1" < "H" < "S"
    let slots = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(slots.into_values().collect())
}
