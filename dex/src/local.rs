use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dex::Dex;
use crate::id::to_id;
use crate::moves::MoveData;
use crate::species::SpeciesData;
use crate::types::TypeChart;

/// In-memory [`Dex`] backed by hash maps
#[derive(Debug, Clone, Default)]
pub struct LocalDex {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    type_chart: TypeChart,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormatsEntry {
    #[serde(default)]
    random_battle_moves: Vec<String>,
}

impl LocalDex {
    /// An empty dex with the standard type chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the contents of `pokedex.json` and `moves.json`
    pub fn from_json(pokedex: &str, moves: &str) -> Result<Self> {
        let species: HashMap<String, SpeciesData> =
            serde_json::from_str(pokedex).context("failed to parse pokedex table")?;
        let moves: HashMap<String, MoveData> =
            serde_json::from_str(moves).context("failed to parse moves table")?;

        let mut dex = Self::new();
        for (key, data) in species {
            dex.species.insert(to_id(&key), data);
        }
        for (key, mut data) in moves {
            let id = to_id(&key);
            if data.id.is_empty() {
                data.id = id.clone();
            }
            dex.moves.insert(id, data);
        }

        tracing::info!(
            species = dex.species.len(),
            moves = dex.moves.len(),
            "loaded reference tables"
        );
        Ok(dex)
    }

    /// Replace the type chart with one parsed from `typechart.json`
    pub fn with_type_chart_json(mut self, json: &str) -> Result<Self> {
        self.type_chart = TypeChart::from_json(json).context("failed to parse type chart")?;
        Ok(self)
    }

    /// Attach randomized-battle movepools from `formats-data.json`
    pub fn with_formats_data_json(mut self, json: &str) -> Result<Self> {
        let entries: HashMap<String, FormatsEntry> =
            serde_json::from_str(json).context("failed to parse formats data")?;

        for (key, entry) in entries {
            if entry.random_battle_moves.is_empty() {
                continue;
            }
            if let Some(species) = self.species.get_mut(&to_id(&key)) {
                species.random_battle_moves = entry
                    .random_battle_moves
                    .iter()
                    .map(|m| to_id(m))
                    .collect();
            }
        }
        Ok(self)
    }

    /// Load `pokedex.json` and `moves.json` from a directory, plus
    /// `typechart.json` and `formats-data.json` when present
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
        };

        let mut dex = Self::from_json(&read("pokedex.json")?, &read("moves.json")?)?;
        if dir.join("typechart.json").exists() {
            dex = dex.with_type_chart_json(&read("typechart.json")?)?;
        }
        if dir.join("formats-data.json").exists() {
            dex = dex.with_formats_data_json(&read("formats-data.json")?)?;
        }
        Ok(dex)
    }

    pub fn insert_species(&mut self, data: SpeciesData) {
        self.species.insert(to_id(&data.name), data);
    }

    pub fn insert_move(&mut self, mut data: MoveData) {
        if data.id.is_empty() {
            data.id = to_id(&data.name);
        }
        self.moves.insert(data.id.clone(), data);
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl Dex for LocalDex {
    fn species(&self, id: &str) -> Option<&SpeciesData> {
        self.species.get(id)
    }

    fn move_data(&self, id: &str) -> Option<&MoveData> {
        self.moves.get(id)
    }

    fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }
}
