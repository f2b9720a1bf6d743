//! Move slots

use geniusect_dex::{Dex, DexError, MoveData};

use crate::error::Result;

/// One move slot: static data plus per-turn availability
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub data: MoveData,
    pub current_pp: u32,
    pub max_pp: u32,
    pub disabled: bool,
}

impl Move {
    pub fn new(data: MoveData) -> Self {
        let pp = data.pp;
        Self {
            data,
            current_pp: pp,
            max_pp: pp,
            disabled: false,
        }
    }

    /// Build from reference data
    ///
    /// Ids carrying a numeric suffix (`hiddenpowerfire60`, `return102`) are
    /// retried without it.
    pub fn from_dex(dex: &dyn Dex, id: &str) -> Result<Self> {
        match dex.lookup_move(id) {
            Ok(data) => Ok(Self::new(data.clone())),
            Err(err) => {
                let trimmed = id.trim_end_matches(|c: char| c.is_ascii_digit());
                if trimmed.is_empty() || trimmed == id {
                    return Err(err.into());
                }
                let data = dex
                    .lookup_move(trimmed)
                    .map_err(|_| DexError::UnknownMove(id.to_string()))?;
                Ok(Self::new(data.clone()))
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Has PP left and is not disabled
    pub fn is_usable(&self) -> bool {
        !self.disabled && self.current_pp > 0
    }
}
