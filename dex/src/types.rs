//! Elemental types and the effectiveness code table
//!
//! Effectiveness is stored as the small integer codes used by the reference
//! tables (`0` normal, `1` super-effective, `2` not very effective,
//! `3` immune) and only turned into a multiplier at lookup time.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Elemental types (18 as of Gen 6+), plus a catch-all for anything else
/// the data may name ("???", "Stellar", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
    Unknown = 18,
}

impl Type {
    /// The 18 real types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse from a type name (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
            Type::Unknown => "???",
        }
    }

    fn index(self) -> Option<usize> {
        match self {
            Type::Unknown => None,
            t => Some(t as usize),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Type::from_protocol(&name).unwrap_or(Type::Unknown))
    }
}

/// Effectiveness of one attacking type against one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Normal,
    SuperEffective,
    NotVeryEffective,
    Immune,
}

impl Effectiveness {
    /// Decode a reference-table code; anything unrecognized is normal
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Effectiveness::SuperEffective,
            2 => Effectiveness::NotVeryEffective,
            3 => Effectiveness::Immune,
            _ => Effectiveness::Normal,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Effectiveness::Normal => 0,
            Effectiveness::SuperEffective => 1,
            Effectiveness::NotVeryEffective => 2,
            Effectiveness::Immune => 3,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Effectiveness::Normal => 1.0,
            Effectiveness::SuperEffective => 2.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::Immune => 0.0,
        }
    }
}

/// Type x type table of effectiveness codes
///
/// Row = attacking type, column = defending type, both in [`Type::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    codes: [[u8; 18]; 18],
}

impl TypeChart {
    /// The current-generation chart
    pub fn standard() -> Self {
        Self {
            codes: STANDARD_CODES,
        }
    }

    /// Raw code for one attacking type against one defending type
    pub fn code(&self, attack: Type, defend: Type) -> u8 {
        match (attack.index(), defend.index()) {
            (Some(a), Some(d)) => self.codes[a][d],
            _ => 0,
        }
    }

    pub fn matchup(&self, attack: Type, defend: Type) -> Effectiveness {
        Effectiveness::from_code(self.code(attack, defend))
    }

    /// Product of the per-type multipliers over every defending type
    pub fn effectiveness(&self, attack: Type, defenders: &[Type]) -> f64 {
        defenders
            .iter()
            .map(|d| self.matchup(attack, *d).multiplier())
            .product()
    }

    /// Build a chart from a Showdown `typechart.json` document
    ///
    /// The document is keyed by defending type, each entry holding a
    /// `damageTaken` map from attacking type to code. Keys that are not
    /// types (weather, status immunities) are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, RawTypeEntry> = serde_json::from_str(json)?;
        let mut codes = [[0u8; 18]; 18];

        for (defender, entry) in &raw {
            let Some(d) = Type::from_protocol(defender).and_then(Type::index) else {
                continue;
            };
            for (attacker, code) in &entry.damage_taken {
                if let Some(a) = Type::from_protocol(attacker).and_then(Type::index) {
                    codes[a][d] = *code;
                }
            }
        }

        Ok(Self { codes })
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeEntry {
    #[serde(default)]
    damage_taken: HashMap<String, u8>,
}

/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static STANDARD_CODES: [[u8; 18]; 18] = [
    // Normal attacking
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 0, 0, 2, 0],
    // Fire attacking
    [0, 2, 2, 0, 1, 1, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 0],
    // Water attacking
    [0, 1, 2, 0, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0],
    // Electric attacking
    [0, 0, 1, 2, 2, 0, 0, 0, 3, 1, 0, 0, 0, 0, 2, 0, 0, 0],
    // Grass attacking
    [0, 2, 1, 0, 2, 0, 0, 2, 1, 2, 0, 2, 1, 0, 2, 0, 2, 0],
    // Ice attacking
    [0, 2, 2, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 2, 0],
    // Fighting attacking
    [1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 2, 2, 1, 3, 0, 1, 1, 2],
    // Poison attacking
    [0, 0, 0, 0, 1, 0, 0, 2, 2, 0, 0, 0, 2, 2, 0, 0, 3, 1],
    // Ground attacking
    [0, 1, 0, 1, 2, 0, 0, 1, 0, 3, 0, 2, 1, 0, 0, 0, 1, 0],
    // Flying attacking
    [0, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 2, 0],
    // Psychic attacking
    [0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 3, 2, 0],
    // Bug attacking
    [0, 2, 0, 0, 1, 0, 2, 2, 0, 2, 1, 0, 0, 2, 0, 1, 2, 2],
    // Rock attacking
    [0, 1, 0, 0, 0, 1, 2, 0, 2, 1, 0, 1, 0, 0, 0, 0, 2, 0],
    // Ghost attacking
    [3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 2, 0, 0],
    // Dragon attacking
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 3],
    // Dark attacking
    [0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 2, 0, 2],
    // Steel attacking
    [0, 2, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 1],
    // Fairy attacking
    [0, 2, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 1, 1, 2, 0],
];
