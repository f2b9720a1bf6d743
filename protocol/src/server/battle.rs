//! Shared types for battle records

use crate::ParseError;

/// Seat in a two-player battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    P1,
    P2,
}

impl Seat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Seat::P1),
            "p2" => Some(Seat::P2),
            _ => None,
        }
    }

    /// Seat from the first two characters of a token ("p2a: Pikachu", "p1: Alice")
    pub fn from_prefix(s: &str) -> Option<Self> {
        s.get(..2).and_then(Seat::parse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seat::P1 => "p1",
            Seat::P2 => "p2",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::P1 => 0,
            Seat::P2 => 1,
        }
    }

    pub fn opponent(&self) -> Seat {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
        }
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonIdent {
    pub seat: Seat,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl PokemonIdent {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let seat = Seat::from_prefix(pos_part)?;
        let position = pos_part.chars().nth(2);

        Some(PokemonIdent {
            seat,
            position,
            name: name.to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender, shiny, tera)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny" or "Arceus-*"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let parts: Vec<&str> = s.split(", ").collect();

        if let Some(species) = parts.first() {
            details.species = species.to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "M" {
                details.gender = Some('M');
            } else if *part == "F" {
                details.gender = Some('F');
            } else if *part == "shiny" {
                details.shiny = true;
            } else if let Some(tera) = part.strip_prefix("tera:") {
                details.tera_type = Some(tera.to_string());
            }
        }

        details
    }

    /// Level, defaulting to 100 when the details omit it
    pub fn level_or_default(&self) -> u8 {
        self.level.unwrap_or(100)
    }
}

/// Condition string ("100/100", "50/100 slp", "0 fnt")
///
/// Parsing never fails; fields that do not parse are left as `None` and
/// the raw text is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pub raw: String,
    pub current: Option<u32>,
    pub max: Option<u32>,
    /// Status code (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl Condition {
    pub fn parse(s: &str) -> Self {
        let raw = s.trim();
        let mut parts = raw.split_whitespace();
        let hp_part = parts.next().unwrap_or("");
        let status = parts.next().map(|s| s.to_string());

        let (current, max) = match hp_part.split_once('/') {
            Some((cur, max)) => (cur.parse().ok(), max.parse().ok()),
            None => (hp_part.parse().ok(), None),
        };

        Condition {
            raw: raw.to_string(),
            current,
            max,
            status,
        }
    }

    /// The unique fainted sentinel
    pub fn is_fainted(&self) -> bool {
        self.raw == "0 fnt"
    }
}

/// Stat that can carry a stage boost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoostStat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl BoostStat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(BoostStat::Atk),
            "def" => Some(BoostStat::Def),
            "spa" => Some(BoostStat::Spa),
            "spd" => Some(BoostStat::Spd),
            "spe" => Some(BoostStat::Spe),
            "accuracy" => Some(BoostStat::Accuracy),
            "evasion" => Some(BoostStat::Evasion),
            _ => None,
        }
    }
}

/// Side of the field (for side conditions), e.g. "p1: Alice"
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub seat: Seat,
    pub raw: String,
}

impl Side {
    pub fn parse(s: &str) -> Option<Self> {
        Some(Side {
            seat: Seat::from_prefix(s)?,
            raw: s.to_string(),
        })
    }
}

pub(crate) fn field<'a>(parts: &[&'a str], index: usize, name: &str) -> Result<&'a str, ParseError> {
    parts
        .get(index)
        .copied()
        .ok_or_else(|| ParseError::MissingField(name.to_string()))
}

/// Helper to parse a PokemonIdent from record fields
pub(crate) fn parse_pokemon(parts: &[&str], index: usize) -> Result<PokemonIdent, ParseError> {
    let raw = field(parts, index, "pokemon")?;
    PokemonIdent::parse(raw).ok_or_else(|| ParseError::UnknownValue {
        field: "pokemon".to_string(),
        value: raw.to_string(),
    })
}

pub(crate) fn parse_seat(parts: &[&str], index: usize) -> Result<Seat, ParseError> {
    let raw = field(parts, index, "seat")?;
    Seat::from_prefix(raw).ok_or_else(|| ParseError::UnknownValue {
        field: "seat".to_string(),
        value: raw.to_string(),
    })
}

pub(crate) fn parse_side(parts: &[&str], index: usize) -> Result<Side, ParseError> {
    let raw = field(parts, index, "side")?;
    Side::parse(raw).ok_or_else(|| ParseError::UnknownValue {
        field: "side".to_string(),
        value: raw.to_string(),
    })
}

pub(crate) fn parse_condition(parts: &[&str], index: usize) -> Result<Condition, ParseError> {
    field(parts, index, "condition").map(Condition::parse)
}

pub(crate) fn parse_number<T: std::str::FromStr>(
    parts: &[&str],
    index: usize,
    name: &str,
) -> Result<T, ParseError> {
    let raw = field(parts, index, name)?;
    raw.trim()
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("{name} is not a number: {raw}")))
}

pub(crate) fn optional(parts: &[&str], index: usize) -> Option<String> {
    parts
        .get(index)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
