//! Move records
//!
//! Mirrors one entry of Showdown's `moves.json`. Fields the engine does not
//! reason about (descriptions, z-move data, contest data) are dropped at
//! deserialization.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Deserializer};

use crate::types::Type;

/// Accuracy code for moves that bypass the accuracy check
pub const NEVER_MISSES: u8 = 101;

/// Stat id -> stage delta, e.g. `{"atk": -1}` for Growl
pub type BoostTable = BTreeMap<String, i8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Capability tags on a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Contact,
    Sound,
    Bullet,
    Protect,
    Reflectable,
    Snatch,
    Powder,
    Bite,
    Pulse,
    Punch,
    Authentic,
    Mirror,
    Heal,
    Charge,
    Recharge,
    Defrost,
    Dance,
}

impl MoveFlag {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contact" => Some(MoveFlag::Contact),
            "sound" => Some(MoveFlag::Sound),
            "bullet" => Some(MoveFlag::Bullet),
            "protect" => Some(MoveFlag::Protect),
            "reflectable" => Some(MoveFlag::Reflectable),
            "snatch" => Some(MoveFlag::Snatch),
            "powder" => Some(MoveFlag::Powder),
            "bite" => Some(MoveFlag::Bite),
            "pulse" => Some(MoveFlag::Pulse),
            "punch" => Some(MoveFlag::Punch),
            // renamed in later data exports
            "authentic" | "bypasssub" => Some(MoveFlag::Authentic),
            "mirror" => Some(MoveFlag::Mirror),
            "heal" => Some(MoveFlag::Heal),
            "charge" => Some(MoveFlag::Charge),
            "recharge" => Some(MoveFlag::Recharge),
            "defrost" => Some(MoveFlag::Defrost),
            "dance" => Some(MoveFlag::Dance),
            _ => None,
        }
    }
}

/// Fixed damage, independent of the damage formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedDamage {
    /// Damage equal to the user's level (Seismic Toss, Night Shade)
    Level,
    Amount(u32),
}

/// Stat changes applied to the user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelfEffect {
    #[serde(default)]
    pub boosts: Option<BoostTable>,
}

/// A chance-based secondary effect
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryEffect {
    #[serde(default)]
    pub chance: Option<u8>,
    #[serde(default)]
    pub boosts: Option<BoostTable>,
    #[serde(default, rename = "self")]
    pub self_effect: Option<SelfEffect>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub volatile_status: Option<String>,
}

/// Static data for one move
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    /// Normalized id; filled from the table key when absent
    #[serde(default)]
    pub id: String,

    pub name: String,

    pub category: MoveCategory,

    #[serde(default)]
    pub defensive_category: Option<MoveCategory>,

    #[serde(rename = "type")]
    pub move_type: Type,

    #[serde(default)]
    pub base_power: u32,

    /// 0-100, or [`NEVER_MISSES`]
    #[serde(default, deserialize_with = "accuracy_code")]
    pub accuracy: u8,

    #[serde(default)]
    pub priority: i8,

    #[serde(default)]
    pub pp: u32,

    #[serde(default, deserialize_with = "flag_set")]
    pub flags: HashSet<MoveFlag>,

    #[serde(default)]
    pub secondary: Option<SecondaryEffect>,

    #[serde(default)]
    pub secondaries: Vec<SecondaryEffect>,

    /// Boosts applied to the target
    #[serde(default)]
    pub boosts: Option<BoostTable>,

    #[serde(default, rename = "self")]
    pub self_effect: Option<SelfEffect>,

    #[serde(default, deserialize_with = "truthy")]
    pub ohko: bool,

    #[serde(default, deserialize_with = "fixed_damage")]
    pub damage: Option<FixedDamage>,

    #[serde(default, deserialize_with = "multihit_range")]
    pub multihit: Option<(u8, u8)>,

    #[serde(default = "default_crit_ratio")]
    pub crit_ratio: u8,

    #[serde(default)]
    pub force_switch: bool,

    #[serde(default)]
    pub ignore_offensive: bool,

    #[serde(default)]
    pub ignore_defensive: bool,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub volatile_status: Option<String>,

    #[serde(default)]
    pub target: String,
}

impl MoveData {
    /// A move with the given id, type, category, power and accuracy; every
    /// other field takes its table default
    pub fn new(
        id: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        base_power: u32,
        accuracy: u8,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            category,
            defensive_category: None,
            move_type,
            base_power,
            accuracy,
            priority: 0,
            pp: 16,
            flags: HashSet::new(),
            secondary: None,
            secondaries: Vec::new(),
            boosts: None,
            self_effect: None,
            ohko: false,
            damage: None,
            multihit: None,
            crit_ratio: 1,
            force_switch: false,
            ignore_offensive: false,
            ignore_defensive: false,
            status: None,
            volatile_status: None,
            target: "normal".to_string(),
        }
    }

    pub fn with_flags(mut self, flags: &[MoveFlag]) -> Self {
        self.flags.extend(flags.iter().copied());
        self
    }

    /// Category used to pick the defending stat (Psyshock hits Def)
    pub fn defensive_category(&self) -> MoveCategory {
        self.defensive_category.unwrap_or(self.category)
    }

    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Every secondary effect, whichever field the table used
    pub fn secondary_effects(&self) -> impl Iterator<Item = &SecondaryEffect> {
        self.secondary.iter().chain(self.secondaries.iter())
    }

    pub fn never_misses(&self) -> bool {
        self.accuracy == NEVER_MISSES
    }
}

fn default_crit_ratio() -> u8 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAccuracy {
    Flag(bool),
    Percent(u8),
}

fn accuracy_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(match RawAccuracy::deserialize(deserializer)? {
        RawAccuracy::Flag(true) => NEVER_MISSES,
        RawAccuracy::Flag(false) => 0,
        // `true` coerced to an integer somewhere upstream
        RawAccuracy::Percent(1) => NEVER_MISSES,
        RawAccuracy::Percent(p) => p,
    })
}

fn flag_set<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashSet<MoveFlag>, D::Error> {
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.keys().filter_map(|k| MoveFlag::parse(k)).collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTruthy {
    Flag(bool),
    Other(serde_json::Value),
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match RawTruthy::deserialize(deserializer)? {
        RawTruthy::Flag(b) => b,
        RawTruthy::Other(v) => !v.is_null(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFixedDamage {
    Amount(u32),
    Keyword(String),
}

fn fixed_damage<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<FixedDamage>, D::Error> {
    Ok(
        match Option::<RawFixedDamage>::deserialize(deserializer)? {
            Some(RawFixedDamage::Amount(n)) => Some(FixedDamage::Amount(n)),
            Some(RawFixedDamage::Keyword(k)) if k == "level" => Some(FixedDamage::Level),
            _ => None,
        },
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMultihit {
    Exact(u8),
    Range([u8; 2]),
}

fn multihit_range<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<(u8, u8)>, D::Error> {
    Ok(
        Option::<RawMultihit>::deserialize(deserializer)?.map(|raw| match raw {
            RawMultihit::Exact(n) => (n, n),
            RawMultihit::Range([lo, hi]) => (lo, hi),
        }),
    )
}
