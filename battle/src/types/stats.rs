//! Stat stages and stat estimates

use geniusect_dex::Stat;
use geniusect_protocol::BoostStat;

/// Stage multipliers from -6 to +6
pub const STAGE_MULTIPLIERS: [f64; 13] = [
    1.0 / 4.0,
    2.0 / 7.0,
    1.0 / 3.0,
    2.0 / 5.0,
    1.0 / 2.0,
    2.0 / 3.0,
    1.0,
    3.0 / 2.0,
    2.0,
    5.0 / 2.0,
    3.0,
    7.0 / 2.0,
    4.0,
];

/// EVs assumed for a stat we have not seen
const ASSUMED_EVS: u32 = 252;
const MAX_IV: u32 = 31;

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: BoostStat) -> i8 {
        match stat {
            BoostStat::Atk => self.atk,
            BoostStat::Def => self.def,
            BoostStat::Spa => self.spa,
            BoostStat::Spd => self.spd,
            BoostStat::Spe => self.spe,
            BoostStat::Accuracy => self.accuracy,
            BoostStat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: BoostStat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            BoostStat::Atk => self.atk = clamped,
            BoostStat::Def => self.def = clamped,
            BoostStat::Spa => self.spa = clamped,
            BoostStat::Spd => self.spd = clamped,
            BoostStat::Spe => self.spe = clamped,
            BoostStat::Accuracy => self.accuracy = clamped,
            BoostStat::Evasion => self.evasion = clamped,
        }
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: BoostStat, amount: i8) -> i8 {
        let current = self.get(stat);
        let new_value = current.saturating_add(amount).clamp(-6, 6);
        self.set(stat, new_value);
        new_value - current
    }

    /// Apply an unboost (negative boost) to a stat, returns actual change applied
    pub fn unboost(&mut self, stat: BoostStat, amount: i8) -> i8 {
        self.boost(stat, amount.saturating_neg())
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Multiplier for a stage, read from [`STAGE_MULTIPLIERS`]
    pub fn multiplier(stage: i8) -> f64 {
        STAGE_MULTIPLIERS[(stage.clamp(-6, 6) + 6) as usize]
    }

    /// Multiplier currently applied to a permanent stat (1.0 for HP)
    pub fn stat_multiplier(&self, stat: Stat) -> f64 {
        match boost_stat(stat) {
            Some(boost) => Self::multiplier(self.get(boost)),
            None => 1.0,
        }
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

fn boost_stat(stat: Stat) -> Option<BoostStat> {
    match stat {
        Stat::Hp => None,
        Stat::Atk => Some(BoostStat::Atk),
        Stat::Def => Some(BoostStat::Def),
        Stat::Spa => Some(BoostStat::Spa),
        Stat::Spd => Some(BoostStat::Spd),
        Stat::Spe => Some(BoostStat::Spe),
    }
}

/// Worst-case value of a non-HP stat: max IVs, 252 EVs, neutral nature
pub fn estimate_stat(base: u32, level: u8) -> u32 {
    (2 * base + MAX_IV + ASSUMED_EVS / 4) * level as u32 / 100 + 5
}

/// Worst-case max HP: max IVs, 252 EVs
pub fn estimate_hp(base: u32, level: u8) -> u32 {
    (2 * base + MAX_IV + ASSUMED_EVS / 4) * level as u32 / 100 + level as u32 + 10
}
