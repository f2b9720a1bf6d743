//! Tunable constants of the heuristic selector

use serde::{Deserialize, Serialize};

/// Heuristic weights
///
/// Every field has a default, so a JSON object only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Per opposing Pokemon that could still switch into a hazard
    pub hazard_setting_weight: f64,
    /// Weights of our own hazards when scoring a removal move
    pub removal_stealth_rock_weight: f64,
    pub removal_sticky_web_weight: f64,
    pub removal_spikes_weight: f64,
    pub removal_toxic_spikes_weight: f64,
    /// Poison and most non-volatile status moves
    pub status_score: f64,
    /// Paralysis when we are not clearly faster, burn on a physical attacker,
    /// and sleep
    pub strong_status_score: f64,
    /// Burn on anything else
    pub weak_status_score: f64,
    /// Base speed margin under which paralysis is worth more
    pub speed_tier_threshold: i64,
    /// Base atk minus base spa above which a target counts as physical
    pub physical_attacker_threshold: i64,
    /// Score reported when locked into a single move
    pub locked_move_score: f64,
    /// Divisor per layer of Spikes or Toxic Spikes, and for Sticky Web
    pub hazard_layer_divisor: f64,
    /// Factor for a Poison type absorbing Toxic Spikes
    pub toxic_spikes_absorb_factor: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            hazard_setting_weight: 50.0,
            removal_stealth_rock_weight: 25.0,
            removal_sticky_web_weight: 15.0,
            removal_spikes_weight: 15.0,
            removal_toxic_spikes_weight: 15.0,
            status_score: 100.0,
            strong_status_score: 200.0,
            weak_status_score: 60.0,
            speed_tier_threshold: 10,
            physical_attacker_threshold: 10,
            locked_move_score: 100.0,
            hazard_layer_divisor: 1.25,
            toxic_spikes_absorb_factor: 2.0,
        }
    }
}

impl SelectorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
