//! Deterministic damage estimate for one move use
//!
//! No random roll, critical hit or multi-hit variance; the selector reasons
//! about one expected outcome.

use geniusect_dex::{FixedDamage, MoveCategory, MoveData, Stat};

use super::effectiveness::effectiveness_against;
use super::modifiers::{ability_modifier, burn_modifier, item_modifier, side_modifier, stab_modifier};
use crate::context::BattleContext;
use crate::hooks::BattleEvent;
use crate::tracking::Battle;
use crate::types::Pokemon;

/// Estimated damage of `move_data` used by `attacker` on `defender`
///
/// Returns `None` for moves that deal no direct damage. Fixed-damage moves
/// deal their fixed amount and one-hit KO moves the defender's remaining HP,
/// both zeroed by a type immunity.
pub fn damage(
    ctx: &BattleContext,
    battle: &Battle,
    attacker: &Pokemon,
    defender: &Pokemon,
    move_data: &MoveData,
) -> Option<u32> {
    let chart = ctx.dex().type_chart();
    let effectiveness = effectiveness_against(chart, move_data.move_type, defender);

    if let Some(fixed) = move_data.damage {
        if effectiveness == 0.0 {
            return Some(0);
        }
        return Some(match fixed {
            FixedDamage::Level => attacker.level as u32,
            FixedDamage::Amount(amount) => amount,
        });
    }

    if move_data.ohko {
        if effectiveness == 0.0 {
            return Some(0);
        }
        return Some(defender.estimated_hp() as u32);
    }

    if move_data.category == MoveCategory::Status || move_data.base_power == 0 {
        return None;
    }

    let (attack_stat, defense_stat) = stat_pair(move_data);
    let attack = if move_data.ignore_offensive {
        attacker.stat(attack_stat) as f64
    } else {
        attacker.boosted_stat(attack_stat)
    };
    let defense = if move_data.ignore_defensive {
        defender.stat(defense_stat) as f64
    } else {
        defender.boosted_stat(defense_stat)
    };

    let modifiers = stab_modifier(move_data, attacker)
        * effectiveness
        * burn_modifier(move_data, attacker)
        * item_modifier(chart, move_data, attacker, defender)
        * ability_modifier(chart, move_data, attacker, defender)
        * side_modifier(move_data, battle.team(defender.seat));

    let modifiers = ctx.hooks.run_event(
        &BattleEvent::ModifyDamage {
            attacker,
            defender,
            move_data,
        },
        modifiers,
    );

    let base = base_damage(attacker.level, attack, defense, move_data.base_power);
    Some((base * modifiers).floor().max(0.0) as u32)
}

/// `floor(((0.4 * level + 2) * (atk / def) * power) / 50 + 2)`
pub fn base_damage(level: u8, attack: f64, defense: f64, power: u32) -> f64 {
    let defense = defense.max(1.0);
    (((0.4 * level as f64 + 2.0) * (attack / defense) * power as f64) / 50.0 + 2.0).floor()
}

/// Offensive stat from the move's category, defensive stat from its
/// defensive category (Psyshock hits Def)
fn stat_pair(move_data: &MoveData) -> (Stat, Stat) {
    let attack = match move_data.category {
        MoveCategory::Special => Stat::Spa,
        _ => Stat::Atk,
    };
    let defense = match move_data.defensive_category() {
        MoveCategory::Special => Stat::Spd,
        _ => Stat::Def,
    };
    (attack, defense)
}
