//! Non-volatile status moves

use geniusect_dex::{MoveData, Type};

use crate::ai::SelectorConfig;
use crate::tracking::Battle;
use crate::types::{Pokemon, Status};

const POISON_MOVES: [&str; 2] = ["toxic", "poisonpowder"];
const PARALYSIS_MOVES: [&str; 3] = ["thunderwave", "stunspore", "glare"];
const BURN_MOVES: [&str; 1] = ["willowisp"];
const SLEEP_MOVES: [&str; 7] = [
    "spore",
    "darkvoid",
    "sleeppowder",
    "sing",
    "grasswhistle",
    "hypnosis",
    "lovelykiss",
];

/// Sleep moves Grass types are immune to
const POWDER_SLEEP_MOVES: [&str; 2] = ["spore", "sleeppowder"];

/// Whether this move's only purpose is a non-volatile status
pub fn is_status_move(id: &str) -> bool {
    POISON_MOVES.contains(&id)
        || PARALYSIS_MOVES.contains(&id)
        || BURN_MOVES.contains(&id)
        || SLEEP_MOVES.contains(&id)
}

/// Fixed value of inflicting a status on a healthy target
pub fn score_status(
    config: &SelectorConfig,
    battle: &Battle,
    move_data: &MoveData,
    attacker: &Pokemon,
    defender: &Pokemon,
) -> f64 {
    let id = move_data.id.as_str();

    if defender.substitute || defender.abilities.contains("synchronize") {
        return 0.0;
    }

    if POISON_MOVES.contains(&id) {
        if defender.has_type(Type::Poison) || defender.has_type(Type::Steel) {
            return 0.0;
        }
        return config.status_score;
    }

    if PARALYSIS_MOVES.contains(&id) {
        if defender.has_type(Type::Electric) || defender.has_type(Type::Ground) {
            return 0.0;
        }
        let speed_gap = attacker.base_stats.spe as i64 - defender.base_stats.spe as i64;
        if speed_gap < config.speed_tier_threshold {
            return config.strong_status_score;
        }
        return config.status_score;
    }

    if BURN_MOVES.contains(&id) {
        if defender.has_type(Type::Fire) {
            return 0.0;
        }
        let physical_bias = defender.base_stats.atk as i64 - defender.base_stats.spa as i64;
        if physical_bias > config.physical_attacker_threshold {
            return config.strong_status_score;
        }
        return config.weak_status_score;
    }

    // Sleep clause: one sleeping Pokemon per side at a time
    if battle.team(defender.seat).any_status(Status::Asleep) {
        return 0.0;
    }
    if POWDER_SLEEP_MOVES.contains(&id) && defender.has_type(Type::Grass) {
        return 0.0;
    }
    if defender.abilities.contains("vitalspirit") || defender.abilities.contains("insomnia") {
        return 0.0;
    }
    config.strong_status_score
}
