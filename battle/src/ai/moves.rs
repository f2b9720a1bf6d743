//! Move scoring

use geniusect_dex::{MoveData, MoveFlag};

use super::status::{is_status_move, score_status};
use crate::calc::damage;
use crate::context::BattleContext;
use crate::hooks::BattleEvent;
use crate::tracking::Battle;
use crate::types::{Move, Pokemon, SideCondition, Status};

/// Moves that set an entry hazard on the target's side
pub fn hazard_for_move(id: &str) -> Option<SideCondition> {
    match id {
        "stealthrock" => Some(SideCondition::StealthRock),
        "spikes" => Some(SideCondition::Spikes),
        "toxicspikes" => Some(SideCondition::ToxicSpikes),
        "stickyweb" => Some(SideCondition::StickyWeb),
        _ => None,
    }
}

/// Moves that clear hazards from the user's side
pub fn is_hazard_removal(id: &str) -> bool {
    matches!(id, "defog" | "rapidspin")
}

/// Value of one move against `defender`, already weighted by accuracy
///
/// Unusable moves (no PP, disabled) score nothing.
pub fn score_move(
    ctx: &BattleContext,
    battle: &Battle,
    mv: &Move,
    attacker: &Pokemon,
    defender: &Pokemon,
) -> f64 {
    if !mv.is_usable() {
        return 0.0;
    }
    let move_data = &mv.data;
    let id = move_data.id.as_str();

    if move_data.has_flag(MoveFlag::Reflectable) && defender.abilities.contains("magicbounce") {
        return 0.0;
    }

    let accuracy = accuracy(ctx, move_data, attacker, defender);

    let weight = if let Some(hazard) = hazard_for_move(id) {
        hazard_setting_score(ctx, battle, hazard, defender)
    } else if is_hazard_removal(id) {
        let weight = hazard_removal_score(ctx, battle, attacker);
        match damage(ctx, battle, attacker, defender, move_data) {
            Some(dealt) => weight * dealt as f64,
            None => weight,
        }
    } else if is_status_move(id) && defender.status == Status::Healthy {
        score_status(&ctx.config, battle, move_data, attacker, defender)
    } else {
        damage(ctx, battle, attacker, defender, move_data).unwrap_or(0) as f64
    };

    weight * accuracy
}

/// Hit chance in [0, 1.01]; a move that never misses is 1.01
///
/// No Guard on the attacker counts as a candidate; on the defender only
/// once revealed.
pub fn accuracy(ctx: &BattleContext, move_data: &MoveData, attacker: &Pokemon, defender: &Pokemon) -> f64 {
    let accuracy = if attacker.abilities.contains("noguard") || defender.abilities.known() == Some("noguard") {
        1.0
    } else {
        move_data.accuracy as f64 / 100.0
    };

    ctx.hooks.run_event(
        &BattleEvent::ModifyAccuracy {
            attacker,
            defender,
            move_data,
        },
        accuracy,
    )
}

/// Weight per opposing Pokemon that could still switch into the hazard;
/// zero once the hazard is at its cap
pub fn hazard_setting_score(
    ctx: &BattleContext,
    battle: &Battle,
    hazard: SideCondition,
    defender: &Pokemon,
) -> f64 {
    let side = battle.team(defender.seat);
    let valid = side.switchable_count() + side.unseen_count();
    if valid == 0 || side.hazards.is_capped(hazard) {
        return 0.0;
    }
    ctx.config.hazard_setting_weight * valid as f64
}

/// Weighted hazards on our own side, times the teammates that would
/// benefit
pub fn hazard_removal_score(ctx: &BattleContext, battle: &Battle, user: &Pokemon) -> f64 {
    let side = battle.team(user.seat);
    let hazards = &side.hazards;
    let config = &ctx.config;

    let weight = hazards.stealth_rock as f64 * config.removal_stealth_rock_weight
        + hazards.sticky_web as f64 * config.removal_sticky_web_weight
        + hazards.spikes as f64 * config.removal_spikes_weight
        + hazards.toxic_spikes as f64 * config.removal_toxic_spikes_weight;

    side.switchable_count() as f64 * weight
}

/// Highest score among `attacker`'s usable moves, and the index of that
/// move; `None` when no move scores above zero
pub fn best_move_against(
    ctx: &BattleContext,
    battle: &Battle,
    attacker: &Pokemon,
    defender: &Pokemon,
) -> (f64, Option<usize>) {
    let mut best = (0.0, None);
    for (index, mv) in attacker.moves.iter().enumerate() {
        let score = score_move(ctx, battle, mv, attacker, defender);
        if score > best.0 {
            best = (score, Some(index));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_close, context, pokemon};
    use geniusect_protocol::Seat;

    fn setup() -> (BattleContext, Battle) {
        let ctx = context();
        let mut battle = Battle::new();
        battle.set_player(Seat::P1);

        let bot = battle.team_mut(Seat::P1);
        bot.add(pokemon(&ctx, Seat::P1, "Garchomp", &["stealthrock", "spikes", "earthquake", "rapidspin"]))
            .unwrap();
        bot.add(pokemon(&ctx, Seat::P1, "Skarmory", &["defog"])).unwrap();
        bot.set_active(0);

        let opponent = battle.team_mut(Seat::P2);
        opponent.add(pokemon(&ctx, Seat::P2, "Pikachu", &["thunderbolt"])).unwrap();
        opponent.set_active(0);
        (ctx, battle)
    }

    fn score_of(ctx: &BattleContext, battle: &Battle, id: &str) -> f64 {
        let attacker = battle.active(Seat::P1).unwrap();
        let defender = battle.active(Seat::P2).unwrap();
        let mv = attacker.find_move(id).unwrap();
        score_move(ctx, battle, mv, attacker, defender)
    }

    #[test]
    fn test_hazard_counts_possible_switch_ins() {
        let (ctx, battle) = setup();
        // Five unseen opposing Pokemon, and Spikes never misses
        assert_close(score_of(&ctx, &battle, "spikes"), 250.0 * 1.01);
    }

    #[test]
    fn test_capped_hazard_scores_zero() {
        let (ctx, mut battle) = setup();
        battle.team_mut(Seat::P2).add_condition(SideCondition::StealthRock);
        assert_eq!(score_of(&ctx, &battle, "stealthrock"), 0.0);
        assert!(score_of(&ctx, &battle, "spikes") > 0.0);

        for _ in 0..3 {
            battle.team_mut(Seat::P2).add_condition(SideCondition::Spikes);
        }
        assert_eq!(score_of(&ctx, &battle, "spikes"), 0.0);
    }

    #[test]
    fn test_hazard_without_targets() {
        let (ctx, mut battle) = setup();
        battle.team_mut(Seat::P2).team_size = 1;
        assert_eq!(score_of(&ctx, &battle, "stealthrock"), 0.0);
    }

    #[test]
    fn test_removal_weights_own_hazards() {
        let (ctx, mut battle) = setup();
        let skarmory_index = 1;
        battle.team_mut(Seat::P1).set_active(skarmory_index);
        assert_eq!(score_of(&ctx, &battle, "defog"), 0.0);

        let side = battle.team_mut(Seat::P1);
        side.add_condition(SideCondition::StealthRock);
        side.add_condition(SideCondition::Spikes);
        side.add_condition(SideCondition::Spikes);
        // One switchable teammate: 25 + 2 * 15
        assert_close(score_of(&ctx, &battle, "defog"), 55.0 * 1.01);
    }

    #[test]
    fn test_rapid_spin_scales_by_damage() {
        let (ctx, mut battle) = setup();
        battle.team_mut(Seat::P1).add_condition(SideCondition::StealthRock);
        let attacker = battle.active(Seat::P1).unwrap();
        let defender = battle.active(Seat::P2).unwrap();
        let spin = &attacker.find_move("rapidspin").unwrap().data;
        let dealt = damage(&ctx, &battle, attacker, defender, spin).unwrap() as f64;
        assert!(dealt > 0.0);
        assert_eq!(score_of(&ctx, &battle, "rapidspin"), 25.0 * dealt);
    }

    #[test]
    fn test_rapid_spin_blocked_by_ghost() {
        let (ctx, mut battle) = setup();
        battle.team_mut(Seat::P1).add_condition(SideCondition::StealthRock);
        let gengar = pokemon(&ctx, Seat::P2, "Gengar", &["shadowball"]);
        let opponent = battle.team_mut(Seat::P2);
        opponent.add(gengar).unwrap();
        opponent.set_active(1);
        assert_eq!(score_of(&ctx, &battle, "rapidspin"), 0.0);
    }

    #[test]
    fn test_accuracy_true_scores_above_one() {
        let ctx = context();
        let attacker = pokemon(&ctx, Seat::P1, "Gengar", &["shadowball"]);
        let defender = pokemon(&ctx, Seat::P2, "Pikachu", &[]);
        let aerial_ace = ctx.dex().lookup_move("aerialace").unwrap();
        assert_eq!(accuracy(&ctx, aerial_ace, &attacker, &defender), 1.01);

        let shadow_ball = ctx.dex().lookup_move("shadowball").unwrap();
        assert_eq!(accuracy(&ctx, shadow_ball, &attacker, &defender), 1.0);
    }

    #[test]
    fn test_no_guard() {
        let ctx = context();
        let mut attacker = pokemon(&ctx, Seat::P1, "Gengar", &["shadowball"]);
        let mut defender = pokemon(&ctx, Seat::P2, "Pikachu", &[]);
        let stone_edge = ctx.dex().lookup_move("stoneedge").unwrap();
        assert_eq!(accuracy(&ctx, stone_edge, &attacker, &defender), 0.8);

        defender.abilities.narrow("noguard");
        assert_eq!(accuracy(&ctx, stone_edge, &attacker, &defender), 1.0);

        defender.abilities.narrow("static");
        attacker.abilities.narrow("noguard");
        assert_eq!(accuracy(&ctx, stone_edge, &attacker, &defender), 1.0);
    }

    #[test]
    fn test_magic_bounce_reflects() {
        let (ctx, mut battle) = setup();
        let mut xatu = pokemon(&ctx, Seat::P2, "Pikachu", &[]);
        xatu.abilities = crate::types::AbilitySet::candidates(["synchronize", "earlybird", "magicbounce"]);
        let opponent = battle.team_mut(Seat::P2);
        opponent.replace_members(vec![xatu]).unwrap();
        opponent.set_active(0);
        assert_eq!(score_of(&ctx, &battle, "stealthrock"), 0.0);
    }

    #[test]
    fn test_disabled_move_scores_zero() {
        let (ctx, mut battle) = setup();
        battle.active_mut(Seat::P1).unwrap().cant_use_move("earthquake");
        assert_eq!(score_of(&ctx, &battle, "earthquake"), 0.0);
    }

    #[test]
    fn test_best_move_against() {
        let (ctx, battle) = setup();
        let attacker = battle.active(Seat::P1).unwrap();
        let defender = battle.active(Seat::P2).unwrap();
        let (score, index) = best_move_against(&ctx, &battle, attacker, defender);
        // Earthquake into Pikachu outscores five targets worth of hazards
        assert_eq!(index, attacker.moves.iter().position(|m| m.id() == "earthquake"));
        assert!(score > 252.5);
    }
}
