//! Per-turn action choice

use super::decision::{Decision, DecisionState};
use super::moves::score_move;
use super::switch::best_switch;
use crate::context::BattleContext;
use crate::error::{BattleError, Result};
use crate::tracking::Battle;

/// Decision state for the current request
pub fn decision_state(battle: &Battle) -> DecisionState {
    if battle.force_switch {
        DecisionState::ForcedSwitch
    } else if battle.is_locked_into_move() {
        DecisionState::MustMove
    } else {
        DecisionState::Normal
    }
}

/// Best usable move of our active Pokemon: 1-based slot and score
///
/// Ties keep the earlier slot.
pub fn best_move(ctx: &BattleContext, battle: &Battle) -> Result<Option<(u8, f64)>> {
    let seat = battle.player_id;
    let attacker = battle.active(seat).ok_or(BattleError::NoActivePokemon(seat))?;
    let defender = battle
        .active(seat.opponent())
        .ok_or(BattleError::NoActivePokemon(seat.opponent()))?;

    let mut best: Option<(u8, f64)> = None;
    for (index, mv) in attacker.moves.iter().enumerate() {
        if !mv.is_usable() {
            tracing::debug!(r#move = mv.id(), "move unavailable");
            continue;
        }
        let score = score_move(ctx, battle, mv, attacker, defender);
        tracing::debug!(r#move = mv.id(), score, "move candidate");

        if score > best.map_or(-1.0, |(_, best_score)| best_score) {
            best = Some((index as u8 + 1, score));
        }
    }
    Ok(best)
}

/// Choose this turn's action
///
/// Attacking wins ties; a switch is only taken when it strictly outscores
/// the best move, when no move is usable, or when one is forced. A locked
/// move counts as the configured locked-move score. With a Substitute up
/// and a usable move we stay in.
pub fn choose_action(ctx: &BattleContext, battle: &Battle) -> Result<Decision> {
    let seat = battle.player_id;
    let active = battle.active(seat).ok_or(BattleError::NoActivePokemon(seat))?;
    if battle.active(seat.opponent()).is_none() {
        return Err(BattleError::NoActivePokemon(seat.opponent()));
    }
    let mega = battle.can_mega_evolve();

    let state = decision_state(battle);
    let decision = match state {
        DecisionState::ForcedSwitch => {
            let (index, score) = best_switch(ctx, battle).ok_or(BattleError::NoLegalSwitch)?;
            tracing::debug!(index, score, "forced switch");
            Decision::Switch(index as u8 + 1)
        }
        DecisionState::MustMove | DecisionState::Normal => {
            let best_move = if state == DecisionState::MustMove {
                // The request offers a single move; weigh it at a fixed score
                Some((1, ctx.config.locked_move_score))
            } else {
                best_move(ctx, battle)?
            };

            let switch = if (best_move.is_none() || !active.substitute) && !battle.is_trapped {
                best_switch(ctx, battle)
            } else {
                None
            };

            match (best_move, switch) {
                (Some((_, move_score)), Some((index, switch_score))) if move_score < switch_score => {
                    tracing::debug!(move_score, switch_score, "switch outscores best move");
                    Decision::Switch(index as u8 + 1)
                }
                (Some((slot, _)), _) => Decision::Move { slot, mega },
                (None, Some((index, _))) => Decision::Switch(index as u8 + 1),
                (None, None) if battle.is_trapped => {
                    // Nothing usable and nowhere to go; the server resolves Struggle
                    tracing::warn!("no usable move while trapped");
                    Decision::Move { slot: 1, mega: false }
                }
                (None, None) => return Err(BattleError::NoLegalSwitch),
            }
        }
    };

    tracing::info!(
        turn = battle.turn,
        ?state,
        %decision,
        active = active.name.as_str(),
        "decision"
    );
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{context, pokemon};
    use assert_matches::assert_matches;
    use geniusect_protocol::{ActivePokemon, MoveSlot, Seat};

    fn battle(bot: &[(&str, &[&str])], opponent: (&str, &[&str])) -> (BattleContext, Battle) {
        let ctx = context();
        let mut battle = Battle::new();
        battle.set_player(Seat::P1);
        let team = battle.team_mut(Seat::P1);
        for (name, moves) in bot {
            team.add(pokemon(&ctx, Seat::P1, name, moves)).unwrap();
        }
        team.set_active(0);

        let enemy = battle.team_mut(Seat::P2);
        enemy.add(pokemon(&ctx, Seat::P2, opponent.0, opponent.1)).unwrap();
        enemy.set_active(0);
        (ctx, battle)
    }

    fn slot(id: &str) -> MoveSlot {
        MoveSlot {
            name: id.to_string(),
            id: id.to_string(),
            pp: Some(10),
            max_pp: Some(16),
            target: "normal".to_string(),
            disabled: false,
        }
    }

    #[test]
    fn test_decision_state() {
        let (_, mut battle) = battle(&[("Garchomp", &["earthquake"])], ("Pikachu", &["thunderbolt"]));
        assert_eq!(decision_state(&battle), DecisionState::Normal);

        battle.current_active_move_metadata = Some(ActivePokemon {
            moves: vec![slot("outrage")],
            ..Default::default()
        });
        assert_eq!(decision_state(&battle), DecisionState::MustMove);

        battle.force_switch = true;
        assert_eq!(decision_state(&battle), DecisionState::ForcedSwitch);
    }

    #[test]
    fn test_attacks_with_best_move() {
        let (ctx, battle) = battle(
            &[("Garchomp", &["stealthrock", "earthquake"]), ("Skarmory", &["defog"])],
            ("Pikachu", &["thunderbolt"]),
        );
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 2, mega: false });
    }

    #[test]
    fn test_switches_when_outclassed() {
        // Pikachu's only move does nothing to Garchomp; Skarmory has no answer either
        let (ctx, battle) = battle(
            &[("Skarmory", &["defog"]), ("Garchomp", &["earthquake"])],
            ("Pikachu", &["thunderbolt"]),
        );
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Switch(2));
    }

    #[test]
    fn test_forced_switch() {
        let (ctx, mut battle) = battle(
            &[("Pikachu", &["thunderbolt"]), ("Garchomp", &["earthquake"])],
            ("Garchomp", &["earthquake"]),
        );
        battle.active_mut(Seat::P1).unwrap().apply_condition("0 fnt");
        battle.force_switch = true;
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Switch(2));
    }

    #[test]
    fn test_forced_switch_without_candidates() {
        let (ctx, mut battle) = battle(&[("Pikachu", &["thunderbolt"])], ("Garchomp", &["earthquake"]));
        battle.force_switch = true;
        assert_matches!(choose_action(&ctx, &battle), Err(BattleError::NoLegalSwitch));
    }

    #[test]
    fn test_locked_move_with_mega() {
        let (ctx, mut battle) = battle(&[("Garchomp", &["outrage", "earthquake"])], ("Pikachu", &["thunderbolt"]));
        battle.current_active_move_metadata = Some(ActivePokemon {
            moves: vec![slot("outrage")],
            can_mega_evo: true,
            ..Default::default()
        });
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 1, mega: true });
    }

    #[test]
    fn test_locked_move_loses_to_strong_switch() {
        let (mut ctx, mut battle) = battle(
            &[("Skarmory", &["defog"]), ("Garchomp", &["earthquake"])],
            ("Pikachu", &["thunderbolt"]),
        );
        battle.current_active_move_metadata = Some(ActivePokemon {
            moves: vec![slot("defog")],
            ..Default::default()
        });
        // Garchomp walls Thunderbolt and knocks Pikachu out first
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Switch(2));

        ctx.config.locked_move_score = 10_000.0;
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 1, mega: false });
    }

    #[test]
    fn test_substitute_stays_in() {
        let (ctx, mut battle) = battle(
            &[("Skarmory", &["defog"]), ("Garchomp", &["earthquake"])],
            ("Pikachu", &["thunderbolt"]),
        );
        battle.active_mut(Seat::P1).unwrap().substitute = true;
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 1, mega: false });
    }

    #[test]
    fn test_trapped_stays_in() {
        let (ctx, mut battle) = battle(
            &[("Skarmory", &["defog"]), ("Garchomp", &["earthquake"])],
            ("Pikachu", &["thunderbolt"]),
        );
        battle.is_trapped = true;
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 1, mega: false });
    }

    #[test]
    fn test_no_usable_moves_switches() {
        let (ctx, mut battle) = battle(
            &[("Garchomp", &["earthquake"]), ("Skarmory", &["defog"])],
            ("Pikachu", &["thunderbolt"]),
        );
        battle.active_mut(Seat::P1).unwrap().cant_use_move("earthquake");
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Switch(2));

        battle.is_trapped = true;
        assert_eq!(choose_action(&ctx, &battle).unwrap(), Decision::Move { slot: 1, mega: false });
    }

    #[test]
    fn test_missing_active() {
        let (ctx, mut battle) = battle(&[("Garchomp", &["earthquake"])], ("Pikachu", &["thunderbolt"]));
        battle.team_mut(Seat::P2).replace_members(Vec::new()).unwrap();
        assert_matches!(choose_action(&ctx, &battle), Err(BattleError::NoActivePokemon(Seat::P2)));
    }

    #[test]
    fn test_deterministic() {
        let (ctx, battle) = battle(
            &[("Garchomp", &["stealthrock", "earthquake"]), ("Volcarona", &["bugbuzz", "flamethrower"])],
            ("Skarmory", &["defog"]),
        );
        let first = choose_action(&ctx, &battle).unwrap();
        for _ in 0..5 {
            assert_eq!(choose_action(&ctx, &battle).unwrap(), first);
        }
    }
}
