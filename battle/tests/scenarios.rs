//! Selector behavior on hand-built battle states

mod common;

use assert_matches::assert_matches;
use common::{battle, context};
use geniusect_battle::ai::{accuracy, best_switch, score_move, score_switch};
use geniusect_battle::calc::{damage, type_effectiveness};
use geniusect_battle::types::StatStages;
use geniusect_battle::{Decision, Move, Seat, SideCondition, Status, choose_action};
use geniusect_dex::{Stat, Type};
use geniusect_protocol::BoostStat;

fn close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_double_resistance_quarters() {
    let ctx = context();
    let battle = battle(&ctx, &[("Volcarona", &[])], &[("Skarmory", &[])]);
    let chart = ctx.dex().type_chart();

    let volcarona = battle.active(Seat::P1).unwrap();
    close(type_effectiveness(chart, Type::Grass, &volcarona.types), 0.25);
    close(type_effectiveness(chart, Type::Rock, &volcarona.types), 4.0);

    let skarmory = battle.active(Seat::P2).unwrap();
    close(type_effectiveness(chart, Type::Ground, &skarmory.types), 0.0);
}

#[test]
fn test_damage_is_deterministic() {
    let ctx = context();
    let battle = battle(&ctx, &[("Garchomp", &["earthquake"])], &[("Pikachu", &[])]);
    let garchomp = battle.active(Seat::P1).unwrap();
    let pikachu = battle.active(Seat::P2).unwrap();
    let earthquake = &garchomp.moves[0].data;

    let first = damage(&ctx, &battle, garchomp, pikachu, earthquake);
    assert_matches!(first, Some(dealt) if dealt > 0);
    for _ in 0..10 {
        assert_eq!(damage(&ctx, &battle, garchomp, pikachu, earthquake), first);
    }
}

#[test]
fn test_fainted_overrides_every_status() {
    let ctx = context();
    let statuses = [
        Status::Healthy,
        Status::Burned,
        Status::Frozen,
        Status::Paralyzed,
        Status::Poisoned,
        Status::Toxic,
        Status::Asleep,
    ];
    for status in statuses {
        let mut battle = battle(&ctx, &[("Pikachu", &[])], &[("Garchomp", &[])]);
        let pikachu = battle.active_mut(Seat::P1).unwrap();
        pikachu.set_status(status);
        pikachu.apply_condition("0 fnt");

        assert_eq!(pikachu.status, Status::Fainted, "from {status}");
        assert_eq!(pikachu.hp_fraction(), 0.0);

        pikachu.set_status(Status::Burned);
        assert_eq!(pikachu.status, Status::Fainted);
    }
}

#[test]
fn test_boosts_clamp_at_six() {
    let mut stages = StatStages::new();
    assert_eq!(stages.boost(BoostStat::Atk, 5), 5);
    assert_eq!(stages.boost(BoostStat::Atk, 7), 1);
    assert_eq!(stages.get(BoostStat::Atk), 6);
    close(stages.stat_multiplier(Stat::Atk), 4.0);

    assert_eq!(stages.unboost(BoostStat::Spe, 9), -6);
    close(stages.stat_multiplier(Stat::Spe), 0.25);
}

#[test]
fn test_hazard_layers_cap() {
    let ctx = context();
    let mut battle = battle(&ctx, &[("Pikachu", &[])], &[("Garchomp", &[])]);
    let hazards = &mut battle.bot_team_mut().hazards;

    for _ in 0..3 {
        assert!(hazards.add(SideCondition::Spikes));
    }
    assert!(!hazards.add(SideCondition::Spikes));
    assert!(hazards.add(SideCondition::ToxicSpikes));
    assert!(hazards.add(SideCondition::ToxicSpikes));
    assert!(!hazards.add(SideCondition::ToxicSpikes));
    assert!(hazards.add(SideCondition::StealthRock));
    assert!(!hazards.add(SideCondition::StealthRock));

    assert_eq!(hazards.spikes, 3);
    assert_eq!(hazards.toxic_spikes, 2);
    assert_eq!(hazards.stealth_rock, 1);
}

#[test]
fn test_switching_into_a_knockout_scores_zero() {
    let ctx = context();
    let battle = battle(
        &ctx,
        &[("Skarmory", &["defog"]), ("Pikachu", &["thunderbolt"])],
        &[("Garchomp", &["earthquake"])],
    );
    let garchomp = battle.active(Seat::P2).unwrap();
    let pikachu = battle.bot_team().get(1).unwrap();

    assert_eq!(score_switch(&ctx, &battle, garchomp, pikachu, false), 0.0);
    assert_eq!(best_switch(&ctx, &battle), Some((1, 0.0)));
}

#[test]
fn test_stealth_rock_quarters_volcarona() {
    let ctx = context();
    let mut battle = battle(
        &ctx,
        &[("Pikachu", &["thunderbolt"]), ("Volcarona", &["flamethrower"])],
        &[("Pikachu", &["thunderbolt"])],
    );
    battle.bot_team_mut().hazards.add(SideCondition::StealthRock);

    let attacker = battle.active(Seat::P2).unwrap();
    let volcarona = battle.bot_team().get(1).unwrap();
    let raw = score_switch(&ctx, &battle, attacker, volcarona, false);
    assert!(raw > 0.0);

    let (index, score) = best_switch(&ctx, &battle).unwrap();
    assert_eq!(index, 1);
    close(score, raw / 4.0);
}

#[test]
fn test_never_missing_moves_edge_out_perfect_accuracy() {
    let ctx = context();
    let battle = battle(&ctx, &[("Garchomp", &[])], &[("Pikachu", &[])]);
    let garchomp = battle.active(Seat::P1).unwrap();
    let pikachu = battle.active(Seat::P2).unwrap();

    let aerial_ace = Move::from_dex(ctx.dex(), "aerialace").unwrap();
    let earthquake = Move::from_dex(ctx.dex(), "earthquake").unwrap();
    let stone_edge = Move::from_dex(ctx.dex(), "stoneedge").unwrap();

    close(accuracy(&ctx, &aerial_ace.data, garchomp, pikachu), 1.01);
    close(accuracy(&ctx, &earthquake.data, garchomp, pikachu), 1.0);
    close(accuracy(&ctx, &stone_edge.data, garchomp, pikachu), 0.8);
}

#[test]
fn test_hazard_value_counts_remaining_switch_ins() {
    let ctx = context();
    let mut battle = battle(
        &ctx,
        &[("Garchomp", &["stealthrock", "earthquake"])],
        &[("Pikachu", &["thunderbolt"]), ("Volcarona", &["bugbuzz"])],
    );
    battle.opponent_team_mut().hazards.add(SideCondition::StealthRock);

    let garchomp = battle.active(Seat::P1).unwrap();
    let pikachu = battle.active(Seat::P2).unwrap();
    let stealth_rock = Move::from_dex(ctx.dex(), "stealthrock").unwrap();
    let spikes = Move::from_dex(ctx.dex(), "spikes").unwrap();

    assert_eq!(score_move(&ctx, &battle, &stealth_rock, garchomp, pikachu), 0.0);

    // Volcarona on the bench plus four Pokemon not yet revealed
    let expected = ctx.config.hazard_setting_weight * 5.0 * 1.01;
    close(score_move(&ctx, &battle, &spikes, garchomp, pikachu), expected);
}

#[test]
fn test_earthquake_when_rocks_are_up() {
    let ctx = context();
    let mut battle = battle(
        &ctx,
        &[("Garchomp", &["stealthrock", "earthquake"]), ("Skarmory", &["defog"])],
        &[("Pikachu", &["thunderbolt"])],
    );
    battle.opponent_team_mut().hazards.add(SideCondition::StealthRock);

    assert_matches!(
        choose_action(&ctx, &battle),
        Ok(Decision::Move { slot: 2, .. })
    );
}
