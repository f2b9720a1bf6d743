//! Switch scoring: a two-ply exchange estimate per bench member

use geniusect_dex::{Stat, Type};

use super::moves::best_move_against;
use crate::ai::SelectorConfig;
use crate::calc::{effectiveness_against, type_effectiveness};
use crate::context::BattleContext;
use crate::tracking::Battle;
use crate::types::{EntryHazards, Pokemon};

/// Outcome of an exchange between the opposing `attacker` and our
/// `candidate` switching in
///
/// On a voluntary switch the candidate takes a hit on entry first; a
/// candidate that would not survive that hit scores exactly 0. Otherwise the
/// score is the candidate's remaining HP percentage minus the attacker's,
/// or the candidate's damage outright when it outspeeds and KOs.
pub fn score_switch(
    ctx: &BattleContext,
    battle: &Battle,
    attacker: &Pokemon,
    candidate: &Pokemon,
    forced: bool,
) -> f64 {
    let (incoming, _) = best_move_against(ctx, battle, attacker, candidate);
    let mut candidate_hp = candidate.estimated_hp();

    if !forced {
        candidate_hp -= incoming;
        if candidate_hp <= 0.0 {
            tracing::debug!(
                candidate = candidate.name.as_str(),
                attacker = attacker.name.as_str(),
                incoming,
                "switch-in would not survive entry"
            );
            return 0.0;
        }
    }

    let (outgoing, _) = best_move_against(ctx, battle, candidate, attacker);
    let mut attacker_hp = attacker.estimated_hp() - outgoing;

    let candidate_faster = candidate.boosted_stat(Stat::Spe) > attacker.boosted_stat(Stat::Spe);
    if attacker_hp <= 0.0 && candidate_faster {
        return outgoing;
    }

    candidate_hp -= incoming;
    if candidate_hp <= 0.0 {
        // Knocked out before it can act
        attacker_hp += outgoing;
    }

    let candidate_percent = candidate_hp / candidate.stat(Stat::Hp).max(1) as f64 * 100.0;
    let attacker_percent = attacker_hp / attacker.stat(Stat::Hp).max(1) as f64 * 100.0;
    candidate_percent - attacker_percent
}

/// Scale a switch score by the entry hazards waiting on our side
///
/// Stealth Rock divides by the candidate's Rock effectiveness. Grounded
/// candidates are further divided per layer of Spikes and for Sticky Web;
/// Toxic Spikes divide per layer unless the candidate is a Poison type,
/// which absorbs them and doubles the score instead.
pub fn hazard_adjusted(
    ctx: &BattleContext,
    hazards: &EntryHazards,
    candidate: &Pokemon,
    score: f64,
) -> f64 {
    let chart = ctx.dex().type_chart();
    let config: &SelectorConfig = &ctx.config;
    let mut score = score;

    if hazards.stealth_rock > 0 {
        let rock = type_effectiveness(chart, Type::Rock, &candidate.types);
        if rock > 0.0 {
            score /= rock;
        }
    }

    if effectiveness_against(chart, Type::Ground, candidate) > 0.0 {
        if hazards.spikes > 0 {
            score /= hazards.spikes as f64 * config.hazard_layer_divisor;
        }
        if hazards.sticky_web > 0 {
            score /= config.hazard_layer_divisor;
        }
        if hazards.toxic_spikes > 0 {
            if candidate.has_type(Type::Poison) {
                score *= config.toxic_spikes_absorb_factor;
            } else if type_effectiveness(chart, Type::Poison, &candidate.types) > 0.0 {
                score /= hazards.toxic_spikes as f64 * config.hazard_layer_divisor;
            }
        }
    }

    score
}

/// Best bench member to switch into against the opposing active Pokemon
///
/// Returns the roster index and its score. Ties keep the earlier member.
/// `None` when trapped or when nobody can come in.
pub fn best_switch(ctx: &BattleContext, battle: &Battle) -> Option<(usize, f64)> {
    if battle.is_trapped {
        return None;
    }
    let attacker = battle.opponent_team().active()?;
    let team = battle.bot_team();

    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in team.bench() {
        let raw = score_switch(ctx, battle, attacker, candidate, battle.force_switch);
        let score = hazard_adjusted(ctx, &team.hazards, candidate, raw);
        tracing::debug!(candidate = candidate.name.as_str(), raw, score, "switch candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_close, context, pokemon};
    use crate::types::SideCondition;
    use geniusect_protocol::{BoostStat, Seat};

    fn battle_with(ctx: &BattleContext, bench: &[(&str, &[&str])], opponent: (&str, &[&str])) -> Battle {
        let mut battle = Battle::new();
        battle.set_player(Seat::P1);
        let bot = battle.team_mut(Seat::P1);
        bot.add(pokemon(ctx, Seat::P1, "Pikachu", &["thunderbolt"])).unwrap();
        for (name, moves) in bench {
            bot.add(pokemon(ctx, Seat::P1, name, moves)).unwrap();
        }
        bot.set_active(0);

        let enemy = battle.team_mut(Seat::P2);
        enemy.add(pokemon(ctx, Seat::P2, opponent.0, opponent.1)).unwrap();
        enemy.set_active(0);
        battle
    }

    #[test]
    fn test_voluntary_switch_into_ko_scores_zero() {
        let ctx = context();
        let mut battle = battle_with(&ctx, &[("Volcarona", &["bugbuzz"])], ("Garchomp", &["stoneedge"]));
        battle.team_mut(Seat::P1).get_mut(1).unwrap().apply_condition("10/100");

        let attacker = battle.active(Seat::P2).unwrap();
        let candidate = battle.bot_team().get(1).unwrap();
        assert_eq!(score_switch(&ctx, &battle, attacker, candidate, false), 0.0);
        // A forced switch skips the entry hit
        assert_ne!(score_switch(&ctx, &battle, attacker, candidate, true), 0.0);
    }

    #[test]
    fn test_faster_ko_returns_damage() {
        let ctx = context();
        let mut battle = battle_with(&ctx, &[("Garchomp", &["earthquake"])], ("Pikachu", &["thunderbolt"]));
        battle.active_mut(Seat::P2).unwrap().apply_condition("5/100");

        let attacker = battle.active(Seat::P2).unwrap();
        let candidate = battle.bot_team().get(1).unwrap();
        let (outgoing, _) = best_move_against(&ctx, &battle, candidate, attacker);
        assert!(candidate.boosted_stat(Stat::Spe) > attacker.boosted_stat(Stat::Spe));
        assert_eq!(score_switch(&ctx, &battle, attacker, candidate, false), outgoing);

        // Once Pikachu is faster, Garchomp only gets the exchange delta
        let mut fast = attacker.clone();
        fast.boosts.boost(BoostStat::Spe, 2);
        let score = score_switch(&ctx, &battle, &fast, candidate, false);
        assert_ne!(score, outgoing);
        assert!(score > 0.0);
    }

    #[test]
    fn test_exchange_delta() {
        let ctx = context();
        let battle = battle_with(&ctx, &[("Skarmory", &["defog"])], ("Pikachu", &["thunderbolt"]));
        let attacker = battle.active(Seat::P2).unwrap();
        let candidate = battle.bot_team().get(1).unwrap();
        // Skarmory deals nothing back and takes Thunderbolt twice
        let (incoming, _) = best_move_against(&ctx, &battle, attacker, candidate);
        let hp = candidate.estimated_hp();
        let expected = (hp - 2.0 * incoming) / candidate.stat(Stat::Hp) as f64 * 100.0 - 100.0;
        assert_close(score_switch(&ctx, &battle, attacker, candidate, false), expected);
    }

    #[test]
    fn test_stealth_rock_divides_by_rock_effectiveness() {
        let ctx = context();
        let volcarona = pokemon(&ctx, Seat::P1, "Volcarona", &["bugbuzz"]);
        let mut hazards = EntryHazards::default();
        assert_eq!(hazard_adjusted(&ctx, &hazards, &volcarona, 80.0), 80.0);

        hazards.add(SideCondition::StealthRock);
        assert_eq!(hazard_adjusted(&ctx, &hazards, &volcarona, 80.0), 20.0);
    }

    #[test]
    fn test_ground_hazards_skip_airborne() {
        let ctx = context();
        let skarmory = pokemon(&ctx, Seat::P1, "Skarmory", &["defog"]);
        let garchomp = pokemon(&ctx, Seat::P1, "Garchomp", &["earthquake"]);
        let mut hazards = EntryHazards::default();
        hazards.add(SideCondition::Spikes);
        hazards.add(SideCondition::Spikes);

        assert_eq!(hazard_adjusted(&ctx, &hazards, &skarmory, 50.0), 50.0);
        assert_eq!(hazard_adjusted(&ctx, &hazards, &garchomp, 50.0), 20.0);

        hazards.add(SideCondition::StickyWeb);
        assert_eq!(hazard_adjusted(&ctx, &hazards, &garchomp, 50.0), 16.0);
    }

    #[test]
    fn test_toxic_spikes() {
        let ctx = context();
        let gengar = pokemon(&ctx, Seat::P1, "Gengar", &["shadowball"]);
        let garchomp = pokemon(&ctx, Seat::P1, "Garchomp", &["earthquake"]);
        let mut hazards = EntryHazards::default();
        hazards.add(SideCondition::ToxicSpikes);

        // Gengar is Poison and grounded, so it absorbs them
        assert_eq!(hazard_adjusted(&ctx, &hazards, &gengar, 30.0), 60.0);
        assert_eq!(hazard_adjusted(&ctx, &hazards, &garchomp, 30.0), 24.0);
    }

    #[test]
    fn test_best_switch_skips_active_and_fainted() {
        let ctx = context();
        let mut battle = battle_with(
            &ctx,
            &[("Gengar", &["shadowball"]), ("Skarmory", &["defog"])],
            ("Garchomp", &["earthquake"]),
        );
        battle.team_mut(Seat::P1).get_mut(1).unwrap().apply_condition("0 fnt");

        let (index, _) = best_switch(&ctx, &battle).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_best_switch_none_when_trapped_or_empty() {
        let ctx = context();
        let mut battle = battle_with(&ctx, &[("Skarmory", &["defog"])], ("Garchomp", &["earthquake"]));
        battle.is_trapped = true;
        assert_eq!(best_switch(&ctx, &battle), None);

        battle.is_trapped = false;
        battle.team_mut(Seat::P1).get_mut(1).unwrap().apply_condition("0 fnt");
        assert_eq!(best_switch(&ctx, &battle), None);
    }

    #[test]
    fn test_best_switch_ties_keep_roster_order() {
        let ctx = context();
        let battle = battle_with(
            &ctx,
            &[("Skarmory", &["defog"]), ("Skarmory", &["defog"])],
            ("Garchomp", &["earthquake"]),
        );
        let (index, _) = best_switch(&ctx, &battle).unwrap();
        assert_eq!(index, 1);
    }
}
