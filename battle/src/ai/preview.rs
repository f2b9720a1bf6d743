//! Team preview ordering

use super::decision::Decision;
use super::moves::best_move_against;
use super::switch::score_switch;
use crate::context::BattleContext;
use crate::tracking::Battle;
use crate::types::Pokemon;

/// Factory formats hand out unfamiliar sets, so members are rated by the
/// full exchange estimate rather than raw damage
fn is_factory_format(format: &str) -> bool {
    format.to_ascii_lowercase().contains("factory")
}

/// Average rating of one of our members against the revealed opposing
/// roster; 0 while nothing is revealed
pub fn preview_score(ctx: &BattleContext, battle: &Battle, member: &Pokemon) -> f64 {
    let opponents = battle.opponent_team().members();
    if opponents.is_empty() {
        return 0.0;
    }
    let factory = is_factory_format(&battle.format);

    let total: f64 = opponents
        .iter()
        .map(|opponent| {
            if factory {
                score_switch(ctx, battle, opponent, member, false)
            } else {
                best_move_against(ctx, battle, member, opponent).0
            }
        })
        .sum();
    total / opponents.len() as f64
}

/// Order our roster by preview score, best lead first
///
/// The sort is stable, so equal scores keep roster order.
pub fn choose_team_order(ctx: &BattleContext, battle: &Battle) -> Decision {
    let mut scored: Vec<(u8, f64)> = battle
        .bot_team()
        .members()
        .iter()
        .enumerate()
        .map(|(index, member)| (index as u8 + 1, preview_score(ctx, battle, member)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (slot, score) in &scored {
        tracing::debug!(slot, score, "preview candidate");
    }

    let order: Vec<u8> = scored.into_iter().map(|(slot, _)| slot).collect();
    tracing::info!(order = ?order, "team order");
    Decision::TeamOrder(order)
}
