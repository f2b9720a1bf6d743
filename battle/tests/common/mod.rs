//! Fixtures shared by the integration tests
#![allow(dead_code)]

use std::sync::Arc;

use geniusect_battle::{Battle, BattleContext, Move, Pokemon, Seat};
use geniusect_dex::{LocalDex, StatTable};
use serde_json::{Value, json};

pub const USERNAME: &str = "Geniusect";

pub fn dex() -> LocalDex {
    LocalDex::from_json(
        include_str!("../data/pokedex.json"),
        include_str!("../data/moves.json"),
    )
    .and_then(|dex| dex.with_formats_data_json(include_str!("../data/formats-data.json")))
    .unwrap()
}

pub fn context() -> BattleContext {
    BattleContext::new(USERNAME, Arc::new(dex()))
}

/// A level 100 Pokemon at full health with the given moves
pub fn pokemon(ctx: &BattleContext, seat: Seat, name: &str, moves: &[&str]) -> Pokemon {
    let mut pokemon = Pokemon::new(seat, name, 100, "100/100");
    pokemon.load_unknown(ctx.dex()).unwrap();
    if !moves.is_empty() {
        pokemon.moves = moves
            .iter()
            .map(|id| Move::from_dex(ctx.dex(), id).unwrap())
            .collect();
    }
    pokemon
}

/// A battle where we are p1, with `ours[0]` and `theirs[0]` active
pub fn battle(ctx: &BattleContext, ours: &[(&str, &[&str])], theirs: &[(&str, &[&str])]) -> Battle {
    let mut battle = Battle::new();
    battle.set_player(Seat::P1);
    for (seat, roster) in [(Seat::P1, ours), (Seat::P2, theirs)] {
        let team = battle.team_mut(seat);
        for (name, moves) in roster {
            team.add(pokemon(ctx, seat, name, moves)).unwrap();
        }
        team.set_active(0);
    }
    battle
}

/// One entry of a request's side listing
pub fn member(details: &str, condition: &str, active: bool, moves: &[&str], stats: StatTable) -> Value {
    let species = details.split(',').next().unwrap_or(details);
    json!({
        "ident": format!("p1: {species}"),
        "details": details,
        "condition": condition,
        "active": active,
        "stats": {
            "atk": stats.atk,
            "def": stats.def,
            "spa": stats.spa,
            "spd": stats.spd,
            "spe": stats.spe,
        },
        "moves": moves,
        "baseAbility": "",
        "item": "",
    })
}

/// A `|request|` line for p1
pub fn request(rqid: u64, active: Option<&[&str]>, members: &[Value], extra: Value) -> String {
    let mut payload = json!({
        "side": {"name": USERNAME, "id": "p1", "pokemon": members},
        "rqid": rqid,
    });
    if let Some(moves) = active {
        let slots: Vec<Value> = moves
            .iter()
            .map(|id| json!({"move": id, "id": id, "pp": 10, "maxpp": 16, "target": "normal", "disabled": false}))
            .collect();
        payload["active"] = json!([{ "moves": slots }]);
    }
    if let (Some(payload), Some(extra)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            payload.insert(key.clone(), value.clone());
        }
    }
    format!("|request|{payload}")
}

pub fn garchomp_stats() -> StatTable {
    StatTable::new(0, 215, 170, 146, 155, 183)
}

pub fn skarmory_stats() -> StatTable {
    StatTable::new(0, 170, 268, 106, 170, 162)
}
