//! Shared fixtures for unit tests

use std::sync::Arc;

use geniusect_dex::LocalDex;
use geniusect_protocol::Seat;

use crate::context::BattleContext;
use crate::types::{Move, Pokemon};

const POKEDEX: &str = include_str!("../tests/data/pokedex.json");
const MOVES: &str = include_str!("../tests/data/moves.json");
const FORMATS_DATA: &str = include_str!("../tests/data/formats-data.json");

pub fn dex() -> LocalDex {
    LocalDex::from_json(POKEDEX, MOVES)
        .and_then(|dex| dex.with_formats_data_json(FORMATS_DATA))
        .unwrap()
}

pub fn context() -> BattleContext {
    BattleContext::new("Geniusect", Arc::new(dex()))
}

/// A level 100 Pokemon at full health, loaded as an unrevealed opponent
/// would be; a non-empty `moves` replaces the movepool
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

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
