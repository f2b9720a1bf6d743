//! Major battle action record parsers

use super::BattleRecord;
use super::battle::{PokemonDetails, PokemonIdent, field, optional, parse_pokemon};
use crate::ParseError;

/// Parse |switch|POKEMON|DETAILS|HP STATUS (or |drag|...)
pub fn parse_switch(parts: &[&str], dragged: bool) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let details = PokemonDetails::parse(field(parts, 2, "details")?);
    let condition = parts.get(3).map(|s| super::Condition::parse(s));

    Ok(BattleRecord::Switch {
        pokemon,
        details,
        condition,
        dragged,
    })
}

/// Parse |move|POKEMON|MOVE|TARGET
pub fn parse_move(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let move_name = field(parts, 2, "move")?.to_string();
    let target = parts.get(3).and_then(|s| PokemonIdent::parse(s));

    Ok(BattleRecord::Move {
        pokemon,
        move_name,
        target,
    })
}

/// Parse |faint|POKEMON
pub fn parse_faint(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    Ok(BattleRecord::Faint(parse_pokemon(parts, 1)?))
}

/// Parse |cant|POKEMON|REASON|MOVE
pub fn parse_cant(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let reason = parts.get(2).unwrap_or(&"").to_string();
    let move_name = optional(parts, 3);

    Ok(BattleRecord::Cant {
        pokemon,
        reason,
        move_name,
    })
}
