//! Battle initialization record parsers

use super::BattleRecord;
use super::battle::{PokemonDetails, field, optional, parse_number, parse_seat};
use crate::ParseError;

/// Parse |player|PLAYER|USERNAME|AVATAR|RATING
pub fn parse_player(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let seat = parse_seat(parts, 1)?;
    // The server repeats |player|p1| with no name when a player leaves
    let username = parts.get(2).unwrap_or(&"").to_string();

    Ok(BattleRecord::Player { seat, username })
}

/// Parse |teamsize|PLAYER|NUMBER
pub fn parse_teamsize(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let seat = parse_seat(parts, 1)?;
    let size = parse_number(parts, 2, "team size")?;

    Ok(BattleRecord::TeamSize { seat, size })
}

/// Parse |gen|GENNUM
pub fn parse_gen(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    Ok(BattleRecord::Gen(parse_number(parts, 1, "generation")?))
}

/// Parse |tier|FORMATNAME
pub fn parse_tier(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    Ok(BattleRecord::Tier(field(parts, 1, "format")?.to_string()))
}

/// Parse |poke|PLAYER|DETAILS|ITEM
pub fn parse_poke(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let seat = parse_seat(parts, 1)?;
    let details = PokemonDetails::parse(field(parts, 2, "details")?);
    let item = optional(parts, 3);

    Ok(BattleRecord::Poke {
        seat,
        details,
        item,
    })
}
