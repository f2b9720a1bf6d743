//! Minor battle action record parsers
//!
//! These are secondary effects in battle: damage, stat changes, status, etc.
//! Only the tags the belief state tracks get a dedicated variant; the rest
//! come back as [`BattleRecord::Other`].

use super::battle::{BoostStat, field, parse_condition, parse_number, parse_pokemon, parse_side};
use super::{BattleRecord, other};
use crate::ParseError;

pub fn parse(tag: &str, parts: &[&str]) -> Result<BattleRecord, ParseError> {
    match tag {
        "-damage" => parse_damage(parts),
        "-heal" => parse_heal(parts),
        "-sethp" => parse_sethp(parts),
        "-status" => parse_status(parts),
        "-curestatus" => parse_curestatus(parts),
        "-boost" => parse_boost(parts, false),
        "-unboost" => parse_boost(parts, true),
        "-sidestart" => parse_sidestart(parts),
        "-sideend" => parse_sideend(parts),
        "-item" => parse_item(parts),
        "-enditem" => parse_enditem(parts),
        "-ability" => parse_ability(parts),
        "-start" => parse_start(parts),
        "-end" => parse_end(parts),
        _ => Ok(other(tag, parts)),
    }
}

/// Parse |-damage|POKEMON|HP STATUS
pub fn parse_damage(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let condition = parse_condition(parts, 2)?;

    Ok(BattleRecord::Damage { pokemon, condition })
}

/// Parse |-heal|POKEMON|HP STATUS
pub fn parse_heal(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let condition = parse_condition(parts, 2)?;

    Ok(BattleRecord::Heal { pokemon, condition })
}

/// Parse |-sethp|POKEMON|HP
pub fn parse_sethp(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let condition = parse_condition(parts, 2)?;

    Ok(BattleRecord::SetHp { pokemon, condition })
}

/// Parse |-status|POKEMON|STATUS
pub fn parse_status(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let status = parts.get(2).unwrap_or(&"").to_string();

    Ok(BattleRecord::Status { pokemon, status })
}

/// Parse |-curestatus|POKEMON|STATUS
pub fn parse_curestatus(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let status = parts.get(2).unwrap_or(&"").to_string();

    Ok(BattleRecord::CureStatus { pokemon, status })
}

/// Parse |-boost|POKEMON|STAT|AMOUNT and |-unboost|POKEMON|STAT|AMOUNT
pub fn parse_boost(parts: &[&str], unboost: bool) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let raw_stat = field(parts, 2, "stat")?;
    let stat = BoostStat::parse(raw_stat).ok_or_else(|| ParseError::UnknownValue {
        field: "stat".to_string(),
        value: raw_stat.to_string(),
    })?;
    let amount = parse_number(parts, 3, "boost amount")?;

    Ok(if unboost {
        BattleRecord::Unboost {
            pokemon,
            stat,
            amount,
        }
    } else {
        BattleRecord::Boost {
            pokemon,
            stat,
            amount,
        }
    })
}

/// Parse |-sidestart|SIDE|CONDITION
pub fn parse_sidestart(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let side = parse_side(parts, 1)?;
    let condition = field(parts, 2, "side condition")?.to_string();

    Ok(BattleRecord::SideStart { side, condition })
}

/// Parse |-sideend|SIDE|CONDITION
pub fn parse_sideend(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let side = parse_side(parts, 1)?;
    let condition = field(parts, 2, "side condition")?.to_string();

    Ok(BattleRecord::SideEnd { side, condition })
}

/// Parse |-item|POKEMON|ITEM
pub fn parse_item(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let item = field(parts, 2, "item")?.to_string();

    Ok(BattleRecord::Item { pokemon, item })
}

/// Parse |-enditem|POKEMON|ITEM
pub fn parse_enditem(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let item = parts.get(2).unwrap_or(&"").to_string();

    Ok(BattleRecord::EndItem { pokemon, item })
}

/// Parse |-ability|POKEMON|ABILITY
pub fn parse_ability(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let ability = field(parts, 2, "ability")?.to_string();

    Ok(BattleRecord::Ability { pokemon, ability })
}

/// Parse |-start|POKEMON|EFFECT
pub fn parse_start(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let effect = field(parts, 2, "effect")?.to_string();

    Ok(BattleRecord::Start { pokemon, effect })
}

/// Parse |-end|POKEMON|EFFECT
pub fn parse_end(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let pokemon = parse_pokemon(parts, 1)?;
    let effect = field(parts, 2, "effect")?.to_string();

    Ok(BattleRecord::End { pokemon, effect })
}
