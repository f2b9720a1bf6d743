//! Battle progress record parsers

use super::battle::{field, optional, parse_number};
use super::error::ChoiceError;
use super::request::BattleRequest;
use super::{BattleRecord, Callback};
use crate::ParseError;

/// Parse |request|REQUEST
pub fn parse_request(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let payload = parts.get(1).map(|s| s.trim()).unwrap_or("");
    if payload.is_empty() {
        return Ok(BattleRecord::Request(None));
    }

    let request: BattleRequest = serde_json::from_str(payload)
        .map_err(|e| ParseError::InvalidFormat(format!("request payload: {e}")))?;

    Ok(BattleRecord::Request(Some(Box::new(request))))
}

/// Parse |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    Ok(BattleRecord::Turn(parse_number(parts, 1, "turn")?))
}

/// Parse |win|USER
pub fn parse_win(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    Ok(BattleRecord::Win(field(parts, 1, "winner")?.to_string()))
}

/// Parse |error|MESSAGE
pub fn parse_error(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let message = parts.get(1..).map(|p| p.join("|")).unwrap_or_default();
    Ok(BattleRecord::Error(ChoiceError::classify(&message)))
}

/// Parse |callback|cant|POKEMON|REASON|MOVE or |callback|trapped|...
pub fn parse_callback(parts: &[&str]) -> Result<BattleRecord, ParseError> {
    let kind = field(parts, 1, "callback kind")?;
    let callback = match kind {
        "cant" => Callback::Cant {
            move_id: optional(parts, 4),
        },
        "trapped" => Callback::Trapped,
        other => Callback::Other(other.to_string()),
    };

    Ok(BattleRecord::Callback(callback))
}
