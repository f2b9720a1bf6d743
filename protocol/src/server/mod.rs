mod battle;
mod battle_init;
mod battle_major;
mod battle_minor;
mod battle_progress;
mod error;
mod request;

pub use battle::{BoostStat, Condition, PokemonDetails, PokemonIdent, Seat, Side};
pub use error::ChoiceError;
pub use request::{ActivePokemon, BattleRequest, MoveSlot, PokemonStats, SideInfo, SidePokemon};

use crate::ParseError;
use anyhow::Result;

/// Server-issued follow-up when a submitted choice could not be executed
#[derive(Debug, Clone, PartialEq)]
pub enum Callback {
    /// The active Pokemon cannot use the named move
    Cant { move_id: Option<String> },
    /// The active Pokemon cannot switch out
    Trapped,
    Other(String),
}

/// One event record of a battle log
#[derive(Debug, Clone, PartialEq)]
pub enum BattleRecord {
    // === Initialization ===
    /// |player|PLAYER|USERNAME|AVATAR|RATING
    Player { seat: Seat, username: String },
    /// |teamsize|PLAYER|NUMBER
    TeamSize { seat: Seat, size: u8 },
    /// |gen|GENNUM
    Gen(u8),
    /// |tier|FORMATNAME
    Tier(String),
    /// |poke|PLAYER|DETAILS|ITEM
    Poke {
        seat: Seat,
        details: PokemonDetails,
        item: Option<String>,
    },
    /// |teampreview
    TeamPreview,

    // === Progress ===
    /// |request|REQUEST (empty payload between turns)
    Request(Option<Box<BattleRequest>>),
    /// |turn|NUMBER
    Turn(u32),
    /// |win|USER
    Win(String),
    /// |tie
    Tie,
    /// |error|MESSAGE
    Error(ChoiceError),
    /// |callback|KIND|...
    Callback(Callback),

    // === Major actions ===
    /// |switch|POKEMON|DETAILS|HP STATUS or |drag|...
    Switch {
        pokemon: PokemonIdent,
        details: PokemonDetails,
        condition: Option<Condition>,
        dragged: bool,
    },
    /// |move|POKEMON|MOVE|TARGET
    Move {
        pokemon: PokemonIdent,
        move_name: String,
        target: Option<PokemonIdent>,
    },
    /// |faint|POKEMON
    Faint(PokemonIdent),
    /// |cant|POKEMON|REASON|MOVE
    Cant {
        pokemon: PokemonIdent,
        reason: String,
        move_name: Option<String>,
    },

    // === Minor actions ===
    /// |-damage|POKEMON|HP STATUS
    Damage {
        pokemon: PokemonIdent,
        condition: Condition,
    },
    /// |-heal|POKEMON|HP STATUS
    Heal {
        pokemon: PokemonIdent,
        condition: Condition,
    },
    /// |-sethp|POKEMON|HP
    SetHp {
        pokemon: PokemonIdent,
        condition: Condition,
    },
    /// |-status|POKEMON|STATUS
    Status { pokemon: PokemonIdent, status: String },
    /// |-curestatus|POKEMON|STATUS
    CureStatus { pokemon: PokemonIdent, status: String },
    /// |-boost|POKEMON|STAT|AMOUNT
    Boost {
        pokemon: PokemonIdent,
        stat: BoostStat,
        amount: i8,
    },
    /// |-unboost|POKEMON|STAT|AMOUNT
    Unboost {
        pokemon: PokemonIdent,
        stat: BoostStat,
        amount: i8,
    },
    /// |-sidestart|SIDE|CONDITION
    SideStart { side: Side, condition: String },
    /// |-sideend|SIDE|CONDITION
    SideEnd { side: Side, condition: String },
    /// |-item|POKEMON|ITEM
    Item { pokemon: PokemonIdent, item: String },
    /// |-enditem|POKEMON|ITEM
    EndItem { pokemon: PokemonIdent, item: String },
    /// |-ability|POKEMON|ABILITY
    Ability { pokemon: PokemonIdent, ability: String },
    /// |-start|POKEMON|EFFECT
    Start { pokemon: PokemonIdent, effect: String },
    /// |-end|POKEMON|EFFECT
    End { pokemon: PokemonIdent, effect: String },

    /// Any other tag; accepted and carried through untouched
    Other { tag: String, args: Vec<String> },
}

impl BattleRecord {
    /// Parse an already-tokenized record; `fields[0]` is the tag
    pub fn parse(fields: &[&str]) -> std::result::Result<Self, ParseError> {
        let tag = fields.first().copied().ok_or(ParseError::EmptyMessage)?;
        if tag.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        if tag.starts_with('-') {
            battle_minor::parse(tag, fields)
        } else {
            parse_major(tag, fields)
        }
    }

    /// Whether this record came from a `-`-prefixed tag
    pub fn is_minor(&self) -> bool {
        match self {
            BattleRecord::Damage { .. }
            | BattleRecord::Heal { .. }
            | BattleRecord::SetHp { .. }
            | BattleRecord::Status { .. }
            | BattleRecord::CureStatus { .. }
            | BattleRecord::Boost { .. }
            | BattleRecord::Unboost { .. }
            | BattleRecord::SideStart { .. }
            | BattleRecord::SideEnd { .. }
            | BattleRecord::Item { .. }
            | BattleRecord::EndItem { .. }
            | BattleRecord::Ability { .. }
            | BattleRecord::Start { .. }
            | BattleRecord::End { .. } => true,
            BattleRecord::Other { tag, .. } => tag.starts_with('-'),
            _ => false,
        }
    }
}

fn parse_major(tag: &str, fields: &[&str]) -> std::result::Result<BattleRecord, ParseError> {
    match tag {
        "player" => battle_init::parse_player(fields),
        "teamsize" => battle_init::parse_teamsize(fields),
        "gen" => battle_init::parse_gen(fields),
        "tier" => battle_init::parse_tier(fields),
        "poke" => battle_init::parse_poke(fields),
        "teampreview" => Ok(BattleRecord::TeamPreview),
        "request" => battle_progress::parse_request(fields),
        "turn" => battle_progress::parse_turn(fields),
        "win" => battle_progress::parse_win(fields),
        "tie" => Ok(BattleRecord::Tie),
        "error" => battle_progress::parse_error(fields),
        "callback" => battle_progress::parse_callback(fields),
        "switch" => battle_major::parse_switch(fields, false),
        "drag" => battle_major::parse_switch(fields, true),
        "move" => battle_major::parse_move(fields),
        "faint" => battle_major::parse_faint(fields),
        "cant" => battle_major::parse_cant(fields),
        _ => Ok(other(tag, fields)),
    }
}

pub(crate) fn other(tag: &str, fields: &[&str]) -> BattleRecord {
    BattleRecord::Other {
        tag: tag.to_string(),
        args: fields.iter().skip(1).map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerFrame {
    pub room_id: Option<String>,
    pub records: Vec<BattleRecord>,
}

/// Split a protocol line into fields, dropping the leading empty field
///
/// `"|-damage|p1a: Pikachu|50/100"` becomes `["-damage", "p1a: Pikachu", "50/100"]`.
/// Lines that do not start with `|` are plain log text and yield no fields.
pub fn tokenize(line: &str) -> Vec<&str> {
    match line.trim_end_matches(['\r', '\n']).strip_prefix('|') {
        Some(rest) => rest.split('|').collect(),
        None => Vec::new(),
    }
}

/// Parse a complete WebSocket frame into records
///
/// Unlike [`parse_server_message`], malformed lines fail the whole frame.
pub fn parse_server_frame(frame: &str) -> Result<ServerFrame> {
    let mut lines = frame.lines();
    let mut room_id = None;

    // Check if first line is >ROOMID
    if let Some(first_line) = lines.clone().next()
        && let Some(room) = first_line.strip_prefix('>')
    {
        room_id = Some(room.to_string());
        lines.next();
    }

    let records = lines
        .filter(|line| line.starts_with('|') && line.len() > 1)
        .map(|line| {
            parse_server_message(line).map_err(|e| anyhow::anyhow!("{e} in line {line:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ServerFrame { room_id, records })
}

/// Parse a single protocol line into a record
pub fn parse_server_message(line: &str) -> std::result::Result<BattleRecord, ParseError> {
    let fields = tokenize(line);
    if fields.is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    // |request| carries JSON that may itself contain pipes
    if fields[0] == "request" {
        let payload = line.trim().splitn(3, '|').nth(2).unwrap_or("");
        return battle_progress::parse_request(&["request", payload]);
    }

    BattleRecord::parse(&fields)
}
