use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{ClientCommand, ClientMessage};
pub use server::{
    ActivePokemon, BattleRecord, BattleRequest, BoostStat, Callback, ChoiceError, Condition,
    MoveSlot, PokemonDetails, PokemonIdent, Seat, ServerFrame, Side, SideInfo, SidePokemon,
    parse_server_frame, parse_server_message, tokenize,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unrecognized value for {field}: {value}")]
    UnknownValue { field: String, value: String },

    #[error("Empty message")]
    EmptyMessage,
}
