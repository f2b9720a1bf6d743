use geniusect_dex::DexError;
use geniusect_protocol::{ParseError, Seat};
use thiserror::Error;

/// Errors raised while tracking a battle or choosing an action
///
/// Everything except [`BattleError::Parse`], [`BattleError::PokemonNotFound`]
/// and [`BattleError::MoveNotFound`] is fatal for the battle it came from;
/// the caller is expected to forfeit that battle and carry on with others.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Team {seat:?} is full, cannot add {species}")]
    RosterOverflow { seat: Seat, species: String },

    #[error("No reference data for species: {0}")]
    UnknownSpecies(String),

    #[error("No reference data for move: {0}")]
    UnknownMove(String),

    #[error("A switch was required but no eligible Pokemon remains")]
    NoLegalSwitch,

    #[error("Team {0:?} has no active Pokemon")]
    NoActivePokemon(Seat),

    #[error("Pokemon not found: {0}")]
    PokemonNotFound(String),

    #[error("Move not found on active Pokemon: {0}")]
    MoveNotFound(String),

    /// The server refused a choice that re-deciding cannot repair
    #[error("Choice rejected: {0}")]
    ChoiceRejected(String),
}

impl BattleError {
    /// Whether the battle this error came from can no longer be trusted
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BattleError::Parse(_) | BattleError::PokemonNotFound(_) | BattleError::MoveNotFound(_)
        )
    }
}

impl From<DexError> for BattleError {
    fn from(err: DexError) -> Self {
        match err {
            DexError::UnknownSpecies(id) => BattleError::UnknownSpecies(id),
            DexError::UnknownMove(id) => BattleError::UnknownMove(id),
        }
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
