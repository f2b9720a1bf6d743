//! Classification of `|error|` messages sent after a rejected choice

/// Why the server rejected the last choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    /// The active Pokemon is trapped
    CantSwitch(String),
    /// A switch was required but a move was sent
    MustSwitch(String),
    BattleCrashed(String),
    /// The chosen roster slot is empty
    NoPokemon(String),
    /// Unknown, disabled or otherwise unusable move
    InvalidMove(String),
    InvalidTarget(String),
    /// Mega evolution (or ultra burst) is not available
    MegaEvolve(String),
    Unknown(String),
}

impl ChoiceError {
    /// Classify a server error message by its text
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let message = message.to_string();

        if lower.contains("can't switch") {
            ChoiceError::CantSwitch(message)
        } else if lower.contains("battle crashed") {
            ChoiceError::BattleCrashed(message)
        } else if lower.contains("do not have a pokémon in slot")
            || lower.contains("do not have a pokemon in slot")
        {
            ChoiceError::NoPokemon(message)
        } else if lower.contains("doesn't have a move")
            || lower.contains("can't z-move more than once")
            || lower.contains("as a z-move")
            || lower.contains("is disabled")
        {
            ChoiceError::InvalidMove(message)
        } else if lower.contains("needs a target")
            || lower.contains("invalid target")
            || lower.contains("can't choose a target")
        {
            ChoiceError::InvalidTarget(message)
        } else if lower.contains("mega evolve")
            || lower.contains("mega-evolve")
            || lower.contains("ultra burst")
        {
            ChoiceError::MegaEvolve(message)
        } else if lower.contains("need a switch") {
            ChoiceError::MustSwitch(message)
        } else {
            ChoiceError::Unknown(message)
        }
    }

    /// Display name of the move a "... is disabled" rejection names
    ///
    /// `Can't move: Garchomp's Earthquake is disabled` gives `Earthquake`.
    pub fn disabled_move(&self) -> Option<&str> {
        let ChoiceError::InvalidMove(message) = self else {
            return None;
        };
        let head = message.trim_end().strip_suffix(" is disabled")?;
        let (_, name) = head.rsplit_once("'s ")?;
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn message(&self) -> &str {
        match self {
            ChoiceError::CantSwitch(m)
            | ChoiceError::MustSwitch(m)
            | ChoiceError::BattleCrashed(m)
            | ChoiceError::NoPokemon(m)
            | ChoiceError::InvalidMove(m)
            | ChoiceError::InvalidTarget(m)
            | ChoiceError::MegaEvolve(m)
            | ChoiceError::Unknown(m) => m,
        }
    }
}
