//! Held items, as far as the log has revealed them

use geniusect_dex::to_id;

/// What we know about a held item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeldItem {
    /// Not revealed yet
    #[default]
    Unknown,
    /// Known to hold nothing (never had one, or it was consumed/removed)
    None,
    Known(String),
}

impl HeldItem {
    /// From an item name or id; an empty string means no item
    pub fn from_name(name: &str) -> Self {
        let id = to_id(name);
        if id.is_empty() {
            HeldItem::None
        } else {
            HeldItem::Known(id)
        }
    }

    pub fn is(&self, id: &str) -> bool {
        matches!(self, HeldItem::Known(held) if held == id)
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            HeldItem::Known(id) => Some(id.as_str()),
            _ => None,
        }
    }
}
