//! Ability knowledge: exact for our side, a candidate set for the opponent

use geniusect_dex::to_id;

/// A species has at most four ability slots (0, 1, H, S)
pub const ABILITY_CAPACITY: usize = 4;

/// Fixed-capacity set of candidate ability ids
///
/// Holds exactly one id once the ability is known. An empty set means the
/// data listed no abilities at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    slots: [Option<String>; ABILITY_CAPACITY],
}

impl AbilitySet {
    /// A set holding one known ability
    pub fn exact(ability: &str) -> Self {
        let mut set = Self::default();
        set.insert(ability);
        set
    }

    /// A set of candidates; duplicates are dropped and anything past
    /// capacity is ignored
    pub fn candidates<'a>(abilities: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for ability in abilities {
            set.insert(ability);
        }
        set
    }

    /// Add a candidate; returns false if it was already present or the set is full
    pub fn insert(&mut self, ability: &str) -> bool {
        let id = to_id(ability);
        if id.is_empty() || self.contains(&id) {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(id);
                true
            }
            None => false,
        }
    }

    /// Collapse to a single revealed ability
    pub fn narrow(&mut self, ability: &str) {
        *self = Self::exact(ability);
    }

    pub fn contains(&self, ability: &str) -> bool {
        let id = to_id(ability);
        self.iter().any(|a| a == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    /// The ability, if exactly one is possible
    pub fn known(&self) -> Option<&str> {
        match self.len() {
            1 => self.iter().next(),
            _ => None,
        }
    }
}
