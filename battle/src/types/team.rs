//! Team (one side of the battle) and its side conditions

use geniusect_protocol::Seat;

use super::pokemon::Pokemon;
use super::status::Status;
use crate::error::{BattleError, Result};

/// Maximum roster size
pub const MAX_TEAM_SIZE: usize = 6;

/// Side conditions this engine keeps track of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideCondition {
    Reflect,
    LightScreen,
    StealthRock,
    Spikes,
    ToxicSpikes,
    StickyWeb,
}

impl SideCondition {
    /// Parse the condition of a `-sidestart`/`-sideend` record
    ///
    /// Matches by substring so "move: Stealth Rock" and "Stealth Rock" both
    /// work; "Toxic Spikes" is tested before "Spikes".
    pub fn from_protocol(s: &str) -> Option<Self> {
        if s.contains("Reflect") {
            Some(SideCondition::Reflect)
        } else if s.contains("Light Screen") {
            Some(SideCondition::LightScreen)
        } else if s.contains("Stealth Rock") {
            Some(SideCondition::StealthRock)
        } else if s.contains("Toxic Spikes") {
            Some(SideCondition::ToxicSpikes)
        } else if s.contains("Spikes") {
            Some(SideCondition::Spikes)
        } else if s.contains("Sticky Web") {
            Some(SideCondition::StickyWeb)
        } else {
            None
        }
    }

    /// Get maximum layers for this condition
    pub fn max_layers(&self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }

    /// Check if this is an entry hazard
    pub fn is_hazard(&self) -> bool {
        !matches!(self, SideCondition::Reflect | SideCondition::LightScreen)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideCondition::Reflect => "Reflect",
            SideCondition::LightScreen => "Light Screen",
            SideCondition::StealthRock => "Stealth Rock",
            SideCondition::Spikes => "Spikes",
            SideCondition::ToxicSpikes => "Toxic Spikes",
            SideCondition::StickyWeb => "Sticky Web",
        }
    }
}

impl std::fmt::Display for SideCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry hazard layer counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryHazards {
    pub stealth_rock: u8,
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub sticky_web: u8,
}

impl EntryHazards {
    fn counter(&mut self, hazard: SideCondition) -> Option<&mut u8> {
        match hazard {
            SideCondition::StealthRock => Some(&mut self.stealth_rock),
            SideCondition::Spikes => Some(&mut self.spikes),
            SideCondition::ToxicSpikes => Some(&mut self.toxic_spikes),
            SideCondition::StickyWeb => Some(&mut self.sticky_web),
            SideCondition::Reflect | SideCondition::LightScreen => None,
        }
    }

    pub fn layers(&self, hazard: SideCondition) -> u8 {
        match hazard {
            SideCondition::StealthRock => self.stealth_rock,
            SideCondition::Spikes => self.spikes,
            SideCondition::ToxicSpikes => self.toxic_spikes,
            SideCondition::StickyWeb => self.sticky_web,
            SideCondition::Reflect | SideCondition::LightScreen => 0,
        }
    }

    /// Add a layer; returns false when already at the cap
    pub fn add(&mut self, hazard: SideCondition) -> bool {
        let max = hazard.max_layers();
        match self.counter(hazard) {
            Some(layers) if *layers < max => {
                *layers += 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self, hazard: SideCondition) {
        if let Some(layers) = self.counter(hazard) {
            *layers = 0;
        }
    }

    /// Whether this hazard cannot take another layer
    pub fn is_capped(&self, hazard: SideCondition) -> bool {
        self.layers(hazard) >= hazard.max_layers()
    }

    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

/// One player's side: the roster plus side-wide effects
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub seat: Seat,
    pub username: String,
    /// Whether this is the side the bot plays
    pub is_bot: bool,
    /// Announced roster size (from `teamsize`)
    pub team_size: u8,
    pub hazards: EntryHazards,
    pub reflect: bool,
    pub light_screen: bool,

    /// Roster in the order members were first seen
    members: Vec<Pokemon>,
}

impl Team {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            username: String::new(),
            is_bot: false,
            team_size: MAX_TEAM_SIZE as u8,
            hazards: EntryHazards::default(),
            reflect: false,
            light_screen: false,
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[Pokemon] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pokemon> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Pokemon> {
        self.members.get_mut(index)
    }

    /// Append a member; a seventh member is an error
    pub fn add(&mut self, mut pokemon: Pokemon) -> Result<()> {
        if self.members.len() >= MAX_TEAM_SIZE {
            return Err(BattleError::RosterOverflow {
                seat: self.seat,
                species: pokemon.name,
            });
        }
        pokemon.seat = self.seat;
        self.members.push(pokemon);
        Ok(())
    }

    /// Replace the whole roster at once
    pub fn replace_members(&mut self, members: Vec<Pokemon>) -> Result<()> {
        if let Some(extra) = members.get(MAX_TEAM_SIZE) {
            return Err(BattleError::RosterOverflow {
                seat: self.seat,
                species: extra.name.clone(),
            });
        }
        self.members = members;
        for pokemon in &mut self.members {
            pokemon.seat = self.seat;
        }
        Ok(())
    }

    /// Remove the first member whose name contains `name` (case-insensitive)
    ///
    /// Mega-evolved members are never removed; the call is a no-op for them.
    /// Returns true if a member was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let needle = name.to_lowercase();
        let Some(index) = self
            .members
            .iter()
            .position(|p| p.name.to_lowercase().contains(&needle))
        else {
            return false;
        };
        if self.members[index].name.to_lowercase().contains("mega") {
            return false;
        }
        self.members.remove(index);
        true
    }

    /// Whether a member has exactly this name
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|p| p.name == name)
    }

    /// Position of a member by name (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.members.iter().position(|p| p.active)
    }

    pub fn active(&self) -> Option<&Pokemon> {
        self.members.iter().find(|p| p.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Pokemon> {
        self.members.iter_mut().find(|p| p.active)
    }

    /// Make the member at `index` the only active one
    pub fn set_active(&mut self, index: usize) {
        for (i, pokemon) in self.members.iter_mut().enumerate() {
            if i == index {
                pokemon.on_switch_in();
            } else if pokemon.active {
                pokemon.on_switch_out();
            }
        }
    }

    /// Members that could be switched in: not active, not fainted
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Pokemon)> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.active && !p.is_fainted())
    }

    pub fn switchable_count(&self) -> usize {
        self.bench().count()
    }

    /// Members not yet revealed, counted against the announced team size
    pub fn unseen_count(&self) -> usize {
        (self.team_size as usize).saturating_sub(self.members.len())
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|p| !p.is_fainted()).count()
    }

    pub fn any_status(&self, status: Status) -> bool {
        self.members.iter().any(|p| p.status == status)
    }

    /// Apply a `-sidestart`; returns false if nothing changed
    pub fn add_condition(&mut self, condition: SideCondition) -> bool {
        match condition {
            SideCondition::Reflect => !std::mem::replace(&mut self.reflect, true),
            SideCondition::LightScreen => !std::mem::replace(&mut self.light_screen, true),
            hazard => self.hazards.add(hazard),
        }
    }

    /// Apply a `-sideend`; hazards are cleared entirely
    pub fn remove_condition(&mut self, condition: SideCondition) {
        match condition {
            SideCondition::Reflect => self.reflect = false,
            SideCondition::LightScreen => self.light_screen = false,
            hazard => self.hazards.clear(hazard),
        }
    }
}
