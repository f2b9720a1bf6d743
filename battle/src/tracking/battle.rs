//! Battle - the belief state of one battle

use geniusect_protocol::{ActivePokemon, Seat};

use crate::types::{Pokemon, Team};

/// One battle as reconstructed from the event stream
///
/// Owns both teams (indexed by seat); teams own their Pokemon. The
/// opponent's team is built up as it is revealed and is never assumed
/// complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    // === Battle metadata ===
    /// Format/tier name
    pub format: String,

    /// Generation (1-9)
    pub generation: u8,

    /// Turn counter; advances by 2 per protocol turn, one per seat
    pub turn: u32,

    // === State ===
    pub(crate) teams: [Team; 2],

    /// Seat the bot plays
    pub player_id: Seat,

    // === Current decision point ===
    /// Move availability of our active Pokemon from the latest request
    pub current_active_move_metadata: Option<ActivePokemon>,
    pub force_switch: bool,
    pub is_trapped: bool,
    pub team_preview: bool,
    pub request_id: Option<u64>,

    // === Outcome ===
    pub ended: bool,
    pub winner: Option<String>,
    pub tie: bool,
}

impl Battle {
    pub fn new() -> Self {
        Self {
            format: String::new(),
            generation: 0,
            turn: 0,
            teams: [Team::new(Seat::P1), Team::new(Seat::P2)],
            player_id: Seat::P1,
            current_active_move_metadata: None,
            force_switch: false,
            is_trapped: false,
            team_preview: false,
            request_id: None,
            ended: false,
            winner: None,
            tie: false,
        }
    }

    pub fn team(&self, seat: Seat) -> &Team {
        &self.teams[seat.index()]
    }

    pub fn team_mut(&mut self, seat: Seat) -> &mut Team {
        &mut self.teams[seat.index()]
    }

    pub fn bot_team(&self) -> &Team {
        self.team(self.player_id)
    }

    pub fn bot_team_mut(&mut self) -> &mut Team {
        self.team_mut(self.player_id)
    }

    pub fn opponent_team(&self) -> &Team {
        self.team(self.player_id.opponent())
    }

    pub fn opponent_team_mut(&mut self) -> &mut Team {
        self.team_mut(self.player_id.opponent())
    }

    /// Make `seat` the bot's side
    pub fn set_player(&mut self, seat: Seat) {
        self.player_id = seat;
        self.team_mut(seat).is_bot = true;
        self.team_mut(seat.opponent()).is_bot = false;
    }

    /// Active Pokemon of a side
    pub fn active(&self, seat: Seat) -> Option<&Pokemon> {
        self.team(seat).active()
    }

    pub fn active_mut(&mut self, seat: Seat) -> Option<&mut Pokemon> {
        self.team_mut(seat).active_mut()
    }

    /// Whether the last request offered a mega evolution
    pub fn can_mega_evolve(&self) -> bool {
        self.current_active_move_metadata
            .as_ref()
            .is_some_and(|active| active.can_mega_evo)
    }

    /// Whether the last request left only one move to pick
    pub fn is_locked_into_move(&self) -> bool {
        self.current_active_move_metadata
            .as_ref()
            .is_some_and(ActivePokemon::is_locked)
    }

    /// Check if the battle is in progress
    pub fn is_active(&self) -> bool {
        self.turn > 0 && !self.ended
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geniusect_protocol::MoveSlot;

    #[test]
    fn test_new_battle() {
        let battle = Battle::new();
        assert_eq!(battle.turn, 0);
        assert!(!battle.ended);
        assert!(battle.bot_team().is_empty());
        assert!(!battle.is_active());
    }

    #[test]
    fn test_set_player() {
        let mut battle = Battle::new();
        battle.set_player(Seat::P2);
        assert_eq!(battle.player_id, Seat::P2);
        assert!(battle.bot_team().is_bot);
        assert_eq!(battle.bot_team().seat, Seat::P2);
        assert!(!battle.opponent_team().is_bot);
        assert_eq!(battle.opponent_team().seat, Seat::P1);
    }

    #[test]
    fn test_active() {
        let mut battle = Battle::new();
        let team = battle.team_mut(Seat::P1);
        team.add(Pokemon::new(Seat::P1, "Garchomp", 100, "100/100")).unwrap();
        assert!(battle.active(Seat::P1).is_none());

        battle.team_mut(Seat::P1).set_active(0);
        assert_eq!(battle.active(Seat::P1).map(|p| p.name.as_str()), Some("Garchomp"));
        assert!(battle.active(Seat::P2).is_none());
    }

    #[test]
    fn test_move_metadata() {
        let mut battle = Battle::new();
        assert!(!battle.can_mega_evolve());
        assert!(!battle.is_locked_into_move());

        battle.current_active_move_metadata = Some(ActivePokemon {
            moves: vec![MoveSlot {
                name: "Outrage".into(),
                id: "outrage".into(),
                pp: Some(10),
                max_pp: Some(16),
                target: "randomNormal".into(),
                disabled: false,
            }],
            can_mega_evo: true,
            ..Default::default()
        });
        assert!(battle.can_mega_evolve());
        assert!(battle.is_locked_into_move());
    }
}
