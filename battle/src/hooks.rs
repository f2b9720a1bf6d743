//! Extension point for effects the heuristics do not model yet
//!
//! Weather, field effects and most abilities could attach here. Every event
//! carries a relay value that each hook may rewrite; [`NoHooks`] hands it
//! back untouched.

use geniusect_dex::MoveData;

use crate::types::Pokemon;

/// Events raised while estimating a move use
#[derive(Debug, Clone, Copy)]
pub enum BattleEvent<'a> {
    /// Product of every damage modifier, before it scales base damage
    ModifyDamage {
        attacker: &'a Pokemon,
        defender: &'a Pokemon,
        move_data: &'a MoveData,
    },
    /// Accuracy in [0, 1.01] applied to a move score
    ModifyAccuracy {
        attacker: &'a Pokemon,
        defender: &'a Pokemon,
        move_data: &'a MoveData,
    },
}

impl BattleEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            BattleEvent::ModifyDamage { .. } => "ModifyDamage",
            BattleEvent::ModifyAccuracy { .. } => "ModifyAccuracy",
        }
    }
}

pub trait BattleHooks: Send + Sync {
    /// Run every handler for `event`, threading `relay` through them
    fn run_event(&self, event: &BattleEvent<'_>, relay: f64) -> f64 {
        let _ = event;
        relay
    }
}

/// Pass-through hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BattleHooks for NoHooks {}

#[cfg(test)]
mod tests {
    use super::*;
    use geniusect_dex::{MoveCategory, Type};
    use geniusect_protocol::Seat;

    struct Double;

    impl BattleHooks for Double {
        fn run_event(&self, event: &BattleEvent<'_>, relay: f64) -> f64 {
            match event {
                BattleEvent::ModifyDamage { .. } => relay * 2.0,
                _ => relay,
            }
        }
    }

    #[test]
    fn test_no_hooks_pass_through() {
        let pokemon = Pokemon::new(Seat::P1, "Garchomp", 100, "100/100");
        let surf = MoveData::new("surf", Type::Water, MoveCategory::Special, 90, 100);
        let event = BattleEvent::ModifyDamage {
            attacker: &pokemon,
            defender: &pokemon,
            move_data: &surf,
        };
        assert_eq!(NoHooks.run_event(&event, 1.5), 1.5);
        assert_eq!(Double.run_event(&event, 1.5), 3.0);
        assert_eq!(event.name(), "ModifyDamage");
    }
}
