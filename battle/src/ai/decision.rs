//! Actions the selector can return

use geniusect_protocol::ClientCommand;

/// Decision state for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionState {
    /// Locked into the only move offered
    MustMove,
    /// Must switch; moves are not considered
    ForcedSwitch,
    Normal,
}

/// A chosen action; slots and roster indices are 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Move { slot: u8, mega: bool },
    Switch(u8),
    /// Team preview order, a permutation of roster slots
    TeamOrder(Vec<u8>),
}

impl Decision {
    /// Choice text as the server expects it after `/choose` or `/team`
    pub fn to_choice(&self) -> String {
        match self {
            Decision::Move { slot, mega: true } => format!("move {slot} mega"),
            Decision::Move { slot, mega: false } => format!("move {slot}"),
            Decision::Switch(index) => format!("switch {index}"),
            Decision::TeamOrder(order) => format!("team {}", team_order_string(order)),
        }
    }

    /// Outbound command for this decision
    pub fn to_command(&self, rqid: Option<u64>) -> ClientCommand {
        match self {
            Decision::TeamOrder(order) => ClientCommand::Team {
                order: team_order_string(order),
                rqid,
            },
            _ => ClientCommand::Choose {
                choice: self.to_choice(),
                rqid,
            },
        }
    }
}

fn team_order_string(order: &[u8]) -> String {
    order.iter().map(|slot| slot.to_string()).collect()
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_choice())
    }
}
