//! Heuristic action selector
//!
//! Scores every legal move and switch against the current belief state and
//! picks the best. Everything here is a pure function of the battle and its
//! context, so the same state always yields the same decision.

mod config;
mod decision;
mod moves;
mod preview;
mod selector;
mod status;
mod switch;

pub use config::SelectorConfig;
pub use decision::{Decision, DecisionState};
pub use moves::{
    accuracy, best_move_against, hazard_for_move, hazard_removal_score, hazard_setting_score,
    is_hazard_removal, score_move,
};
pub use preview::{choose_team_order, preview_score};
pub use selector::{best_move, choose_action, decision_state};
pub use status::{is_status_move, score_status};
pub use switch::{best_switch, hazard_adjusted, score_switch};
