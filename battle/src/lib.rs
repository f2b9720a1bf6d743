//! Battle belief-state tracking and heuristic action selection for
//! Showdown-style battles.
//!
//! # Overview
//!
//! `geniusect-battle` turns the server's event log into a best-guess picture
//! of one battle and answers every decision point with a move, a switch or a
//! team order:
//!
//! ```text
//! geniusect-protocol (wire format)      geniusect-dex (reference data)
//!        │                                      │
//!        ▼                                      ▼
//! tracking ── Battle ◄── types (Pokemon, Team, Move, ...)
//!        │                                      │
//!        ▼                                      ▼
//!       ai ──────────► calc (damage, effectiveness)
//!        │
//!        ▼
//! session (one room: lines in, ClientMessage out)
//! ```
//!
//! # Main Types
//!
//! - [`Battle`] - Belief state of one battle, updated record by record
//! - [`BattleContext`] - Username, shared dex, hooks and selector weights
//! - [`Decision`] - A chosen move, switch or team order
//! - [`BattleSession`] - Drives one battle room end to end
//!
//! Our own side is known exactly from `|request|` payloads. The opponent is
//! only known through what the log reveals, so its abilities are candidate
//! sets and its moves default to the randomized-battle movepool.
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use geniusect_battle::{BattleContext, BattleSession};
//! use geniusect_dex::LocalDex;
//!
//! let dex = Arc::new(LocalDex::load_dir("data/")?);
//! let mut session = BattleSession::new("battle-gen7randombattle-1", BattleContext::new("Geniusect", dex));
//!
//! for message in session.handle_chunk(&frame)? {
//!     socket.send(message.to_wire_format()).await?;
//! }
//! ```

pub mod ai;
pub mod calc;
pub mod context;
pub mod error;
pub mod hooks;
pub mod session;
pub mod tracking;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use ai::{Decision, DecisionState, SelectorConfig, choose_action, choose_team_order};
pub use context::BattleContext;
pub use error::{BattleError, Result};
pub use hooks::{BattleEvent, BattleHooks, NoHooks};
pub use session::BattleSession;
pub use tracking::Battle;
pub use types::{EntryHazards, Move, Pokemon, SideCondition, Status, Team};

// Re-export commonly used protocol types
pub use geniusect_protocol::{ClientMessage, Seat};
