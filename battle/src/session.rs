//! Per-room driver: feeds server lines into a [`Battle`] and answers the
//! decision points with outbound commands

use geniusect_protocol::{
    BattleRecord, Callback, ChoiceError, ClientCommand, ClientMessage, ParseError,
    parse_server_message,
};

use crate::ai::{Decision, choose_action, choose_team_order};
use crate::context::BattleContext;
use crate::error::Result;
use crate::tracking::Battle;

/// One battle room
///
/// Sessions share nothing mutable; any number of them can run side by side
/// over the same [`BattleContext`] dex.
#[derive(Debug)]
pub struct BattleSession {
    pub room_id: String,
    battle: Battle,
    ctx: BattleContext,
    /// Last request said to wait for the opponent
    waiting: bool,
    /// A forced switch is owed once its turn's log has been applied
    pending_switch: bool,
    /// Log records have been applied since our last choice
    fresh_log: bool,
}

impl BattleSession {
    pub fn new(room_id: impl Into<String>, ctx: BattleContext) -> Self {
        Self {
            room_id: room_id.into(),
            battle: Battle::new(),
            ctx,
            waiting: false,
            pending_switch: false,
            fresh_log: false,
        }
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn context(&self) -> &BattleContext {
        &self.ctx
    }

    /// Handle a whole server frame; a leading `>ROOMID` line is skipped
    ///
    /// The frame is treated as one batch: a forced switch is answered after
    /// every line of it has been applied. Stops at the first fatal error.
    pub fn handle_chunk(&mut self, chunk: &str) -> Result<Vec<ClientMessage>> {
        let mut outbound = Vec::new();
        for line in chunk.lines() {
            if let Some(room) = line.strip_prefix('>') {
                if room != self.room_id {
                    tracing::warn!(room, expected = self.room_id.as_str(), "frame for another room");
                }
                continue;
            }
            if let Some(message) = self.handle_line(line)? {
                outbound.push(message);
            }
        }
        if let Some(message) = self.end_batch()? {
            outbound.push(message);
        }
        Ok(outbound)
    }

    /// Close a batch of lines fed through [`BattleSession::handle_line`]
    ///
    /// The server sends a force-switch request ahead of the log of the turn
    /// that caused it. The switch is chosen here, once that log is in.
    pub fn end_batch(&mut self) -> Result<Option<ClientMessage>> {
        if !self.pending_switch || !self.fresh_log || self.battle.ended || self.waiting {
            return Ok(None);
        }
        let decision = choose_action(&self.ctx, &self.battle)?;
        Ok(Some(self.answer(&decision)))
    }

    /// Handle one protocol line
    ///
    /// Plain log text and records that fail to parse are skipped.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<ClientMessage>> {
        match parse_server_message(line) {
            Ok(record) => self.handle_record(&record),
            Err(ParseError::EmptyMessage) => Ok(None),
            Err(e) => {
                tracing::warn!(room = self.room_id.as_str(), error = %e, line, "skipping record");
                Ok(None)
            }
        }
    }

    /// Apply one record and, at a decision point, return the command to send
    ///
    /// Non-fatal tracking errors are logged and skipped. A fatal error leaves
    /// the battle unusable; the caller should forfeit it with
    /// [`BattleSession::forfeit`].
    pub fn handle_record(&mut self, record: &BattleRecord) -> Result<Option<ClientMessage>> {
        if let Err(e) = self.battle.update(&self.ctx, record) {
            if e.is_fatal() {
                tracing::error!(room = self.room_id.as_str(), error = %e, "battle state lost");
                return Err(e);
            }
            tracing::warn!(room = self.room_id.as_str(), error = %e, "record skipped");
            return Ok(None);
        }

        match record {
            BattleRecord::Request(Some(request)) => {
                self.waiting = request.wait;
                self.pending_switch = request.is_force_switch() && !request.wait;
            }
            BattleRecord::Request(None) => {}
            _ => self.fresh_log = true,
        }
        if self.battle.ended || self.waiting {
            return Ok(None);
        }

        let decide = match record {
            BattleRecord::TeamPreview | BattleRecord::Turn(_) => true,
            // Already preceded by its log: answer now rather than at the batch end
            BattleRecord::Request(Some(request)) => request.is_force_switch() && self.fresh_log,
            // The server bounced our last choice and waits for another
            BattleRecord::Callback(Callback::Trapped | Callback::Cant { .. })
            | BattleRecord::Error(
                ChoiceError::MustSwitch(_)
                | ChoiceError::CantSwitch(_)
                | ChoiceError::InvalidMove(_)
                | ChoiceError::MegaEvolve(_),
            ) => true,
            _ => false,
        };
        if !decide {
            return Ok(None);
        }

        let decision = if matches!(record, BattleRecord::TeamPreview) {
            choose_team_order(&self.ctx, &self.battle)
        } else {
            choose_action(&self.ctx, &self.battle)?
        };
        Ok(Some(self.answer(&decision)))
    }

    /// Render a decision and mark the current batch as answered
    fn answer(&mut self, decision: &Decision) -> ClientMessage {
        self.pending_switch = false;
        self.fresh_log = false;
        self.command_for(decision)
    }

    /// Wrap a decision for this room, tagged with the latest request id
    pub fn command_for(&self, decision: &Decision) -> ClientMessage {
        ClientMessage::new(
            self.room_id.clone(),
            decision.to_command(self.battle.request_id),
        )
    }

    pub fn forfeit(&self) -> ClientMessage {
        ClientMessage::new(self.room_id.clone(), ClientCommand::Forfeit)
    }
}
