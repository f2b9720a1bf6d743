//! Event log interpreter: applies battle records to the belief state

use geniusect_dex::to_id;
use geniusect_protocol::{
    BattleRecord, Callback, ChoiceError, PokemonDetails, PokemonIdent, Seat,
};

use super::battle::Battle;
use super::species::resolve_species;
use crate::context::BattleContext;
use crate::error::{BattleError, Result};
use crate::types::{HeldItem, Move, Pokemon, SideCondition, Status};

impl Battle {
    /// Parse one tokenized record (`fields[0]` is the tag) and apply it
    pub fn update_from_fields(&mut self, ctx: &BattleContext, fields: &[&str]) -> Result<()> {
        let record = BattleRecord::parse(fields)?;
        self.update(ctx, &record)
    }

    /// Update battle state from one record
    pub fn update(&mut self, ctx: &BattleContext, record: &BattleRecord) -> Result<()> {
        match record {
            // === Battle Initialization ===
            BattleRecord::Player { seat, username } => {
                self.team_mut(*seat).username = username.clone();
                if ctx.is_bot_username(username) {
                    self.set_player(*seat);
                }
            }

            BattleRecord::TeamSize { seat, size } => {
                self.team_mut(*seat).team_size = *size;
            }

            BattleRecord::Gen(generation) => {
                self.generation = *generation;
            }

            BattleRecord::Tier(tier) => {
                self.format = tier.clone();
            }

            BattleRecord::Poke { seat, details, .. } => {
                self.handle_reveal(ctx, *seat, details, None, false)?;
            }

            BattleRecord::TeamPreview => {
                self.team_preview = true;
            }

            // === Progress ===
            BattleRecord::Request(Some(request)) => {
                self.update_from_request(ctx, request)?;
            }

            BattleRecord::Request(None) => {}

            BattleRecord::Turn(_) => {
                self.turn += 2;
                self.team_preview = false;
            }

            BattleRecord::Win(winner) => {
                self.ended = true;
                self.winner = Some(winner.clone());
            }

            BattleRecord::Tie => {
                self.ended = true;
                self.tie = true;
            }

            BattleRecord::Error(error) => self.handle_choice_error(error)?,

            BattleRecord::Callback(callback) => self.handle_callback(callback)?,

            // === Major Actions ===
            BattleRecord::Switch {
                pokemon,
                details,
                condition,
                ..
            } => {
                let raw = condition.as_ref().map(|c| c.raw.as_str());
                self.handle_reveal(ctx, pokemon.seat, details, raw, true)?;
            }

            BattleRecord::Move {
                pokemon, move_name, ..
            } => {
                self.handle_move(ctx, pokemon, move_name);
            }

            // Fainting is carried by the "0 fnt" condition of -damage
            BattleRecord::Faint(_) | BattleRecord::Cant { .. } => {}

            // === Minor Actions ===
            BattleRecord::Damage { pokemon, condition }
            | BattleRecord::Heal { pokemon, condition }
            | BattleRecord::SetHp { pokemon, condition } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.apply_condition(&condition.raw);
                }
            }

            BattleRecord::Status { pokemon, status } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.set_status(Status::from_protocol(status));
                }
            }

            BattleRecord::CureStatus { pokemon, .. } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.set_status(Status::Healthy);
                }
            }

            BattleRecord::Boost {
                pokemon,
                stat,
                amount,
            } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.boosts.boost(*stat, *amount);
                }
            }

            BattleRecord::Unboost {
                pokemon,
                stat,
                amount,
            } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.boosts.unboost(*stat, *amount);
                }
            }

            BattleRecord::SideStart { side, condition } => {
                match SideCondition::from_protocol(condition) {
                    Some(cond) => {
                        let team = self.team_mut(side.seat);
                        if !team.add_condition(cond) {
                            tracing::debug!(seat = side.seat.as_str(), %cond, "side condition already at its cap");
                        }
                    }
                    None => tracing::trace!(condition = condition.as_str(), "untracked side condition"),
                }
            }

            BattleRecord::SideEnd { side, condition } => {
                if let Some(cond) = SideCondition::from_protocol(condition) {
                    self.team_mut(side.seat).remove_condition(cond);
                }
            }

            BattleRecord::Item { pokemon, item } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.item = HeldItem::from_name(item);
                }
            }

            BattleRecord::EndItem { pokemon, .. } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.item = HeldItem::None;
                }
            }

            BattleRecord::Ability { pokemon, ability } => {
                if let Some(poke) = self.target_mut(pokemon) {
                    poke.abilities.narrow(ability);
                }
            }

            BattleRecord::Start { pokemon, effect } => {
                if is_substitute(effect)
                    && let Some(poke) = self.target_mut(pokemon)
                {
                    poke.substitute = true;
                }
            }

            BattleRecord::End { pokemon, effect } => {
                if is_substitute(effect)
                    && let Some(poke) = self.target_mut(pokemon)
                {
                    poke.substitute = false;
                }
            }

            // Weather, field effects, crits and the like do not feed the heuristics
            BattleRecord::Other { tag, .. } => {
                tracing::trace!(tag = tag.as_str(), "ignored record");
            }
        }
        Ok(())
    }

    /// Active Pokemon of the side a record refers to
    fn target_mut(&mut self, ident: &PokemonIdent) -> Option<&mut Pokemon> {
        let target = self.active_mut(ident.seat);
        if target.is_none() {
            tracing::warn!(
                seat = ident.seat.as_str(),
                pokemon = ident.name.as_str(),
                "record for a side with no active Pokemon"
            );
        }
        target
    }

    /// `switch`, `drag` and `poke`: find or create the Pokemon, and mark it
    /// active for a switch
    fn handle_reveal(
        &mut self,
        ctx: &BattleContext,
        seat: Seat,
        details: &PokemonDetails,
        condition: Option<&str>,
        switch_in: bool,
    ) -> Result<()> {
        let resolved = resolve_species(&details.species);
        let team = self.team_mut(seat);

        let index = match team.position(&resolved.name) {
            Some(index) => index,
            None => {
                if let Some(replaced) = &resolved.replaces
                    && team.remove(replaced)
                {
                    tracing::debug!(seat = seat.as_str(), replaced = replaced.as_str(), "form replaced");
                }

                let mut pokemon = Pokemon::new(
                    seat,
                    resolved.name.clone(),
                    details.level_or_default(),
                    condition.unwrap_or("100/100"),
                );
                pokemon.load_unknown(ctx.dex())?;
                team.add(pokemon)?;
                tracing::debug!(seat = seat.as_str(), species = resolved.name.as_str(), "new Pokemon seen");
                team.len() - 1
            }
        };

        if switch_in {
            team.set_active(index);
        }
        Ok(())
    }

    /// A move was used: spend PP and, for the opponent, remember a move
    /// outside its expected movepool
    fn handle_move(&mut self, ctx: &BattleContext, ident: &PokemonIdent, move_name: &str) {
        let is_bot = ident.seat == self.player_id;
        let Some(poke) = self.target_mut(ident) else {
            return;
        };

        if let Some(mv) = poke.find_move_mut(move_name) {
            mv.current_pp = mv.current_pp.saturating_sub(1);
            return;
        }

        if !is_bot {
            match Move::from_dex(ctx.dex(), &to_id(move_name)) {
                Ok(mv) => poke.moves.push(mv),
                Err(e) => tracing::warn!(error = %e, "revealed move has no reference data"),
            }
        }
    }

    /// Adjust the state so that the next choice avoids what was rejected
    ///
    /// Rejections that a new choice from the same state would repeat are
    /// returned as [`BattleError::ChoiceRejected`].
    fn handle_choice_error(&mut self, error: &ChoiceError) -> Result<()> {
        tracing::warn!(message = error.message(), "choice rejected");
        match error {
            ChoiceError::MustSwitch(_) => self.force_switch = true,
            ChoiceError::CantSwitch(_) => self.is_trapped = true,
            ChoiceError::InvalidMove(message) => {
                let Some(name) = error.disabled_move() else {
                    return Err(BattleError::ChoiceRejected(message.clone()));
                };
                self.cant_take_action(&to_id(name))
                    .map_err(|_| BattleError::ChoiceRejected(message.clone()))?;
            }
            ChoiceError::MegaEvolve(_) => {
                if let Some(active) = self.current_active_move_metadata.as_mut() {
                    active.can_mega_evo = false;
                }
            }
            ChoiceError::InvalidTarget(message)
            | ChoiceError::NoPokemon(message)
            | ChoiceError::BattleCrashed(message)
            | ChoiceError::Unknown(message) => {
                return Err(BattleError::ChoiceRejected(message.clone()));
            }
        }
        Ok(())
    }

    fn handle_callback(&mut self, callback: &Callback) -> Result<()> {
        match callback {
            Callback::Cant {
                move_id: Some(move_id),
            } => self.cant_take_action(move_id),
            Callback::Cant { move_id: None } => Ok(()),
            Callback::Trapped => {
                self.is_trapped = true;
                Ok(())
            }
            Callback::Other(kind) => {
                tracing::debug!(kind = kind.as_str(), "unhandled callback");
                Ok(())
            }
        }
    }

    /// Disable a move of our active Pokemon
    pub fn cant_take_action(&mut self, move_id: &str) -> Result<()> {
        let seat = self.player_id;
        let active = self
            .active_mut(seat)
            .ok_or(BattleError::NoActivePokemon(seat))?;
        if active.cant_use_move(move_id) {
            Ok(())
        } else {
            Err(BattleError::MoveNotFound(move_id.to_string()))
        }
    }
}

fn is_substitute(effect: &str) -> bool {
    to_id(effect).ends_with("substitute")
}
