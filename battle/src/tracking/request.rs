//! Request synchronization: the server's authoritative view of our side

use geniusect_dex::{StatTable, to_id};
use geniusect_protocol::{ActivePokemon, BattleRequest, SidePokemon};

use super::battle::Battle;
use crate::context::BattleContext;
use crate::error::{BattleError, Result};
use crate::types::{MAX_TEAM_SIZE, Pokemon, Status};

impl Battle {
    /// Apply a `request` payload
    ///
    /// Our roster is rebuilt from the side listing (exact stats, ability,
    /// item and moves); boosts and substitutes survive for members that are
    /// still there, and side conditions are left alone.
    pub fn update_from_request(&mut self, ctx: &BattleContext, request: &BattleRequest) -> Result<()> {
        if let Some(side) = &request.side {
            if let Some(seat) = side.seat() {
                self.set_player(seat);
            }

            if side.pokemon.len() > MAX_TEAM_SIZE {
                let extra = &side.pokemon[MAX_TEAM_SIZE];
                return Err(BattleError::RosterOverflow {
                    seat: self.player_id,
                    species: extra.parsed_details().species,
                });
            }

            let previous = self.bot_team().members().to_vec();
            let members = side
                .pokemon
                .iter()
                .map(|entry| self.known_member(ctx, entry, &previous))
                .collect::<Result<Vec<_>>>()?;
            self.bot_team_mut().replace_members(members)?;
        }

        self.current_active_move_metadata = request.first_active().cloned();
        if let Some(active) = request.first_active() {
            self.sync_move_slots(active);
        }

        self.force_switch = request.is_force_switch();
        self.is_trapped = request.first_active().is_some_and(|a| a.trapped);
        self.team_preview = request.team_preview;
        self.request_id = request.rqid;

        tracing::debug!(
            rqid = ?request.rqid,
            force_switch = self.force_switch,
            trapped = self.is_trapped,
            team_preview = self.team_preview,
            "request applied"
        );
        Ok(())
    }

    fn known_member(&self, ctx: &BattleContext, entry: &SidePokemon, previous: &[Pokemon]) -> Result<Pokemon> {
        let details = entry.parsed_details();
        let condition = entry.parsed_condition();
        let mut pokemon = Pokemon::new(
            self.player_id,
            details.species.clone(),
            details.level_or_default(),
            &entry.condition,
        );

        let before = previous.iter().find(|p| p.name == pokemon.name);

        // A fainted entry carries no maximum; keep the one we saw last
        let max_hp = condition
            .max
            .or_else(|| before.map(|p| p.max_hp).filter(|&hp| hp > 0))
            .unwrap_or(pokemon.max_hp);
        pokemon.max_hp = max_hp;

        let stats = StatTable::new(
            max_hp,
            entry.stats.atk,
            entry.stats.def,
            entry.stats.spa,
            entry.stats.spd,
            entry.stats.spe,
        );
        pokemon.load_known(ctx.dex(), entry.ability_id(), &entry.item, stats, &entry.moves)?;

        if let Some(status) = &condition.status {
            pokemon.set_status(Status::from_protocol(status));
        }
        pokemon.active = entry.active;

        if let Some(before) = before
            && entry.active
        {
            pokemon.boosts = before.boosts;
            pokemon.substitute = before.substitute;
        }
        Ok(pokemon)
    }

    /// Copy PP and disabled flags from the request onto our active moves
    ///
    /// Moves missing from the request (locked into another move, Encore,
    /// Choice items) are disabled.
    fn sync_move_slots(&mut self, active: &ActivePokemon) {
        let Some(pokemon) = self.active_mut(self.player_id) else {
            return;
        };

        for mv in &mut pokemon.moves {
            let slot = active.moves.iter().find(|slot| {
                let id = to_id(&slot.id);
                id == mv.id() || id.trim_end_matches(|c: char| c.is_ascii_digit()) == mv.id()
            });

            match slot {
                Some(slot) => {
                    if let Some(pp) = slot.pp {
                        mv.current_pp = pp;
                    }
                    if let Some(max_pp) = slot.max_pp {
                        mv.max_pp = max_pp;
                    }
                    mv.disabled = slot.disabled;
                }
                None => mv.disabled = true,
            }
        }
    }
}
