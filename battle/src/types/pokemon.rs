//! Pokemon belief state

use geniusect_dex::{Dex, Stat, StatTable, Type, to_id};
use geniusect_protocol::{Condition, Seat};

use super::abilities::AbilitySet;
use super::item::HeldItem;
use super::moves::Move;
use super::stats::{StatStages, estimate_hp, estimate_stat};
use super::status::Status;
use crate::error::Result;

/// The unique condition string of a fainted Pokemon
pub const FAINTED_CONDITION: &str = "0 fnt";

/// One Pokemon as far as we know it
///
/// Our own Pokemon carry exact stats and an exact ability; opponents carry
/// percentages, a candidate ability set and their whole possible movepool
/// until the battle reveals more.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    /// Species name as shown in the protocol ("Gastrodon-East")
    pub name: String,
    pub level: u8,

    /// Seat of the owning team
    pub seat: Seat,

    /// Last condition string seen ("250/301 par", "47/100", "0 fnt")
    pub condition: String,
    pub current_hp: u32,
    /// 0 until observed
    pub max_hp: u32,
    pub status: Status,
    pub active: bool,

    pub types: Vec<Type>,
    pub abilities: AbilitySet,
    pub item: HeldItem,
    pub base_stats: StatTable,
    /// Exact stat values, only ever known for our own Pokemon
    pub stats: Option<StatTable>,
    pub boosts: StatStages,
    pub substitute: bool,

    pub moves: Vec<Move>,
}

impl Pokemon {
    pub fn new(seat: Seat, name: impl Into<String>, level: u8, condition: &str) -> Self {
        let mut pokemon = Self {
            name: name.into(),
            level,
            seat,
            condition: String::new(),
            current_hp: 0,
            max_hp: 0,
            status: Status::Healthy,
            active: false,
            types: Vec::new(),
            abilities: AbilitySet::default(),
            item: HeldItem::Unknown,
            base_stats: StatTable::default(),
            stats: None,
            boosts: StatStages::new(),
            substitute: false,
            moves: Vec::new(),
        };
        pokemon.apply_condition(condition);
        pokemon
    }

    /// Normalized species id
    pub fn species_id(&self) -> String {
        to_id(&self.name)
    }

    /// Fill everything reference data knows about a species we have not
    /// seen the details of: types, candidate abilities, base stats and the
    /// randomized-battle movepool
    pub fn load_unknown(&mut self, dex: &dyn Dex) -> Result<()> {
        let species = dex.lookup_species(&self.name)?;
        self.types = species.types.clone();
        self.abilities = AbilitySet::candidates(species.abilities.iter().map(String::as_str));
        self.base_stats = species.base_stats;

        self.moves = dex
            .random_battle_moves(&self.name)?
            .iter()
            .map(|id| Move::from_dex(dex, id))
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }

    /// Fill from reference data, then overwrite with what the server told us
    /// about our own Pokemon
    pub fn load_known(
        &mut self,
        dex: &dyn Dex,
        ability: &str,
        item: &str,
        stats: StatTable,
        moves: &[String],
    ) -> Result<()> {
        let species = dex.lookup_species(&self.name)?;
        self.types = species.types.clone();
        self.base_stats = species.base_stats;
        self.abilities = AbilitySet::exact(ability);
        self.item = HeldItem::from_name(item);
        self.stats = Some(stats);

        self.moves = moves
            .iter()
            .map(|id| Move::from_dex(dex, id))
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }

    /// Re-read HP (and the fainted sentinel) from a condition string
    ///
    /// The status token is left alone; `-status` records carry status changes.
    pub fn apply_condition(&mut self, raw: &str) {
        let condition = Condition::parse(raw);
        self.condition = condition.raw.clone();

        match condition.current {
            Some(current) => {
                self.current_hp = current;
                if let Some(max) = condition.max {
                    self.max_hp = max;
                }
            }
            None => {
                self.current_hp = 0;
                if self.max_hp == 0 {
                    self.max_hp = 100;
                }
            }
        }

        if self.max_hp > 0 {
            self.current_hp = self.current_hp.min(self.max_hp);
        }

        if self.is_fainted() {
            self.current_hp = 0;
            self.status = Status::Fainted;
        }
    }

    /// Set a non-volatile status; a fainted Pokemon stays fainted
    ///
    /// Fainted itself is only set through the "0 fnt" condition.
    pub fn set_status(&mut self, status: Status) {
        if !self.is_fainted() && status != Status::Fainted {
            self.status = status;
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.condition == FAINTED_CONDITION
    }

    /// Remaining HP in [0, 1]; 1 while the maximum is unknown
    pub fn hp_fraction(&self) -> f64 {
        if self.is_fainted() {
            0.0
        } else if self.max_hp == 0 {
            1.0
        } else {
            (self.current_hp as f64 / self.max_hp as f64).min(1.0)
        }
    }

    /// Remaining HP as a whole percentage, rounded down
    pub fn hp_percent(&self) -> u32 {
        (self.hp_fraction() * 100.0).floor() as u32
    }

    /// Stat value, exact when known, otherwise a maximum-investment estimate
    pub fn stat(&self, stat: Stat) -> u32 {
        if let Some(stats) = &self.stats {
            return stats.get(stat);
        }
        let base = self.base_stats.get(stat);
        match stat {
            Stat::Hp => estimate_hp(base, self.level),
            _ => estimate_stat(base, self.level),
        }
    }

    /// Stat value with the current stage multiplier applied
    pub fn boosted_stat(&self, stat: Stat) -> f64 {
        self.stat(stat) as f64 * self.boosts.stat_multiplier(stat)
    }

    /// Absolute HP left, scaled against the (possibly estimated) HP stat
    pub fn estimated_hp(&self) -> f64 {
        (self.stat(Stat::Hp) as f64 * self.hp_fraction()).floor()
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }

    pub fn find_move(&self, id: &str) -> Option<&Move> {
        let id = to_id(id);
        self.moves.iter().find(|m| m.id() == id)
    }

    pub fn find_move_mut(&mut self, id: &str) -> Option<&mut Move> {
        let id = to_id(id);
        self.moves.iter_mut().find(|m| m.id() == id)
    }

    /// Mark a move disabled; returns false if this Pokemon does not know it
    pub fn cant_use_move(&mut self, id: &str) -> bool {
        match self.find_move_mut(id) {
            Some(mv) => {
                mv.disabled = true;
                true
            }
            None => false,
        }
    }

    pub fn on_switch_in(&mut self) {
        self.active = true;
    }

    /// Stages and substitute do not survive leaving the field
    pub fn on_switch_out(&mut self) {
        self.active = false;
        self.boosts.clear();
        self.substitute = false;
    }
}
