//! Damage & effectiveness engine
//!
//! Pure functions over the belief state and the reference data.

mod damage;
mod effectiveness;
mod modifiers;

pub use damage::{base_damage, damage};
pub use effectiveness::{
    defender_ability_modifier, effectiveness_against, is_immune_to, type_effectiveness,
};
pub use modifiers::{ability_modifier, burn_modifier, item_modifier, side_modifier, stab_modifier};
