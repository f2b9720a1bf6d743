//! Type matchups, with the defender's immunity abilities and items folded in

use geniusect_dex::{Type, TypeChart};

use crate::types::Pokemon;

/// Abilities that soften super-effective hits
const FILTER_ABILITIES: [&str; 3] = ["solidrock", "filter", "prismarmor"];

/// Abilities that make the holder immune to one type
const IMMUNITY_ABILITIES: [(&str, Type); 4] = [
    ("levitate", Type::Ground),
    ("waterabsorb", Type::Water),
    ("voltabsorb", Type::Electric),
    ("flashfire", Type::Fire),
];

/// Product of the chart multipliers over every defending type
///
/// Code 1 is 2.0, code 2 is 0.5, code 3 is 0.0 and anything else is 1.0.
pub fn type_effectiveness(chart: &TypeChart, attack: Type, defenders: &[Type]) -> f64 {
    chart.effectiveness(attack, defenders)
}

/// Multiplier from the defender's ability
///
/// Any candidate ability counts, since these only ever help the defender.
pub fn defender_ability_modifier(chart: &TypeChart, attack: Type, defender: &Pokemon) -> f64 {
    let abilities = &defender.abilities;
    if FILTER_ABILITIES.iter().any(|a| abilities.contains(a))
        && type_effectiveness(chart, attack, &defender.types) > 1.0
    {
        return 0.75;
    }

    let immune = IMMUNITY_ABILITIES
        .iter()
        .any(|(ability, ty)| *ty == attack && abilities.contains(ability));
    if immune { 0.0 } else { 1.0 }
}

/// Effectiveness of an attacking type against a Pokemon: chart, ability and
/// Air Balloon
pub fn effectiveness_against(chart: &TypeChart, attack: Type, defender: &Pokemon) -> f64 {
    let balloon = if attack == Type::Ground && defender.item.is("airballoon") {
        0.0
    } else {
        1.0
    };
    balloon * type_effectiveness(chart, attack, &defender.types) * defender_ability_modifier(chart, attack, defender)
}

/// Check if the defender takes nothing from a type
pub fn is_immune_to(chart: &TypeChart, attack: Type, defender: &Pokemon) -> bool {
    effectiveness_against(chart, attack, defender) == 0.0
}
