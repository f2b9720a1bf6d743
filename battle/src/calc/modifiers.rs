//! Damage modifiers: STAB, burn, items, abilities and screens

use geniusect_dex::{MoveCategory, MoveData, MoveFlag, Type, TypeChart};

use super::effectiveness::type_effectiveness;
use crate::types::{Pokemon, Status, Team};

/// Same-type attack bonus
pub fn stab_modifier(move_data: &MoveData, attacker: &Pokemon) -> f64 {
    if attacker.has_type(move_data.move_type) { 1.5 } else { 1.0 }
}

/// Burn halves physical damage unless the attacker may have Guts
pub fn burn_modifier(move_data: &MoveData, attacker: &Pokemon) -> f64 {
    if attacker.status == Status::Burned
        && move_data.category == MoveCategory::Physical
        && !attacker.abilities.contains("guts")
    {
        0.5
    } else {
        1.0
    }
}

/// Attacker's held item; only a revealed item counts
pub fn item_modifier(chart: &TypeChart, move_data: &MoveData, attacker: &Pokemon, defender: &Pokemon) -> f64 {
    let Some(item) = attacker.item.id() else {
        return 1.0;
    };

    match (item, move_data.category) {
        ("lifeorb", _) => 1.3,
        ("expertbelt", _) if type_effectiveness(chart, move_data.move_type, &defender.types) > 1.0 => 1.2,
        ("choicespecs", MoveCategory::Special) => 1.5,
        ("choiceband", MoveCategory::Physical) => 1.5,
        ("thickclub", MoveCategory::Physical) if is_thick_club_user(attacker) => 1.5,
        _ => 1.0,
    }
}

fn is_thick_club_user(pokemon: &Pokemon) -> bool {
    let species = pokemon.species_id();
    species.starts_with("cubone") || species.starts_with("marowak")
}

/// Abilities of both sides that scale the damage of this particular move
///
/// The attacker's boosting abilities count if they are a candidate. On the
/// defender, Fluffy's contact halving counts as a candidate too, while its
/// Fire weakness only counts once revealed.
pub fn ability_modifier(chart: &TypeChart, move_data: &MoveData, attacker: &Pokemon, defender: &Pokemon) -> f64 {
    let mut modifier = 1.0;

    if attacker.abilities.contains("tintedlens")
        && type_effectiveness(chart, move_data.move_type, &defender.types) < 1.0
    {
        modifier *= 2.0;
    } else if attacker.abilities.contains("guts")
        && attacker.status.is_afflicted()
        && move_data.category == MoveCategory::Physical
    {
        modifier *= 1.5;
    }

    if move_data.has_flag(MoveFlag::Contact) {
        if defender.abilities.contains("fluffy") {
            modifier *= 0.5;
        }
    } else if move_data.move_type == Type::Fire && defender.abilities.known() == Some("fluffy") {
        modifier *= 2.0;
    }

    modifier
}

/// Screens on the defending side
pub fn side_modifier(move_data: &MoveData, defending_side: &Team) -> f64 {
    match move_data.category {
        MoveCategory::Special if defending_side.light_screen => 0.5,
        MoveCategory::Physical if defending_side.reflect => 0.5,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AbilitySet, HeldItem};
    use geniusect_protocol::Seat;

    fn pokemon(name: &str, types: &[Type]) -> Pokemon {
        let mut pokemon = Pokemon::new(Seat::P1, name, 100, "100/100");
        pokemon.types = types.to_vec();
        pokemon
    }

    fn earthquake() -> MoveData {
        MoveData::new("earthquake", Type::Ground, MoveCategory::Physical, 100, 100)
    }

    fn flamethrower() -> MoveData {
        MoveData::new("flamethrower", Type::Fire, MoveCategory::Special, 90, 100)
    }

    #[test]
    fn test_stab() {
        let garchomp = pokemon("Garchomp", &[Type::Dragon, Type::Ground]);
        assert_eq!(stab_modifier(&earthquake(), &garchomp), 1.5);
        assert_eq!(stab_modifier(&flamethrower(), &garchomp), 1.0);
    }

    #[test]
    fn test_burn() {
        let mut garchomp = pokemon("Garchomp", &[Type::Dragon, Type::Ground]);
        garchomp.status = Status::Burned;
        assert_eq!(burn_modifier(&earthquake(), &garchomp), 0.5);
        assert_eq!(burn_modifier(&flamethrower(), &garchomp), 1.0);

        garchomp.abilities = AbilitySet::exact("Guts");
        assert_eq!(burn_modifier(&earthquake(), &garchomp), 1.0);
    }

    #[test]
    fn test_items() {
        let chart = TypeChart::standard();
        let mut attacker = pokemon("Garchomp", &[Type::Dragon, Type::Ground]);
        let heatran = pokemon("Heatran", &[Type::Fire, Type::Steel]);
        let skarmory = pokemon("Skarmory", &[Type::Steel, Type::Flying]);

        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &heatran), 1.0);

        attacker.item = HeldItem::from_name("Life Orb");
        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &heatran), 1.3);

        attacker.item = HeldItem::from_name("Expert Belt");
        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &heatran), 1.2);
        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &skarmory), 1.0);

        attacker.item = HeldItem::from_name("Choice Band");
        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &heatran), 1.5);
        assert_eq!(item_modifier(&chart, &flamethrower(), &attacker, &heatran), 1.0);

        attacker.item = HeldItem::from_name("Thick Club");
        assert_eq!(item_modifier(&chart, &earthquake(), &attacker, &heatran), 1.0);
        let marowak = Pokemon {
            item: HeldItem::from_name("Thick Club"),
            ..pokemon("Marowak-Alola", &[Type::Fire, Type::Ghost])
        };
        assert_eq!(item_modifier(&chart, &earthquake(), &marowak, &heatran), 1.5);
    }

    #[test]
    fn test_attacker_abilities() {
        let chart = TypeChart::standard();
        let mut attacker = pokemon("Yanmega", &[Type::Bug, Type::Flying]);
        let heatran = pokemon("Heatran", &[Type::Fire, Type::Steel]);
        let bug_buzz = MoveData::new("bugbuzz", Type::Bug, MoveCategory::Special, 90, 100);

        attacker.abilities = AbilitySet::candidates(["speedboost", "tintedlens"]);
        assert_eq!(ability_modifier(&chart, &bug_buzz, &attacker, &heatran), 2.0);

        attacker.abilities = AbilitySet::exact("guts");
        attacker.status = Status::Poisoned;
        assert_eq!(ability_modifier(&chart, &earthquake(), &attacker, &heatran), 1.5);
        assert_eq!(ability_modifier(&chart, &bug_buzz, &attacker, &heatran), 1.0);
    }

    #[test]
    fn test_fluffy() {
        let chart = TypeChart::standard();
        let attacker = pokemon("Garchomp", &[Type::Dragon, Type::Ground]);
        let mut bewear = pokemon("Bewear", &[Type::Normal, Type::Fighting]);
        bewear.abilities = AbilitySet::candidates(["fluffy", "klutz"]);
        let outrage = MoveData::new("outrage", Type::Dragon, MoveCategory::Physical, 120, 100)
            .with_flags(&[MoveFlag::Contact]);

        assert_eq!(ability_modifier(&chart, &outrage, &attacker, &bewear), 0.5);
        // Fire weakness only once Fluffy is confirmed
        assert_eq!(ability_modifier(&chart, &flamethrower(), &attacker, &bewear), 1.0);
        bewear.abilities.narrow("Fluffy");
        assert_eq!(ability_modifier(&chart, &flamethrower(), &attacker, &bewear), 2.0);
    }

    #[test]
    fn test_screens() {
        let mut side = Team::new(Seat::P2);
        assert_eq!(side_modifier(&earthquake(), &side), 1.0);
        side.reflect = true;
        assert_eq!(side_modifier(&earthquake(), &side), 0.5);
        assert_eq!(side_modifier(&flamethrower(), &side), 1.0);
        side.light_screen = true;
        assert_eq!(side_modifier(&flamethrower(), &side), 0.5);
    }
}
