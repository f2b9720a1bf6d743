//! Species name resolution for switch-ins and team preview

/// A species name as the roster should store it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpecies {
    /// Name to store and look up
    pub name: String,
    /// Earlier form this one replaces in the roster, if any
    /// ("Charizard" for "Charizard-Mega-X", "Gastrodon" for "Gastrodon-East")
    pub replaces: Option<String>,
}

/// Resolve a species name from protocol details
///
/// - `Name-*` (team preview placeholder for an unspecified forme) becomes `Name`
/// - `Name-Mega...` keeps its name and replaces `Name`
/// - `Name-Form` keeps its name and replaces `Name`, unless the suffix is
///   just "mega"
pub fn resolve_species(name: &str) -> ResolvedSpecies {
    let name = name.trim();

    if let Some(base) = name.strip_suffix("-*") {
        return ResolvedSpecies {
            name: base.to_string(),
            replaces: None,
        };
    }

    let lower = name.to_ascii_lowercase();
    if let Some(pos) = lower.find("-mega")
        && pos > 0
    {
        return ResolvedSpecies {
            name: name.to_string(),
            replaces: Some(name[..pos].to_string()),
        };
    }

    match name.split_once('-') {
        Some((base, form))
            if !base.is_empty() && !form.is_empty() && !form.eq_ignore_ascii_case("mega") =>
        {
            ResolvedSpecies {
                name: name.to_string(),
                replaces: Some(base.to_string()),
            }
        }
        _ => ResolvedSpecies {
            name: name.to_string(),
            replaces: None,
        },
    }
}
