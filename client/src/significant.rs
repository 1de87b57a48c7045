/// Territories that get the enhanced "significant location" treatment.
/// Membership is case-sensitive against the exact in-game names.
const SIGNIFICANT_TERRITORIES: &[&str] = &[
    "Llevigar",
    "Gelibord",
    "Olux",
    "Rodoroc",
    "Eltom",
    "Cinfras",
    "Ahmsord",
    "Kandon-Beda",
    "Thesead",
    "Corkus City",
    "Selchar",
    "Nemract",
    "Almuj",
    "Ragni",
    "Detlas",
    "Lutho",
    "Nesaak",
    "Troms",
    "Alekin",
];

pub fn is_significant(name: &str) -> bool {
    SIGNIFICANT_TERRITORIES.contains(&name)
}

/// Sanitize a territory name into the slug used for per-territory
/// localization keys: lowercase, spaces replaced by underscores.
pub fn locale_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::{is_significant, locale_slug};

    #[test]
    fn known_cities_are_significant() {
        assert!(is_significant("Ragni"));
        assert!(is_significant("Detlas"));
        assert!(is_significant("Corkus City"));
        assert!(is_significant("Kandon-Beda"));
    }

    #[test]
    fn unknown_territories_are_not() {
        assert!(!is_significant("Maltic"));
        assert!(!is_significant("Ragni Outskirts"));
        assert!(!is_significant(""));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_significant("ragni"));
        assert!(!is_significant("DETLAS"));
    }

    #[test]
    fn slug_lowercases_and_underscores() {
        assert_eq!(locale_slug("Corkus City"), "corkus_city");
        assert_eq!(locale_slug("Ragni"), "ragni");
        assert_eq!(locale_slug("Kandon-Beda"), "kandon-beda");
    }
}
