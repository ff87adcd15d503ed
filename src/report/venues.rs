use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub name: &'static str,
    pub link: &'static str,
    pub map_embed: Option<&'static str>,
}

const fn venue(name: &'static str, link: &'static str, map_embed: Option<&'static str>) -> Venue {
    Venue {
        name,
        link,
        map_embed,
    }
}

lazy_static! {
    /// Location → suggested venues, keyed by lowercase city name.
    static ref VENUES: HashMap<&'static str, Vec<Venue>> = HashMap::from([
        (
            "almaty",
            vec![
                venue(
                    "Invictus Fitness Dostyk",
                    "https://www.google.com/maps/search/?api=1&query=Invictus+Fitness+Dostyk+Almaty",
                    Some(r#"<iframe src="https://www.google.com/maps?q=Invictus+Fitness+Dostyk+Almaty&output=embed" width="400" height="300" loading="lazy"></iframe>"#),
                ),
                venue(
                    "World Class Almaty",
                    "https://www.google.com/maps/search/?api=1&query=World+Class+Almaty",
                    Some(r#"<iframe src="https://www.google.com/maps?q=World+Class+Almaty&output=embed" width="400" height="300" loading="lazy"></iframe>"#),
                ),
                venue(
                    "Fitness Palace Almaty",
                    "https://www.google.com/maps/search/?api=1&query=Fitness+Palace+Almaty",
                    None,
                ),
            ],
        ),
        (
            "astana",
            vec![
                venue(
                    "Invictus Fitness Astana",
                    "https://www.google.com/maps/search/?api=1&query=Invictus+Fitness+Astana",
                    Some(r#"<iframe src="https://www.google.com/maps?q=Invictus+Fitness+Astana&output=embed" width="400" height="300" loading="lazy"></iframe>"#),
                ),
                venue(
                    "Olympic Fitness Astana",
                    "https://www.google.com/maps/search/?api=1&query=Olympic+Fitness+Astana",
                    None,
                ),
            ],
        ),
        (
            "shymkent",
            vec![venue(
                "Arena Fitness Shymkent",
                "https://www.google.com/maps/search/?api=1&query=Arena+Fitness+Shymkent",
                None,
            )],
        ),
        // Listed location without partner venues yet.
        ("karaganda", Vec::new()),
    ]);
}

/// Venues for a location, matched case-insensitively after trimming.
/// `None` when the location is not in the table.
pub fn venues_for(location: &str) -> Option<&'static [Venue]> {
    let key = location.trim().to_lowercase();
    VENUES.get(key.as_str()).map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let a = venues_for("Almaty").unwrap();
        let b = venues_for("  ALMATY ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].name, "Invictus Fitness Dostyk");
    }

    #[test]
    fn unknown_and_empty_entries() {
        assert!(venues_for("Atlantis").is_none());
        assert!(venues_for("").is_none());
        assert_eq!(venues_for("Karaganda").map(<[Venue]>::len), Some(0));
    }
}
