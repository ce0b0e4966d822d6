//! Hardcoded default program order. This is the list the app falls back to
//! when nothing has been persisted yet and the list that "Reset" restores.
//! The rosters deliberately overlap so the quick-change warnings show up out
//! of the box.

use crate::models::Dance;

/// Build the seed program. Returns a fresh allocation every call so callers
/// can hold one copy as the reset target and hand another to the controller.
pub fn seed_dances() -> Vec<Dance> {
    fn dance(name: &str, song: &str, artist: &str, dancers: &[&str]) -> Dance {
        Dance {
            name: name.to_string(),
            song: song.to_string(),
            artist: artist.to_string(),
            dancers: dancers.iter().map(|d| d.to_string()).collect(),
        }
    }

    vec![
        dance(
            "Opening Number",
            "Another Op'nin', Another Show",
            "Cole Porter",
            &["Avery", "Brooke", "Camila", "Dana"],
        ),
        dance(
            "Tiny Tappers",
            "Happy Feet",
            "Milton Ager",
            &["Elsie", "Faith", "Gemma"],
        ),
        dance(
            "Jazz Combo",
            "Sing, Sing, Sing",
            "Benny Goodman",
            &["Brooke", "Dana", "Harper"],
        ),
        dance(
            "Lyrical Solo",
            "Clair de Lune",
            "Claude Debussy",
            &["Camila"],
        ),
        dance(
            "Hip Hop Crew",
            "Jump Around",
            "House of Pain",
            &["Avery", "Harper", "Isla", "Jonah"],
        ),
        dance(
            "Ballet II",
            "Waltz of the Flowers",
            "Tchaikovsky",
            &["Elsie", "Gemma", "Isla"],
        ),
        dance(
            "Contemporary",
            "River",
            "Leon Bridges",
            &["Dana", "Faith", "Jonah"],
        ),
        dance(
            "Finale",
            "One",
            "Marvin Hamlisch",
            &[
                "Avery", "Brooke", "Camila", "Dana", "Elsie", "Faith", "Gemma", "Harper", "Isla",
                "Jonah",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_names_are_unique() {
        let dances = seed_dances();
        let names: HashSet<_> = dances.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), dances.len());
    }

    #[test]
    fn seed_has_adjacent_overlap() {
        // The default order should demonstrate at least one quick change.
        let dances = seed_dances();
        let any_overlap = dances.windows(2).any(|pair| {
            pair[0]
                .dancers
                .iter()
                .any(|d| pair[1].dancers.contains(d))
        });
        assert!(any_overlap);
    }
}
