//! Domain models shared between the persistence layer and the TUI. The intent
//! is that these types stay light-weight data holders so other layers can
//! focus on presentation and persistence logic. Keeping the commentary here
//! means later refactors can reconstruct the assumptions even if other context
//! is lost.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One performance slot in the recital program. The struct mirrors the JSON
/// objects stored on disk, so renaming a field here is a storage-format
/// change.
pub struct Dance {
    /// Display name of the dance. The name doubles as the stable identity for
    /// reordering, so it is assumed unique across the working list. That
    /// uniqueness is a caller responsibility: a duplicate name degrades drag
    /// tracking but never crashes anything.
    pub name: String,
    /// Title of the song the dance is set to.
    pub song: String,
    /// Performing artist shown next to the song.
    pub artist: String,
    /// Names of the performers in this slot. Order is cosmetic only (it is
    /// the order we join them for display), never semantically significant.
    pub dancers: Vec<String>,
}

impl Dance {
    /// Compose the `Song by Artist` string used in cards and the export
    /// table, gracefully omitting the "by" if the artist is blank.
    pub fn display_song(&self) -> String {
        if self.artist.trim().is_empty() {
            self.song.clone()
        } else {
            format!("{} by {}", self.song, self.artist)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_song_includes_artist() {
        let dance = Dance {
            name: "Opener".into(),
            song: "Overture".into(),
            artist: "Pit Band".into(),
            dancers: vec![],
        };
        assert_eq!(dance.display_song(), "Overture by Pit Band");
    }

    #[test]
    fn display_song_omits_blank_artist() {
        let dance = Dance {
            name: "Opener".into(),
            song: "Overture".into(),
            artist: "  ".into(),
            dancers: vec![],
        };
        assert_eq!(dance.display_song(), "Overture");
    }
}
