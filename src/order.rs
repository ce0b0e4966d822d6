//! The working-list controller: holds the current program order in memory and
//! owns every way it can change. All reordering funnels through [`ProgramOrder::move_card`]
//! so the rest of the app can treat the sequence as immutable snapshots.

use crate::models::Dance;

/// In-memory owner of the current program order plus the seed it can be reset
/// to. The persisted copy on disk is always a snapshot of `dances`, never a
/// live reference, so nothing outside this struct can alias the working list.
pub struct ProgramOrder {
    dances: Vec<Dance>,
    seed: Vec<Dance>,
}

impl ProgramOrder {
    /// Wrap an already-loaded working list together with the seed order that
    /// "Reset" restores.
    pub fn new(dances: Vec<Dance>, seed: Vec<Dance>) -> Self {
        Self { dances, seed }
    }

    /// The current order. Callers may clone entries freely; the slice itself
    /// is replaced wholesale on every mutation.
    pub fn dances(&self) -> &[Dance] {
        &self.dances
    }

    pub fn len(&self) -> usize {
        self.dances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dances.is_empty()
    }

    /// Remove the dance at `drag_index` and reinsert it at `hover_index` in a
    /// single pass. The relative order of every other dance is preserved.
    ///
    /// Builds a fresh `Vec` rather than splicing in place, so any snapshot a
    /// view captured before the call stays untouched. Returns `true` when the
    /// order actually changed. Equal indices are a no-op and out-of-range
    /// indices are rejected as a no-op; the UI guards its own affordances, so
    /// a bad index here means a stale drag payload, not a user action.
    pub fn move_card(&mut self, drag_index: usize, hover_index: usize) -> bool {
        let len = self.dances.len();
        if drag_index == hover_index || drag_index >= len || hover_index >= len {
            return false;
        }

        let mut next = self.dances.clone();
        let moved = next.remove(drag_index);
        next.insert(hover_index, moved);
        self.dances = next;
        true
    }

    /// Discard all reordering and restore the seed order. Independent of the
    /// persisted copy; the caller decides whether to write the result back.
    pub fn reset(&mut self) {
        self.dances = self.seed.clone();
    }

    /// Dancers in slot `index` who also appear in the next slot. Preserves
    /// slot-`index` ordering; empty when there is no next slot.
    pub fn dancers_in_next(&self, index: usize) -> Vec<String> {
        self.shared_dancers(index, index + 1)
    }

    /// Dancers in slot `index` who also appear two slots later. The recital
    /// crew treats "dance after next" as the minimum costume-change buffer.
    pub fn dancers_in_dance_after_next(&self, index: usize) -> Vec<String> {
        self.shared_dancers(index, index + 2)
    }

    fn shared_dancers(&self, index: usize, other: usize) -> Vec<String> {
        let (Some(here), Some(there)) = (self.dances.get(index), self.dances.get(other)) else {
            return Vec::new();
        };
        here.dancers
            .iter()
            .filter(|dancer| there.dancers.contains(dancer))
            .cloned()
            .collect()
    }

    /// The full program as a tab-separated table: one line per dance with its
    /// name, song/artist string, and every dancer. This is the text the copy
    /// action puts on the clipboard.
    pub fn export_text(&self) -> String {
        self.dances
            .iter()
            .map(|dance| {
                let mut line = format!("{}\t{}", dance.name, dance.display_song());
                for dancer in &dance.dancers {
                    line.push('\t');
                    line.push_str(dancer);
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Just the dance names, one per line. This is the file-export payload.
    pub fn names_text(&self) -> String {
        self.dances
            .iter()
            .map(|dance| dance.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dance(name: &str, dancers: &[&str]) -> Dance {
        Dance {
            name: name.to_string(),
            song: format!("{name} song"),
            artist: "Artist".to_string(),
            dancers: dancers.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn sample() -> ProgramOrder {
        let dances = vec![
            dance("A", &["x", "y"]),
            dance("B", &["y", "z"]),
            dance("C", &["z"]),
        ];
        ProgramOrder::new(dances.clone(), dances)
    }

    fn names(order: &ProgramOrder) -> Vec<&str> {
        order.dances().iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn move_card_reinserts_without_losing_entries() {
        let mut order = sample();
        assert!(order.move_card(0, 2));
        assert_eq!(names(&order), vec!["B", "C", "A"]);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn move_card_preserves_relative_order_of_others() {
        let dances = vec![
            dance("A", &[]),
            dance("B", &[]),
            dance("C", &[]),
            dance("D", &[]),
            dance("E", &[]),
        ];
        let mut order = ProgramOrder::new(dances.clone(), dances);
        assert!(order.move_card(3, 1));
        assert_eq!(names(&order), vec!["A", "D", "B", "C", "E"]);
    }

    #[test]
    fn move_card_same_index_is_noop() {
        let mut order = sample();
        let before = order.dances().to_vec();
        assert!(!order.move_card(1, 1));
        assert_eq!(order.dances(), before.as_slice());
    }

    #[test]
    fn move_card_rejects_out_of_range() {
        let mut order = sample();
        let before = order.dances().to_vec();
        assert!(!order.move_card(0, 3));
        assert!(!order.move_card(7, 0));
        assert_eq!(order.dances(), before.as_slice());
    }

    #[test]
    fn move_card_leaves_prior_snapshots_alone() {
        let mut order = sample();
        let snapshot = order.dances().to_vec();
        order.move_card(0, 2);
        assert_eq!(
            snapshot.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn dancers_in_next_is_ordered_intersection() {
        let order = sample();
        assert_eq!(order.dancers_in_next(0), vec!["y".to_string()]);
        assert_eq!(order.dancers_in_next(1), vec!["z".to_string()]);
        assert!(order.dancers_in_next(2).is_empty());
    }

    #[test]
    fn dancers_in_next_preserves_slot_order() {
        let dances = vec![dance("A", &["p", "q", "r"]), dance("B", &["r", "p"])];
        let order = ProgramOrder::new(dances.clone(), dances);
        assert_eq!(
            order.dancers_in_next(0),
            vec!["p".to_string(), "r".to_string()]
        );
    }

    #[test]
    fn dancers_in_dance_after_next_skips_one_slot() {
        let order = sample();
        assert!(order.dancers_in_dance_after_next(0).is_empty());
        let dances = vec![
            dance("A", &["x"]),
            dance("B", &[]),
            dance("C", &["x", "y"]),
        ];
        let order = ProgramOrder::new(dances.clone(), dances);
        assert_eq!(
            order.dancers_in_dance_after_next(0),
            vec!["x".to_string()]
        );
    }

    #[test]
    fn reset_restores_seed_order() {
        let mut order = sample();
        order.move_card(0, 2);
        order.reset();
        assert_eq!(names(&order), vec!["A", "B", "C"]);
    }

    #[test]
    fn export_text_is_tab_separated_in_current_order() {
        let mut order = sample();
        order.move_card(0, 2);
        let text = order.export_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("B\t"));
        assert!(lines[1].starts_with("C\t"));
        assert!(lines[2].starts_with("A\t"));
        assert_eq!(lines[2], "A\tA song by Artist\tx\ty");
    }

    #[test]
    fn names_text_is_one_name_per_line() {
        let order = sample();
        assert_eq!(order.names_text(), "A\nB\nC");
    }
}
