//! Drag-gesture state machine for mouse reordering. The geometry lives here
//! as pure functions on indices and rows so it can be tested without a
//! terminal; the UI layer only maps crossterm mouse events onto these calls.

/// A drag is a press on a card followed by hover events and a release. The
/// payload index tracks the dragged card's *current* slot, not the slot it
/// was picked up from: every triggered reorder updates it in place so later
/// hover events in the same gesture compare against fresh coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        index: usize,
    },
}

impl DragGesture {
    /// Start dragging the card at `index`.
    pub fn begin(&mut self, index: usize) {
        *self = DragGesture::Dragging { index };
    }

    /// End the gesture, whether by drop or cancel.
    pub fn finish(&mut self) {
        *self = DragGesture::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// The slot currently carried by the drag payload, if a drag is active.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            DragGesture::Dragging { index } => Some(*index),
            DragGesture::Idle => None,
        }
    }

    /// Feed one hover observation into the gesture: the card under the
    /// pointer, the pointer row, and that card's vertical extent. Returns the
    /// `(drag_index, hover_index)` pair to reorder when the midpoint rule
    /// fires, and advances the payload index so the next hover event sees the
    /// post-move position. Returns `None` while idle or when the pointer has
    /// not crossed the hovered card's midpoint yet.
    pub fn hover(
        &mut self,
        hover_index: usize,
        pointer_row: u16,
        target_top: u16,
        target_bottom: u16,
    ) -> Option<(usize, usize)> {
        let DragGesture::Dragging { index } = self else {
            return None;
        };
        if !crossed_midpoint(*index, hover_index, pointer_row, target_top, target_bottom) {
            return None;
        }
        let drag_index = *index;
        *index = hover_index;
        Some((drag_index, hover_index))
    }
}

/// Midpoint gating: a reorder triggers only once the pointer has travelled
/// past half of the hovered card's height, in the direction of the drag.
/// Dragging downward triggers only below the midpoint, dragging upward only
/// above it. Requiring the full half-height of travel is what keeps two
/// adjacent cards from flickering back and forth while the pointer sits near
/// their shared edge.
///
/// `target_top`/`target_bottom` bound the hovered card's rows, top inclusive,
/// bottom exclusive, matching how ratatui rects address terminal cells.
pub fn crossed_midpoint(
    drag_index: usize,
    hover_index: usize,
    pointer_row: u16,
    target_top: u16,
    target_bottom: u16,
) -> bool {
    if drag_index == hover_index || target_bottom <= target_top {
        return false;
    }

    let middle = (target_bottom - target_top) / 2;
    let pointer_offset = pointer_row.saturating_sub(target_top);

    if drag_index < hover_index {
        // Dragging downwards.
        pointer_offset >= middle
    } else {
        // Dragging upwards.
        pointer_offset <= middle
    }
}
