//! Card rendering for the program list. Everything here is a pure builder
//! over the dance plus its collision annotations, so the layout math that the
//! mouse handling depends on can be unit tested without a terminal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Dance;

/// Rows a card occupies: top and bottom border, the name line, the song line,
/// and a header-plus-names section for each non-empty collision list.
pub(crate) fn card_height(in_next: &[String], after_next: &[String]) -> u16 {
    let mut height = 4usize;
    if !in_next.is_empty() {
        height += 1 + in_next.len();
    }
    if !after_next.is_empty() {
        height += 1 + after_next.len();
    }
    height as u16
}

/// Build the textual payload for one card. The name line is the drag handle
/// the user grabs, so it is the part rendered bold; dancers who reappear in
/// the next one or two slots are listed in red beneath the song.
pub(crate) fn build_card_lines(
    dance: &Dance,
    in_next: &[String],
    after_next: &[String],
    selected: bool,
    dragging: bool,
) -> Vec<Line<'static>> {
    // Dim the whole card while it is being dragged; the terminal analog of
    // rendering the drag source at reduced opacity.
    let dim = |style: Style| {
        if dragging {
            Style::default().fg(Color::DarkGray)
        } else {
            style
        }
    };

    let mut lines = Vec::new();

    let name = if selected {
        format!("▶ {}", dance.name)
    } else {
        dance.name.clone()
    };
    lines.push(Line::from(Span::styled(
        name,
        dim(Style::default().add_modifier(Modifier::BOLD)),
    )));

    lines.push(Line::from(Span::styled(
        format!("\"{}\"", dance.display_song()),
        dim(Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)),
    )));

    push_collision_section(&mut lines, "In next dance:", in_next, dragging);
    push_collision_section(&mut lines, "In dance after next:", after_next, dragging);

    lines
}

fn push_collision_section(
    lines: &mut Vec<Line<'static>>,
    header: &str,
    dancers: &[String],
    dragging: bool,
) {
    if dancers.is_empty() {
        return;
    }
    let warn_style = if dragging {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };
    lines.push(Line::from(header.to_string()));
    for dancer in dancers {
        lines.push(Line::from(Span::styled(format!("- {dancer}"), warn_style)));
    }
}

/// Pick the first card of the visible window so the selected card fits
/// entirely inside `viewport` rows. Cards have uneven heights, so this walks
/// upward from the selection and stops extending once one more card would
/// overflow.
pub(crate) fn scroll_start(heights: &[u16], selected: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = selected;
    let mut used = heights[selected] as u32;
    while start > 0 {
        let above = heights[start - 1] as u32;
        if used + above > viewport as u32 {
            break;
        }
        used += above;
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dance() -> Dance {
        Dance {
            name: "Jazz Combo".into(),
            song: "Sing, Sing, Sing".into(),
            artist: "Benny Goodman".into(),
            dancers: vec!["Brooke".into(), "Dana".into()],
        }
    }

    #[test]
    fn height_grows_with_collision_sections() {
        assert_eq!(card_height(&[], &[]), 4);
        assert_eq!(card_height(&["Dana".into()], &[]), 6);
        assert_eq!(
            card_height(&["Dana".into()], &["Brooke".into(), "Dana".into()]),
            9
        );
    }

    #[test]
    fn lines_match_height_inside_borders() {
        let in_next = vec!["Dana".to_string()];
        let after = vec!["Brooke".to_string()];
        let lines = build_card_lines(&dance(), &in_next, &after, false, false);
        assert_eq!(lines.len() as u16 + 2, card_height(&in_next, &after));
    }

    #[test]
    fn selected_card_gets_pointer_prefix() {
        let lines = build_card_lines(&dance(), &[], &[], true, false);
        assert!(lines[0].spans[0].content.starts_with("▶ "));
    }

    #[test]
    fn collision_sections_list_each_dancer() {
        let lines = build_card_lines(&dance(), &["Dana".into()], &[], false, false);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.contains(&"In next dance:".to_string()));
        assert!(text.contains(&"- Dana".to_string()));
    }

    #[test]
    fn scroll_keeps_selected_visible() {
        let heights = [4, 6, 4, 9, 4];
        // Everything fits in a tall viewport.
        assert_eq!(scroll_start(&heights, 4, 40), 0);
        // A short viewport pins the window to the selection.
        assert_eq!(scroll_start(&heights, 3, 9), 3);
        assert_eq!(scroll_start(&heights, 3, 13), 2);
        assert_eq!(scroll_start(&heights, 0, 4), 0);
    }
}
