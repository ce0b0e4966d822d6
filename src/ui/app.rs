use std::fs;
use std::mem;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::gesture::DragGesture;
use crate::order::ProgramOrder;
use crate::store::{store_dances, KeyValueStore};

use super::cards::{build_card_lines, card_height, scroll_start};
use super::helpers::{centered_rect, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Column width of the card list. Wide enough for long dance names while
/// leaving room for the export panel on most terminal sizes.
const LIST_WIDTH: u16 = 44;
/// Fixed filename the "download" action writes the program names to.
const DOWNLOAD_FILE_NAME: &str = "recital-order.txt";

/// Fine-grained interaction modes layered over the single list screen.
enum Mode {
    Normal,
    /// Waiting for the user to confirm discarding the current order.
    ConfirmReset,
    /// Blocking notice the user must acknowledge before continuing. Used for
    /// clipboard failures, which the user would otherwise never see.
    Notice(String),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state: the working list, the injected store it
/// persists through, and the interaction state for the current frame.
pub struct App<S: KeyValueStore> {
    store: S,
    order: ProgramOrder,
    selected: usize,
    gesture: DragGesture,
    mode: Mode,
    status: Option<StatusMessage>,
    /// Card rectangles recorded during the last draw, paired with their list
    /// index. Mouse hit tests run against these, so they always describe the
    /// frame the user is actually pointing at.
    card_areas: Vec<(usize, Rect)>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: S, order: ProgramOrder) -> Self {
        Self {
            store,
            order,
            selected: 0,
            gesture: DragGesture::Idle,
            mode: Mode::Normal,
            status: None,
            card_areas: Vec::new(),
        }
    }

    /// Process one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::ConfirmReset => self.handle_confirm_reset(code),
            // A notice blocks everything until acknowledged; any key clears it.
            Mode::Notice(_) => Mode::Normal,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.order.len().saturating_sub(1),
            KeyCode::Char('u') | KeyCode::Char('U') => self.move_selected_card(-1),
            KeyCode::Char('d') | KeyCode::Char('D') => self.move_selected_card(1),
            KeyCode::Char('c') | KeyCode::Char('C') => return Ok(self.copy_list()),
            KeyCode::Char('w') | KeyCode::Char('W') => self.download_names(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_order(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.clear_status();
                return Ok(Mode::ConfirmReset);
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_confirm_reset(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.order.reset();
                self.selected = 0;
                self.autosave();
                self.set_status("Restored the original program order.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Mode::Normal,
            _ => Mode::ConfirmReset,
        }
    }

    /// Process one mouse event. A press over a card picks it up, drag events
    /// reorder through the midpoint-gated gesture, and release drops it.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if !matches!(self.mode, Mode::Normal) {
            // Modals swallow the pointer; an in-flight drag is cancelled.
            self.gesture.finish();
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.card_at(event.column, event.row) {
                    self.selected = index;
                    self.gesture.begin(index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(hover) = self.card_at(event.column, event.row) else {
                    return;
                };
                let Some(rect) = self.card_rect(hover) else {
                    return;
                };
                if let Some((drag_index, hover_index)) =
                    self.gesture
                        .hover(hover, event.row, rect.top(), rect.bottom())
                {
                    if self.order.move_card(drag_index, hover_index) {
                        self.selected = hover_index;
                        self.autosave();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.gesture.finish(),
            _ => {}
        }
    }

    fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_areas
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }

    fn card_rect(&self, index: usize) -> Option<Rect> {
        self.card_areas
            .iter()
            .find(|(card, _)| *card == index)
            .map(|(_, rect)| *rect)
    }

    fn move_selection(&mut self, offset: isize) {
        if self.order.is_empty() {
            return;
        }
        let len = self.order.len() as isize;
        let next = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = next as usize;
    }

    /// Nudge the selected card one slot up or down. The ends of the list are
    /// guarded here the same way per-card buttons would be disabled there:
    /// the first card cannot move up and the last cannot move down.
    fn move_selected_card(&mut self, offset: isize) {
        let Some(target) = self.selected.checked_add_signed(offset) else {
            return;
        };
        if target >= self.order.len() {
            return;
        }
        if self.order.move_card(self.selected, target) {
            self.selected = target;
            self.autosave();
        }
    }

    /// Put the tab-separated program table on the system clipboard. Success
    /// lands in the footer; failure raises a blocking notice carrying the
    /// underlying reason, since a silent copy failure would only be
    /// discovered at paste time.
    fn copy_list(&mut self) -> Mode {
        let text = self.order.export_text();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                self.set_status(
                    format!("Copied {} dances to the clipboard.", self.order.len()),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            Err(err) => copy_failure_notice(&err.to_string()),
        }
    }

    /// Write the dance names, one per line, to the fixed export file in the
    /// working directory.
    fn download_names(&mut self) {
        let mut text = self.order.names_text();
        text.push('\n');
        let result = fs::write(DOWNLOAD_FILE_NAME, text)
            .with_context(|| format!("failed to write {DOWNLOAD_FILE_NAME}"));
        match result {
            Ok(()) => self.set_status(
                format!(
                    "Wrote {} dance names to {DOWNLOAD_FILE_NAME}.",
                    self.order.len()
                ),
                StatusKind::Info,
            ),
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
    }

    fn save_order(&mut self) {
        match store_dances(&mut self.store, self.order.dances()) {
            Ok(()) => self.set_status("Saved the program order.", StatusKind::Info),
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
    }

    /// Persist after a mutation, fire and forget. The explicit save action
    /// exists for anyone who wants a failure surfaced.
    fn autosave(&mut self) {
        let _ = store_dances(&mut self.store, self.order.dances());
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Render one frame. Takes `&mut self` because the card rectangles used
    /// by mouse hit tests are recorded while laying the list out.
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LIST_WIDTH), Constraint::Min(0)])
            .split(content_area);

        self.draw_card_list(frame, columns[0]);
        self.draw_export_panel(frame, columns[1]);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::ConfirmReset => self.draw_confirm_reset(frame, area),
            Mode::Notice(message) => draw_notice(frame, area, message),
            Mode::Normal => {}
        }
    }

    fn draw_card_list(&mut self, frame: &mut Frame, area: Rect) {
        self.card_areas.clear();

        if self.order.is_empty() {
            let message = Paragraph::new("No dances in the program.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }
        if area.height == 0 {
            return;
        }

        let len = self.order.len();
        let annotations: Vec<(Vec<String>, Vec<String>)> = (0..len)
            .map(|index| {
                (
                    self.order.dancers_in_next(index),
                    self.order.dancers_in_dance_after_next(index),
                )
            })
            .collect();
        let heights: Vec<u16> = annotations
            .iter()
            .map(|(in_next, after_next)| card_height(in_next, after_next))
            .collect();

        let start = scroll_start(&heights, self.selected, area.height);
        let mut y = area.y;
        for index in start..len {
            let height = heights[index];
            // Partially clipped cards are neither drawn nor drag targets.
            if y + height > area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, height);
            self.card_areas.push((index, rect));

            let dance = &self.order.dances()[index];
            let (in_next, after_next) = &annotations[index];
            let selected = index == self.selected;
            let dragging = self.gesture.dragged_index() == Some(index);

            let mut block = Block::default().borders(Borders::ALL);
            if dragging {
                block = block.style(Style::default().fg(Color::DarkGray));
            } else if selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }

            let paragraph = Paragraph::new(build_card_lines(
                dance, in_next, after_next, selected, dragging,
            ))
            .block(block)
            .alignment(Alignment::Left);
            frame.render_widget(paragraph, rect);

            y += height;
        }
    }

    fn draw_export_panel(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = Block::default().borders(Borders::ALL).title("Export");
        let paragraph = Paragraph::new(self.order.export_text())
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::ConfirmReset => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Reset   "),
                Span::styled("[n]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::Notice(_) => Line::from(vec![
                Span::styled("[Any Key]", key_style),
                Span::raw(" Dismiss"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[u/d]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Drag]", key_style),
                Span::raw(" Reorder   "),
                Span::styled("[c]", key_style),
                Span::raw(" Copy   "),
                Span::styled("[w]", key_style),
                Span::raw(" Download   "),
                Span::styled("[s]", key_style),
                Span::raw(" Save   "),
                Span::styled("[r]", key_style),
                Span::raw(" Reset   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_confirm_reset(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Reset Order").borders(Borders::ALL);
        let paragraph = Paragraph::new(vec![
            Line::from("Discard the current order and restore"),
            Line::from("the original program?"),
            Line::from(""),
            Line::from("[y] Yes    [n] No"),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_rect(60, 25, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press any key to continue."),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Build the blocking notice shown when a clipboard write fails. Kept as a
/// free function so the message shape is testable without touching a real
/// clipboard.
fn copy_failure_notice(reason: &str) -> Mode {
    Mode::Notice(format!("Could not copy: {reason}"))
}
