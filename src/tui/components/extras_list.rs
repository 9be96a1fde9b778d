//! # Extras List Component
//!
//! Selectable list of extras with `-`/`+` steppers. The order quantity is
//! the last selectable row, rendered by the footer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StepperState` lives in `TuiState` and owns the selection
//! - `ExtrasList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::pricing::{self, CurrencyFormat};
use crate::core::state::Extra;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// A selectable row on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Extra(u64),
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Increment(Row),
    Decrement(Row),
}

/// Persistent selection over the extras plus the quantity row.
pub struct StepperState {
    rows: Vec<Row>,
    pub selected: usize,
    pub list_state: ListState,
}

impl StepperState {
    pub fn new() -> Self {
        Self {
            rows: vec![Row::Quantity],
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Rebuilds the row table from the current extras, keeping the selection
    /// in range. Called once per loop iteration before events are handled.
    pub fn sync(&mut self, extras: &[Extra]) {
        self.rows = extras
            .iter()
            .map(|extra| Row::Extra(extra.id))
            .chain(std::iter::once(Row::Quantity))
            .collect();
        self.selected = self.selected.min(self.rows.len() - 1);
        self.list_state.select(if self.selected < extras.len() {
            Some(self.selected)
        } else {
            None
        });
    }

    pub fn selected_row(&self) -> Row {
        self.rows.get(self.selected).copied().unwrap_or(Row::Quantity)
    }
}

impl Default for StepperState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for StepperState {
    type Event = StepEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<StepEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.rows.len() - 1);
                None
            }
            TuiEvent::Increment => Some(StepEvent::Increment(self.selected_row())),
            TuiEvent::Decrement => Some(StepEvent::Decrement(self.selected_row())),
            _ => None,
        }
    }
}

/// Cuts `text` to at most `max_width` terminal columns, adding `…` if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub struct ExtrasList<'a> {
    pub state: &'a mut StepperState,
    pub extras: &'a [Extra],
    pub currency: &'a CurrencyFormat,
}

impl<'a> ExtrasList<'a> {
    pub fn new(state: &'a mut StepperState, extras: &'a [Extra], currency: &'a CurrencyFormat) -> Self {
        Self {
            state,
            extras,
            currency,
        }
    }

    fn item(&self, extra: &Extra, name_width: usize) -> ListItem<'static> {
        let name = truncate_to_width(&extra.name, name_width);
        let padding = name_width.saturating_sub(name.width());
        let quantity_style = if extra.quantity > 0 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        ListItem::new(Line::from(vec![
            Span::raw(name),
            Span::raw(" ".repeat(padding)),
            Span::styled(
                format!("{:>12}", pricing::format_value(extra.value, self.currency)),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   [-] "),
            Span::styled(format!("{:>2}", extra.quantity), quantity_style),
            Span::raw(" [+]"),
        ]))
    }
}

/// Columns taken by everything in a row except the name.
const FIXED_COLUMNS: usize = 12 + 7 + 2 + 4 + 4;

impl Component for ExtrasList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Extras ")
            .border_style(Style::default().fg(Color::DarkGray));

        if self.extras.is_empty() {
            let empty = ratatui::widgets::Paragraph::new(Span::styled(
                "No extras for this item",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let name_width = inner_width.saturating_sub(FIXED_COLUMNS).max(4);
        let items: Vec<ListItem> = self
            .extras
            .iter()
            .map(|extra| self.item(extra, name_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
