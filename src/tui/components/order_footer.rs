//! # OrderFooter Component
//!
//! Bottom panel with the order total, the item quantity stepper and the
//! confirm hint. The stepper is highlighted when the quantity row is
//! selected in `StepperState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct OrderFooter {
    pub total: String,
    pub quantity: u32,
    pub quantity_selected: bool,
    pub order_in_flight: bool,
}

impl Component for OrderFooter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [total_area, stepper_area, confirm_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let total = Paragraph::new(Line::from(vec![
            Span::styled("Total ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.total.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(total, total_area);

        let stepper_style = if self.quantity_selected {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let stepper = Paragraph::new(Span::styled(
            format!("[-] {:>3} [+]", self.quantity),
            stepper_style,
        ))
        .alignment(Alignment::Center);
        frame.render_widget(stepper, stepper_area);

        let confirm = if self.order_in_flight {
            Span::styled("Placing order...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Enter: confirm order",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Paragraph::new(confirm).alignment(Alignment::Right),
            confirm_area,
        );
    }
}
