//! # FoodCard Component
//!
//! Stateless card with the loaded food: image reference, name, description
//! and formatted unit price.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::Food;
use crate::tui::component::Component;

pub struct FoodCard<'a> {
    pub food: &'a Food,
    pub unit_price: String,
}

impl<'a> FoodCard<'a> {
    pub fn new(food: &'a Food, unit_price: String) -> Self {
        Self { food, unit_price }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(
                self.food.image_url.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(self.food.description.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                self.unit_price.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ]
    }
}

impl Component for FoodCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.food.name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
