//! # TitleBar Component
//!
//! Persistent header chrome. Shows the screen title on the left and the
//! actions the screen exposes on the right (the favorite heart).
//!
//! TitleBar never looks into `App`. It receives `HeaderAction`s as props,
//! renders their key and label, and the event loop dispatches the matching
//! `Action` when the key is pressed.
//!
//! ```text
//! Food details                                   [f] ♥ Favorite
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::HeaderAction;
use crate::tui::component::Component;

pub struct TitleBar {
    pub title: String,
    pub actions: Vec<HeaderAction>,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, actions: Vec<HeaderAction>) -> Self {
        Self {
            title: title.into(),
            actions,
        }
    }

    fn action_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}] ", action.key),
                Style::default().fg(Color::DarkGray),
            ));
            let style = if action.active {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(action.label.to_string(), style));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);

        if !self.actions.is_empty() {
            let actions = Paragraph::new(Line::from(self.action_spans())).alignment(Alignment::Right);
            frame.render_widget(actions, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_without_actions() {
        let mut title_bar = TitleBar::new("Food details", Vec::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Food details"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_title_bar_renders_header_action() {
        let mut title_bar = TitleBar::new(
            "Food details",
            vec![HeaderAction {
                key: 'f',
                label: "♥ Favorite",
                active: true,
                action: Action::ToggleFavorite,
            }],
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Food details"));
        assert!(text.contains("[f]"));
        assert!(text.contains("Favorite"));
    }
}
