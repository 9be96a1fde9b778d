//! # Status Components
//!
//! - `LoadStatusView`: full-body placeholder while the food is loading, or
//!   the retryable error view when the load failed.
//! - `NoticeBar`: single bottom line with the current notice, or key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{LoadState, Notice, NoticeLevel};
use crate::tui::component::Component;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct LoadStatusView<'a> {
    pub state: &'a LoadState,
    pub food_id: u64,
    pub spinner_frame: usize,
}

impl Component for LoadStatusView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = match self.state {
            LoadState::Failed(message) => vec![
                Line::from(Span::styled(
                    format!("Could not load food #{}", self.food_id),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry, q to quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            _ => vec![Line::from(Span::styled(
                format!(
                    "{} Loading food #{}...",
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    self.food_id
                ),
                Style::default().fg(Color::Yellow),
            ))],
        };

        let height = lines.len() as u16 + 2;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let mut block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        if matches!(self.state, LoadState::Failed(_)) {
            block = block.title(" ERROR ").border_style(Style::default().fg(Color::Red));
        }
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }
}

const KEY_HINTS: &str = "↑/↓ select  ←/→ change  f favorite  Enter order  q quit";

pub struct NoticeBar<'a> {
    pub notice: Option<&'a Notice>,
}

impl Component for NoticeBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = match self.notice {
            Some(notice) => {
                let style = match notice.level {
                    NoticeLevel::Info => Style::default().fg(Color::Cyan),
                    NoticeLevel::Error => Style::default().fg(Color::Red),
                };
                Line::from(vec![
                    Span::styled(notice.text.clone(), style),
                    Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)),
                ])
            }
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(width: u16, height: u16, component: &mut dyn Component) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                component.render(f, f.area());
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
    fn test_loading_view() {
        let state = LoadState::Loading;
        let mut view = LoadStatusView {
            state: &state,
            food_id: 4,
            spinner_frame: 0,
        };
        let text = render_text(60, 10, &mut view);
        assert!(text.contains("Loading food #4"));
    }

    #[test]
    fn test_failed_view_offers_retry() {
        let state = LoadState::Failed("network error: refused".to_string());
        let mut view = LoadStatusView {
            state: &state,
            food_id: 4,
            spinner_frame: 0,
        };
        let text = render_text(60, 12, &mut view);
        assert!(text.contains("ERROR"));
        assert!(text.contains("network error: refused"));
        assert!(text.contains("Press r to retry"));
    }

    #[test]
    fn test_notice_bar_shows_notice_or_hints() {
        let notice = Notice::error("Order not placed");
        let text = render_text(80, 1, &mut NoticeBar { notice: Some(&notice) });
        assert!(text.contains("Order not placed"));

        let text = render_text(80, 1, &mut NoticeBar { notice: None });
        assert!(text.contains("Enter order"));
    }
}
