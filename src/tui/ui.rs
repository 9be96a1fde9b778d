use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, LoadState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ExtrasList, FoodCard, LoadStatusView, NoticeBar, OrderFooter, Row, TitleBar,
};

const SCREEN_TITLE: &str = "Food details";
const FOOD_CARD_HEIGHT: u16 = 9;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
    let [title_area, main_area, footer_area, notice_area] = layout.areas(frame.area());

    TitleBar::new(SCREEN_TITLE, app.header_actions()).render(frame, title_area);

    let food = match (&app.load_state, &app.food) {
        (LoadState::Ready, Some(food)) => food,
        (state, _) => {
            LoadStatusView {
                state,
                food_id: app.food_id,
                spinner_frame,
            }
            .render(frame, main_area);
            NoticeBar {
                notice: app.notice.as_ref(),
            }
            .render(frame, notice_area);
            return;
        }
    };

    let [card_area, extras_area] =
        Layout::vertical([Length(FOOD_CARD_HEIGHT), Min(3)]).areas(main_area);

    let unit_price = app.formatted_unit_price().unwrap_or_default();
    FoodCard::new(food, unit_price).render(frame, card_area);

    ExtrasList::new(&mut tui.stepper, &app.extras, &app.currency).render(frame, extras_area);

    OrderFooter {
        total: app.formatted_total(),
        quantity: app.quantity.get(),
        quantity_selected: tui.stepper.selected_row() == Row::Quantity,
        order_in_flight: app.order_in_flight,
    }
    .render(frame, footer_area);

    NoticeBar {
        notice: app.notice.as_ref(),
    }
    .render(frame, notice_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{test_app, test_app_loaded};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.stepper.sync(&app.extras);
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
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
    fn test_draw_ui_loading() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Food details"));
        assert!(text.contains("Loading food #1"));
        // No favorite action before the food exists
        assert!(!text.contains("Favorite"));
    }

    #[test]
    fn test_draw_ui_loaded_shows_total() {
        let mut app = test_app_loaded();
        for _ in 0..3 {
            update(&mut app, Action::IncrementExtra(1));
        }
        update(&mut app, Action::IncrementQuantity);

        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Ao molho"));
        assert!(text.contains("Bacon"));
        assert!(text.contains("Favorite"));
        assert!(text.contains("R$ 32,00"));
    }

    #[test]
    fn test_draw_ui_failed_load() {
        let mut app = test_app();
        update(&mut app, Action::FoodLoadFailed("API error (HTTP 404): Not Found".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Could not load food #1"));
        assert!(text.contains("retry"));
    }
}
