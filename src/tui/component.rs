use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that draws itself into a `Rect`.
///
/// Props are struct fields set by the parent each frame. `render` takes
/// `&mut self` so stateful components can update presentation state (list
/// selection offsets) while drawing, like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns low-level terminal events into its own events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
