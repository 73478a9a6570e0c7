use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into a region of the frame.
///
/// Components are built each frame from props (struct fields borrowed from
/// `App` and `TuiState`). `render` takes `&mut self` so a component can write
/// back into the persistent state it wraps, such as scroll offsets or the
/// layout cache used for mouse hit testing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns terminal input into its own higher-level events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
