use log::Level;

/// Events handled by the map canvas.
pub enum Event {
    Input(termion::event::Event),
    Log((Level, String)),
    Resize,
}
