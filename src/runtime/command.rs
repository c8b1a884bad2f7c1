use crate::terminal::{KeyEvent, MouseEvent};

#[derive(Debug, Clone, Copy)]
pub enum Command {
    Exit,
    InputKey(KeyEvent),
    Pointer(MouseEvent),
    /// Fired by the debounce timer: the query survived the quiet period.
    RunSuggestLookup,
    Tick,
}
