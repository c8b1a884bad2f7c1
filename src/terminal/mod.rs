pub mod input_event;
pub mod terminal;
pub mod terminal_event;

pub use input_event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseKind};
pub use terminal::{Size, Terminal};
pub use terminal_event::TerminalEvent;
