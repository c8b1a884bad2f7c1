pub mod renderer;
pub mod span;
pub mod spinner;
pub mod style;

pub use renderer::{Frame, HitTarget};
pub use span::{Span, SpanLine};
pub use style::{Color, Style};
