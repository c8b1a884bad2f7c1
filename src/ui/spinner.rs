const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default)]
pub struct Spinner {
    index: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.index % FRAMES.len()]
    }

    pub fn tick(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
