/// Hero label rotation. The index always points into `texts`.
#[derive(Debug, Clone)]
pub struct TextCycle {
    texts: Vec<String>,
    index: usize,
}

impl TextCycle {
    /// Returns `None` for an empty list, since there is nothing to show.
    pub fn new(texts: Vec<String>) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }
        Some(Self { texts, index: 0 })
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.texts[self.index]
    }

    /// Steps to the next label, wrapping after the last one, and returns it.
    pub fn advance(&mut self) -> &str {
        self.index = wrap_increment(self.index, self.texts.len());
        self.current()
    }
}

const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}
