//! Generated text buffer shared between the host and its stages

/// Handle to the generation engine's output buffer
///
/// The host fills the buffer with the generated stub for one schema file;
/// stages read it, then [`reset`](Generator::reset) and
/// [`write`](Generator::write) their replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    buffer: String,
}

impl Generator {
    /// Create an engine with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine whose buffer already holds generated text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
        }
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Discard the buffer contents
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Append text to the buffer
    pub fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Take the buffer, leaving the engine empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
