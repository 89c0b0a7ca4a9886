//! Compact/expanded display toggle.

/// UI display hint, unrelated to poll and form data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewPreference {
    is_compact_view: bool,
}

impl ViewPreference {
    pub fn new(is_compact_view: bool) -> Self {
        Self { is_compact_view }
    }

    pub fn is_compact_view(&self) -> bool {
        self.is_compact_view
    }

    /// Flip the flag and return its new value.
    pub fn toggle(&mut self) -> bool {
        self.is_compact_view = !self.is_compact_view;
        tracing::debug!(compact = self.is_compact_view, "Toggled view");
        self.is_compact_view
    }
}
