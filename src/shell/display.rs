//! Display sinks.

/// Receives the text the calculator wants shown.
///
/// Updates are fire-and-forget: the calculator never reads the display
/// back.
pub trait DisplaySink {
    fn set_display(&mut self, text: &str);
}

impl<F> DisplaySink for F
where
    F: FnMut(&str),
{
    fn set_display(&mut self, text: &str) {
        self(text)
    }
}

/// Sink that keeps every update, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    updates: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown, if anything was ever displayed.
    pub fn current(&self) -> Option<&str> {
        self.updates.last().map(String::as_str)
    }

    pub fn updates(&self) -> &[String] {
        &self.updates
    }
}

impl DisplaySink for RecordingDisplay {
    fn set_display(&mut self, text: &str) {
        self.updates.push(text.to_string());
    }
}
