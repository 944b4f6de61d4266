use std::io::Write;

/// The page's single content element.
pub trait RenderTarget {
    fn set_text(&mut self, text: &str);
}

/// In-memory element that keeps the first text it receives.
#[derive(Debug, Default, Clone)]
pub struct TextSlot {
    text: Option<String>,
}

impl TextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn into_text(self) -> Option<String> {
        self.text
    }
}

impl RenderTarget for TextSlot {
    fn set_text(&mut self, text: &str) {
        if self.text.is_none() {
            self.text = Some(text.to_string());
        }
    }
}

#[derive(Debug, Default)]
pub struct StdoutTarget;

impl RenderTarget for StdoutTarget {
    fn set_text(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{text}") {
            tracing::error!("failed to write rendered text: {err}");
        }
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keeps_first_write() {
        let mut slot = TextSlot::new();
        assert_eq!(slot.text(), None);
        slot.set_text("hello");
        slot.set_text("again");
        assert_eq!(slot.text(), Some("hello"));
    }
}
