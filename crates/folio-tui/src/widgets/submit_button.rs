//! Submit control

use folio_core::SubmissionStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

/// Button that reads "Send Message", or "Sending..." while a request is
/// outstanding. It is drawn muted in that state since submit is inert.
pub struct SubmitButton {
    status: SubmissionStatus,
    focused: bool,
}

impl SubmitButton {
    pub fn new(status: SubmissionStatus) -> Self {
        Self {
            status,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let caption = format!("  {}  ", self.status.submit_caption());
        let width = caption.len() as u16;
        let button = centered_rect(width, 1, area);

        Paragraph::new(caption)
            .style(styles::button(self.focused, self.status))
            .alignment(Alignment::Center)
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_idle_caption() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(SubmitButton::new(SubmissionStatus::Idle), term.area());
        assert!(term.line_contains(1, "Send Message"));
    }

    #[test]
    fn test_submitting_caption() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(
            SubmitButton::new(SubmissionStatus::Submitting).focused(true),
            term.area(),
        );
        assert!(term.buffer_contains("Sending..."));
        assert!(!term.buffer_contains("Send Message"));
    }
}
