//! Outcome popup shown after a submission completes

use folio_core::SubmissionStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 7;

/// Modal reporting `Success` or `Error`. Renders nothing for other states.
pub struct StatusPopup {
    status: SubmissionStatus,
}

impl StatusPopup {
    pub fn new(status: SubmissionStatus) -> Self {
        Self { status }
    }
}

impl Widget for StatusPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.status.popup_message() else {
            return;
        };

        dim_background(buf, area);

        let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        Clear.render(popup, buf);
        render_shadow(buf, popup);

        let title = match self.status {
            SubmissionStatus::Success => " Message sent ",
            _ => " Not sent ",
        };
        let block = styles::popup_block(self.status)
            .title(Span::styled(title, styles::popup_border(self.status)));

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(message, styles::text_primary())),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" / ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" to close", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_success_popup() {
        let mut term = TestTerminal::new();
        term.render_widget(StatusPopup::new(SubmissionStatus::Success), term.area());

        assert!(term.buffer_contains("Message sent"));
        assert!(term.buffer_contains("Thank you! I will get back to you very shortly."));
        assert!(term.buffer_contains("to close"));
    }

    #[test]
    fn test_error_popup() {
        let mut term = TestTerminal::new();
        term.render_widget(StatusPopup::new(SubmissionStatus::Error), term.area());

        assert!(term.buffer_contains("Failed to send message. Please try again."));
    }

    #[test]
    fn test_no_popup_when_idle_or_submitting() {
        for status in [SubmissionStatus::Idle, SubmissionStatus::Submitting] {
            let mut term = TestTerminal::new();
            term.render_widget(StatusPopup::new(status), term.area());
            assert!(!term.buffer_contains("close"));
        }
    }
}
