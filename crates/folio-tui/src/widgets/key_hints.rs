//! Footer with key bindings for the current screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct KeyHints {
    popup_open: bool,
}

impl KeyHints {
    pub fn new(popup_open: bool) -> Self {
        Self { popup_open }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.popup_open {
            &[("Enter/Esc", "close"), ("Ctrl+C", "quit")]
        } else {
            &[
                ("Tab", "next"),
                ("Shift+Tab", "prev"),
                ("Alt+Enter", "newline"),
                ("Ctrl+S", "send"),
                ("Esc", "quit"),
            ]
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.bindings().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_form_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(KeyHints::new(false), term.area());
        assert!(term.buffer_contains("Ctrl+S send"));
        assert!(term.buffer_contains("Tab next"));
    }

    #[test]
    fn test_popup_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(KeyHints::new(true), term.area());
        assert!(term.buffer_contains("Enter/Esc close"));
        assert!(!term.buffer_contains("send"));
    }
}
