//! Form heading

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SUBTITLE: &str = "Have a question or want to work together? Drop me a line.";

/// Title from settings and a fixed subtitle, centered
pub struct FormHeader<'a> {
    title: &'a str,
}

impl<'a> FormHeader<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl Widget for FormHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(Span::styled(self.title, styles::accent_bold())),
            Line::from(Span::styled(SUBTITLE, styles::text_secondary())),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(FormHeader::new("Get in touch"), term.area());
        assert!(term.line_contains(0, "Get in touch"));
        assert!(term.line_contains(1, "work together"));
    }
}
