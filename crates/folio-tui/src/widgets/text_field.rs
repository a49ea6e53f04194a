//! Labeled input box with an inline error line

use folio_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// One form field: bordered box titled with the label, the value (or a
/// placeholder when empty), and the error message on the row below.
pub struct TextField<'a> {
    field: Field,
    value: &'a str,
    error: Option<&'static str>,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(field: Field, value: &'a str) -> Self {
        Self {
            field,
            value,
            error: None,
            focused: false,
        }
    }

    pub fn error(mut self, error: Option<&'static str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn multiline(&self) -> bool {
        self.field == Field::Message
    }

    /// Area of the bordered box, leaving the last row for the error
    fn box_area(area: Rect) -> Rect {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    }

    /// Where the terminal cursor goes when this field is focused.
    ///
    /// Follows the end of the value; wrapped lines are not accounted for, the
    /// position is clamped to the inner box instead.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = styles::input_block("", false, false).inner(Self::box_area(area));
        if inner.width == 0 || inner.height == 0 {
            return Position::new(inner.x, inner.y);
        }

        let (row, last_line) = if self.multiline() {
            let mut lines = self.value.split('\n');
            let last = lines.next_back().unwrap_or("");
            (self.value.matches('\n').count() as u16, last)
        } else {
            (0, self.value)
        };

        let col = last_line.width() as u16;
        Position::new(
            inner.x + col.min(inner.width - 1),
            inner.y + row.min(inner.height - 1),
        )
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        let box_area = Self::box_area(area);
        let block = styles::input_block(self.field.label(), self.focused, self.error.is_some());

        let body = if self.value.is_empty() {
            Text::from(Span::styled(self.field.placeholder(), styles::text_muted()))
        } else {
            Text::styled(self.value, styles::text_primary())
        };

        let mut paragraph = Paragraph::new(body).block(block);
        if self.multiline() {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(box_area, buf);

        if let Some(error) = self.error {
            let error_area = Rect::new(area.x + 1, box_area.bottom(), area.width.saturating_sub(1), 1);
            Line::from(Span::styled(error, styles::field_error())).render(error_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_label_and_value() {
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(TextField::new(Field::Name, "Ada"), term.area());

        assert!(term.buffer_contains("Name"));
        assert!(term.buffer_contains("Ada"));
    }

    #[test]
    fn test_empty_value_shows_placeholder() {
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(TextField::new(Field::Email, ""), term.area());

        assert!(term.buffer_contains("Enter your email"));
    }

    #[test]
    fn test_error_rendered_below_box() {
        let mut term = TestTerminal::with_size(40, 4);
        let field = TextField::new(Field::Email, "nope").error(Some("Email is invalid"));
        term.render_widget(field, term.area());

        assert!(term.line_contains(3, "Email is invalid"));
    }

    #[test]
    fn test_no_error_line_when_valid() {
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(TextField::new(Field::Name, "Ada"), term.area());

        assert!(!term.buffer_contains("required"));
    }

    #[test]
    fn test_message_wraps_long_text() {
        let mut term = TestTerminal::with_size(20, 6);
        let text = "hello there general kenobi";
        term.render_widget(TextField::new(Field::Message, text), term.area());

        assert!(term.buffer_contains("hello there"));
        assert!(term.buffer_contains("kenobi"));
    }

    #[test]
    fn test_cursor_follows_value() {
        let area = Rect::new(0, 0, 40, 4);
        let field = TextField::new(Field::Name, "Ada");
        // one cell of border, then three characters
        assert_eq!(field.cursor_position(area), Position::new(4, 1));

        let empty = TextField::new(Field::Name, "");
        assert_eq!(empty.cursor_position(area), Position::new(1, 1));
    }

    #[test]
    fn test_cursor_on_last_message_line() {
        let area = Rect::new(0, 0, 40, 8);
        let field = TextField::new(Field::Message, "hi\nthere");
        assert_eq!(field.cursor_position(area), Position::new(6, 2));
    }

    #[test]
    fn test_cursor_clamped_to_box() {
        let area = Rect::new(0, 0, 10, 4);
        let field = TextField::new(Field::Name, "a very long name indeed");
        assert_eq!(field.cursor_position(area), Position::new(8, 1));
    }
}
