//! Screen layout for the contact form
//!
//! The form is a single centered column capped at `MAX_FORM_WIDTH`.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the form column grows on large terminals
pub const MAX_FORM_WIDTH: u16 = 72;

/// Input box (3 rows) plus one row for the inline error
pub const FIELD_HEIGHT: u16 = 4;

/// Screen areas for the contact form
#[derive(Debug, Clone, Copy)]
pub struct FormAreas {
    /// Title and subtitle
    pub header: Rect,
    pub name: Rect,
    pub email: Rect,
    /// Multi-line message box, takes the remaining height
    pub message: Rect,
    pub submit: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Create the form layout within the full terminal area
pub fn create(area: Rect) -> FormAreas {
    let width = area.width.min(MAX_FORM_WIDTH);
    let column = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let chunks = Layout::vertical([
        Constraint::Length(3),            // Header
        Constraint::Length(FIELD_HEIGHT), // Name
        Constraint::Length(FIELD_HEIGHT), // Email
        Constraint::Min(FIELD_HEIGHT + 1), // Message
        Constraint::Length(3),            // Submit
        Constraint::Length(1),            // Footer
    ])
    .split(column);

    FormAreas {
        header: chunks[0],
        name: chunks[1],
        email: chunks[2],
        message: chunks[3],
        submit: chunks[4],
        footer: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.name.height, FIELD_HEIGHT);
        assert_eq!(layout.email.height, FIELD_HEIGHT);
        assert_eq!(layout.submit.height, 3);
        assert_eq!(layout.footer.height, 1);
        // message takes what is left: 24 - 3 - 4 - 4 - 3 - 1
        assert_eq!(layout.message.height, 9);
    }

    #[test]
    fn test_layout_column_is_centered_and_capped() {
        let layout = create(Rect::new(0, 0, 120, 30));
        assert_eq!(layout.name.width, MAX_FORM_WIDTH);
        assert_eq!(layout.name.x, (120 - MAX_FORM_WIDTH) / 2);
    }

    #[test]
    fn test_layout_narrow_terminal_uses_full_width() {
        let layout = create(Rect::new(0, 0, 40, 24));
        assert_eq!(layout.name.width, 40);
        assert_eq!(layout.name.x, 0);
    }

    #[test]
    fn test_sections_stack_top_to_bottom() {
        let layout = create(Rect::new(0, 0, 80, 24));
        assert!(layout.header.y < layout.name.y);
        assert!(layout.name.y < layout.email.y);
        assert!(layout.email.y < layout.message.y);
        assert!(layout.message.y < layout.submit.y);
        assert!(layout.submit.y < layout.footer.y);
    }
}
