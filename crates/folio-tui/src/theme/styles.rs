//! Semantic style builders

use folio_core::SubmissionStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

pub fn border_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn field_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Submit button ---
pub fn button(focused: bool, status: SubmissionStatus) -> Style {
    if status.is_submitting() {
        return Style::default()
            .fg(palette::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC);
    }
    let base = Style::default().fg(palette::BUTTON_FG).bg(palette::BUTTON_BG);
    if focused {
        base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        base
    }
}

/// Border color of the outcome popup
pub fn popup_border(status: SubmissionStatus) -> Style {
    match status {
        SubmissionStatus::Success => Style::default().fg(palette::STATUS_GREEN),
        SubmissionStatus::Error => Style::default().fg(palette::STATUS_RED),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => border_inactive(),
    }
}

// --- Block builders ---

/// Rounded input box, colored by focus and error state
pub fn input_block(title: &str, focused: bool, has_error: bool) -> Block<'_> {
    let border = if has_error {
        border_error()
    } else if focused {
        border_active()
    } else {
        border_inactive()
    };
    let title_style = if focused {
        accent_bold()
    } else {
        text_secondary()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(ratatui::text::Span::styled(format!(" {} ", title), title_style))
}

pub fn popup_block(status: SubmissionStatus) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(popup_border(status))
        .style(Style::default().bg(palette::POPUP_BG))
}
