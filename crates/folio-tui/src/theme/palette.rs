//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Sent
pub const STATUS_RED: Color = Color::Red; // Failed / invalid field
pub const STATUS_YELLOW: Color = Color::Yellow; // Sending

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Button ---
pub const BUTTON_BG: Color = Color::Blue;
pub const BUTTON_FG: Color = Color::White;
