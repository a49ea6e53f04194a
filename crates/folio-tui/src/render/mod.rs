//! Main render/view function (View in TEA pattern)


use folio_app::contact::Focus;
use folio_app::state::AppState;
use folio_core::Field;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{FormHeader, KeyHints, StatusPopup, SubmitButton, TextField};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; the only side effect is placing the
/// terminal cursor in the focused field.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let form = &state.contact;
    let popup_open = form.status.shows_popup();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(FormHeader::new(&state.settings.ui.title), areas.header);

    for (field, field_area) in [
        (Field::Name, areas.name),
        (Field::Email, areas.email),
        (Field::Message, areas.message),
    ] {
        let focused = form.focus == Focus::Field(field);
        let input = TextField::new(field, form.field(field))
            .error(form.errors.message(field))
            .focused(focused);

        if focused && !popup_open {
            frame.set_cursor_position(input.cursor_position(field_area));
        }
        frame.render_widget(input, field_area);
    }

    frame.render_widget(
        SubmitButton::new(form.status).focused(form.focus == Focus::Submit),
        areas.submit,
    );
    frame.render_widget(KeyHints::new(popup_open), areas.footer);

    // Modal last so it covers the form
    if popup_open {
        frame.render_widget(StatusPopup::new(form.status), area);
    }
}
