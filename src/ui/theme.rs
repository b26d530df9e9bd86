use fltk::{
    enums::{Color, Font},
    prelude::*,
};

use super::main_window::MainWidgets;

/// Midnight blue used for text, the save button and the status bar.
pub const THEME_COLOR: (u8, u8, u8) = (44, 62, 80);

fn theme_color() -> Color {
    let (r, g, b) = THEME_COLOR;
    Color::from_rgb(r, g, b)
}

pub fn apply_theme(widgets: &mut MainWidgets) {
    let theme = theme_color();

    widgets.wind.set_color(Color::from_rgb(245, 247, 250));

    widgets.toolbar.set_color(Color::White);
    widgets.hint_label.set_label_color(Color::from_rgb(128, 128, 128));
    widgets.hint_label.set_label_font(Font::HelveticaItalic);
    widgets.hint_label.set_label_size(12);
    widgets.format_label.set_label_color(theme);
    widgets.format_label.set_label_size(13);
    widgets.format_choice.set_color(Color::White);
    widgets.format_choice.set_text_color(theme);
    widgets.format_choice.set_text_size(13);
    widgets.save_button.set_color(theme);
    widgets.save_button.set_selection_color(theme.lighter());
    widgets.save_button.set_label_color(Color::White);
    widgets.save_button.set_label_font(Font::HelveticaBold);
    widgets.save_button.set_label_size(14);

    widgets.text_editor.set_color(Color::White);
    widgets.text_editor.set_text_color(theme);
    widgets.text_editor.set_text_font(Font::Helvetica);
    widgets.text_editor.set_text_size(15);
    widgets.text_editor.set_cursor_color(theme);
    widgets.text_editor.set_selection_color(Color::from_rgb(173, 216, 230));

    widgets.status_bar.set_frame(fltk::enums::FrameType::FlatBox);
    widgets.status_bar.set_color(theme);
    widgets.status_label.set_label_color(Color::White);
    widgets.status_label.set_label_font(Font::HelveticaBold);
    widgets.status_label.set_label_size(12);
    widgets.credit_label.set_label_color(Color::from_rgb(200, 200, 200));
    widgets.credit_label.set_label_font(Font::HelveticaItalic);
    widgets.credit_label.set_label_size(11);

    widgets.wind.redraw();
}
