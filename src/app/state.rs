use std::rc::Rc;

use fltk::{
    dialog,
    frame::Frame,
    menu::Choice,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::domain::document::SharedEngine;
use super::services::export::{ExportFormat, requested_filename};
use super::services::stats::StatisticsView;
use crate::ui::main_window::MainWidgets;

/// Glue between the FLTK widgets and the [`DocumentEngine`](super::domain::DocumentEngine).
pub struct AppState {
    pub engine: SharedEngine,
    pub stats: Rc<StatisticsView>,
    pub buffer: TextBuffer,
    pub editor: TextEditor,
    pub window: Window,
    pub format_choice: Choice,
    pub status_label: Frame,
}

impl AppState {
    pub fn new(widgets: MainWidgets, engine: SharedEngine) -> Self {
        let stats = Rc::new(StatisticsView::new());
        stats.attach(&engine);

        // Registered after the view, so it always reads fresh numbers
        let view = Rc::clone(&stats);
        let label = widgets.status_label.clone();
        engine.subscribe(move |_content: &str| {
            let mut label = label.clone();
            label.set_label(&format!("  {}  ", view.latest()));
            label.redraw();
        });

        Self {
            engine,
            stats,
            buffer: widgets.buffer,
            editor: widgets.text_editor,
            window: widgets.wind,
            format_choice: widgets.format_choice,
            status_label: widgets.status_label,
        }
    }

    /// Push the widget text into the engine.
    pub fn sync_content(&mut self) {
        if let Err(e) = self.engine.set_content(self.buffer.text()) {
            log::error!("Failed to update document: {}", e);
        }
    }

    pub fn select_format(&mut self, format: ExportFormat) {
        self.engine.set_export_format(format);
    }

    /// Ask for a name and export with the active format. Errors end up in a
    /// dialog; nothing here may bring the window down.
    pub fn save(&mut self) {
        let Some(input) = dialog::input_default("File name (without extension) :", "") else {
            return;
        };
        let Some(filename) = requested_filename(&input) else {
            return;
        };

        self.sync_content();
        let label = self.engine.export_format().label();
        match self.engine.save(filename) {
            Ok(path) => dialog::message_default(&format!("Saved {} file :\n{}", label, path.display())),
            Err(e) => dialog::alert_default(&format!("Error : {}", e)),
        }
    }

    /// Copy the selection, or the whole text when nothing is selected.
    pub fn copy(&mut self) {
        self.sync_content();
        if self.buffer.selected() {
            self.engine.copy_text(&self.buffer.selection_text());
        } else {
            self.engine.copy();
        }
        dialog::message_default("Text successfully copied (CTRL+C) !");
    }

    /// Replace the selection (or insert at the cursor) with the clipboard text.
    pub fn paste(&mut self) {
        let text = self.engine.paste();
        if self.buffer.selected() {
            self.buffer.replace_selection(&text);
        } else {
            self.editor.insert(&text);
        }
        self.sync_content();
    }
}
