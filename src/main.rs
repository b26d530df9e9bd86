use std::rc::Rc;

use fltk::{app, prelude::*};

use pattern_pad::app::domain::{DocumentEngine, EditorSettings, Message};
use pattern_pad::app::infrastructure::init_logging;
use pattern_pad::app::services::clipboard::Clipboard;
use pattern_pad::app::state::AppState;
use pattern_pad::ui::main_window::build_main_window;
use pattern_pad::ui::theme::apply_theme;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = EditorSettings::load();
    let clipboard = Clipboard::shared();
    let engine = Rc::new(DocumentEngine::from_settings(clipboard, &settings));

    let mut widgets = build_main_window(&sender, engine.export_format());
    apply_theme(&mut widgets);

    let mut state = AppState::new(widgets, engine);
    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::ContentChanged => state.sync_content(),
                Message::SelectFormat(format) => state.select_format(format),
                Message::Save => state.save(),
                Message::Copy => state.copy(),
                Message::Paste => state.paste(),
                Message::Quit => app.quit(),
            }
        }
    }
}
