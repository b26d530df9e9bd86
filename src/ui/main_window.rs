use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::Choice,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::services::export::ExportFormat;

pub const TOOLBAR_HEIGHT: i32 = 52;
pub const STATUS_BAR_HEIGHT: i32 = 36;

pub struct MainWidgets {
    pub wind: Window,
    pub buffer: TextBuffer,
    pub text_editor: TextEditor,
    pub toolbar: Flex,
    pub hint_label: Frame,
    pub format_label: Frame,
    pub format_choice: Choice,
    pub save_button: Button,
    pub status_bar: Flex,
    pub status_label: Frame,
    pub credit_label: Frame,
}

pub fn build_main_window(sender: &Sender<Message>, initial_format: ExportFormat) -> MainWidgets {
    let mut wind = Window::new(100, 100, 950, 650, "Text Editor Software Patterns");
    wind.set_xclass("PatternPad");

    let mut flex = Flex::new(0, 0, 950, 650, None);
    flex.set_type(FlexType::Column);

    // Toolbar: hint, format selector, save
    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(12);
    toolbar.set_pad(8);

    let mut hint_label = Frame::default().with_label(" NOTE : Use CTRL+C and CTRL+V to copy and paste text");
    hint_label.set_align(Align::Left | Align::Inside);

    let format_label = Frame::default().with_label("RECORDING FORMAT : ");
    toolbar.fixed(&format_label, 150);

    let mut format_choice = Choice::default();
    for format in ExportFormat::ALL {
        format_choice.add_choice(format.label());
    }
    let initial_index = ExportFormat::ALL
        .iter()
        .position(|f| *f == initial_format)
        .unwrap_or(0);
    format_choice.set_value(initial_index as i32);
    toolbar.fixed(&format_choice, 200);
    {
        let s = *sender;
        format_choice.set_callback(move |choice| {
            let index = choice.value().max(0) as usize;
            if let Some(format) = ExportFormat::ALL.get(index) {
                s.send(Message::SelectFormat(*format));
            }
        });
    }

    let mut save_button = Button::default().with_label("SAVE");
    save_button.set_frame(FrameType::FlatBox);
    toolbar.fixed(&save_button, 110);
    save_button.emit(*sender, Message::Save);

    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    // Text area
    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::default();
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_trigger(CallbackTrigger::Changed);
    text_editor.emit(*sender, Message::ContentChanged);
    {
        let s = *sender;
        text_editor.handle(move |_, ev| {
            if ev != Event::KeyDown || !fltk::app::is_event_ctrl() {
                return false;
            }
            let key = fltk::app::event_key();
            if key == fltk::enums::Key::from_char('c') {
                s.send(Message::Copy);
                true
            } else if key == fltk::enums::Key::from_char('v') {
                s.send(Message::Paste);
                true
            } else {
                false
            }
        });
    }

    // Status bar: live statistics and credit line
    let mut status_bar = Flex::default();
    status_bar.set_type(FlexType::Row);
    status_bar.set_margin(10);

    let mut status_label = Frame::default().with_label("Statistics : Ready");
    status_label.set_align(Align::Left | Align::Inside);

    let mut credit_label = Frame::default().with_label("Software Patterns project");
    credit_label.set_align(Align::Right | Align::Inside);

    status_bar.end();
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);

    {
        let s = *sender;
        wind.set_callback(move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::Quit);
            }
        });
    }

    wind.end();

    MainWidgets {
        wind,
        buffer,
        text_editor,
        toolbar,
        hint_label,
        format_label,
        format_choice,
        save_button,
        status_bar,
        status_label,
        credit_label,
    }
}
