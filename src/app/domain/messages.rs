use crate::app::services::export::ExportFormat;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ContentChanged,
    SelectFormat(ExportFormat),
    Save,
    Copy,
    Paste,
    Quit,
}
