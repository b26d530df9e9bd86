use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::app::domain::settings::EditorSettings;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::clipboard::SharedClipboard;
use crate::app::services::export::{ExportFormat, ExportOptions};
use crate::app::services::notifier::{ChangeNotifier, SubscriptionId};

/// The document being edited, its export format and everyone watching it.
///
/// Every mutation goes through here so observers always see the latest text.
/// Methods take `&self`, which lets observers hold an `Rc<DocumentEngine>` and
/// read it back while a change is being published.
#[derive(Debug)]
pub struct DocumentEngine {
    content: RefCell<String>,
    format: Cell<ExportFormat>,
    notifier: ChangeNotifier<str>,
    clipboard: SharedClipboard,
    options: ExportOptions,
}

impl DocumentEngine {
    pub fn new(clipboard: SharedClipboard) -> Self {
        Self::with_options(clipboard, ExportFormat::default(), ExportOptions::default())
    }

    pub fn with_options(clipboard: SharedClipboard, format: ExportFormat, options: ExportOptions) -> Self {
        Self {
            content: RefCell::new(String::new()),
            format: Cell::new(format),
            notifier: ChangeNotifier::new(),
            clipboard,
            options,
        }
    }

    /// Build an engine configured from user settings.
    pub fn from_settings(clipboard: SharedClipboard, settings: &EditorSettings) -> Self {
        Self::with_options(clipboard, settings.default_export_format, settings.export_options())
    }

    /// Replace the whole buffer and notify every observer.
    ///
    /// Fails without touching the buffer when called from inside an observer.
    pub fn set_content(&self, text: impl Into<String>) -> Result<()> {
        if self.notifier.is_publishing() {
            log::warn!("Rejected document update issued while observers were running");
            return Err(AppError::ReentrantNotification);
        }

        let text = text.into();
        *self.content.borrow_mut() = text;

        let content = self.content.borrow();
        self.notifier.publish(content.as_str())
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn set_export_format(&self, format: ExportFormat) {
        log::debug!("Export format set to {}", format);
        self.format.set(format);
    }

    pub fn export_format(&self) -> ExportFormat {
        self.format.get()
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export the current buffer with the active format.
    pub fn save(&self, filename: &str) -> Result<PathBuf> {
        let content = self.content.borrow();
        self.format.get().save(&content, filename, &self.options)
    }

    /// Copy the whole buffer to the clipboard.
    pub fn copy(&self) {
        let content = self.content.borrow();
        self.clipboard.borrow_mut().copy(&content);
    }

    /// Copy an arbitrary piece of text, typically the UI selection.
    pub fn copy_text(&self, text: &str) {
        self.clipboard.borrow_mut().copy(text);
    }

    /// Read the clipboard. The buffer is left alone; callers splice the text in
    /// and then call [`set_content`](Self::set_content).
    pub fn paste(&self) -> String {
        self.clipboard.borrow().paste()
    }

    pub fn clipboard(&self) -> &SharedClipboard {
        &self.clipboard
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.notifier.len()
    }
}

/// Handle used by the UI, which needs the engine from several callbacks.
pub type SharedEngine = Rc<DocumentEngine>;
