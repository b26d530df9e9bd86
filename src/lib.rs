//! PatternPad: a small text editor whose core is a shared clipboard,
//! selectable export formats and live statistics driven by change
//! notifications.
//!
//! The editing core lives in [`app`] and has no GUI dependency. The FLTK
//! front end in [`ui`] and `app::state` is compiled with the `gui` feature.

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
