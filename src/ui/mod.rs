//! FLTK widgets. Only built with the `gui` feature.

pub mod main_window;
pub mod theme;
