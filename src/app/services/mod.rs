//! Services layer - the operations behind the editor.
//!
//! - Shared clipboard
//! - Export formats (RTF, HTML)
//! - Change notification
//! - Live statistics

pub mod clipboard;
pub mod export;
pub mod notifier;
pub mod stats;
