//! Domain layer - core data structures and types.
//!
//! - DocumentEngine, the single owner of the text being edited
//! - Editor settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;

pub use document::{DocumentEngine, SharedEngine};
pub use messages::Message;
pub use settings::EditorSettings;
