//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DocumentEngine, Settings, Messages)
//! - `services/` - Business operations (clipboard, export, notifier, stats)
//! - `infrastructure/` - Cross-cutting concerns (errors, logging)
//! - `state.rs` - Main application coordinator (`gui` feature)

pub mod domain;
pub mod infrastructure;
pub mod services;
#[cfg(feature = "gui")]
pub mod state;

// Re-exports for convenient external access
pub use domain::{DocumentEngine, EditorSettings, Message, SharedEngine};
pub use infrastructure::{AppError, Result};
pub use services::clipboard::{Clipboard, SharedClipboard};
pub use services::export::{ExportFormat, ExportOptions};
pub use services::notifier::{ChangeNotifier, SubscriptionId};
pub use services::stats::{DocumentStats, StatisticsView};
