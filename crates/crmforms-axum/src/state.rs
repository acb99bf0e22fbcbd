//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AppContext`: the object service for the
/// configured schema and the compiled templates. Nothing in it is mutated
/// after startup.
pub type AppState = Arc<AppContext>;
