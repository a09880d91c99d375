//! PriceRange TUI - terminal host for the dual-handle price range slider
//!
//! Mounts one slider with:
//! - Mouse dragging through a pointer capture
//! - "From" / "To" price fields with live text entry
//! - Keyboard nudging and upper-bound changes
//! - A status bar echoing the last committed range

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::AppConfig;
pub use theme::Theme;
