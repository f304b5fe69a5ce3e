//! WSTD MANGLR editor - egui rendering of the manglr-core panel.
//!
//! This crate is the rendering collaborator for [`manglr_core::Panel`]:
//! it draws knobs, the limiter switch and the sequence list, reports user
//! interaction back to the core, and hosts a small demo engine so the panel
//! can run standalone.
//!
//! # Modules
//!
//! - [`app`] — eframe application wiring panel, host and engine together
//! - [`host`] — [`EguiHost`], the [`WidgetHost`](manglr_core::WidgetHost) implementation
//! - [`widgets`] — Knob, toggle and sequence-list widgets
//! - [`engine`] — Channel-backed demo engine that echoes edits back
//! - [`config`] — TOML editor configuration
//! - [`theme`] — Panel styling and color conversion

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod theme;
pub mod widgets;

pub use app::ManglrApp;
pub use config::{EditorConfig, WindowConfig};
pub use engine::{DemoEngine, EngineEvent};
pub use error::ConfigError;
pub use host::EguiHost;
pub use theme::Theme;
