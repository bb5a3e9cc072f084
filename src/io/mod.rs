/// Command-line interface and replay session
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of connector layouts
pub mod image;
/// Replay progress display
pub mod progress;
/// Text rendering of connector layouts
pub mod render;
/// Placement scripts and random scatter
pub mod script;
/// GIF capture of placement sequences
pub mod visualization;
