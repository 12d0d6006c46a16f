//! Input/output: text and image formats, command line, logging and errors

/// ASCII tile map codec
pub mod ascii;
/// Command-line arguments and the generation driver
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export of tile maps
pub mod image;
/// Stderr backend for the `log` facade
pub mod logging;
/// Progress bars for attempts and cells
pub mod progress;
