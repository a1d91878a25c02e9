//! Crate-level error types.

use std::fmt;

use crate::render::context::SurfaceInitError;

/// Errors produced by the isogrid crate.
///
/// Only startup paths are fallible: window/GPU initialization and options
/// I/O. Per-frame guard failures (no focused window, lost surface) are
/// recovered locally and reported through `log`, never through this type.
#[derive(Debug)]
pub enum EditorError {
    /// GPU surface/device initialization failure.
    Gpu(SurfaceInitError),
    /// Window creation failure.
    WindowCreation(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Event-loop construction or run failure.
    EventLoop(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::WindowCreation(msg) => {
                write!(f, "window creation failed: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::EventLoop(msg) => write!(f, "event loop error: {msg}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceInitError> for EditorError {
    fn from(e: SurfaceInitError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for EditorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
