//! Error types for the Lumen client
//!
//! Only the resource layer produces hard errors. HUD and scene operations
//! tolerate invalid input silently and never return these.

use std::fmt;

/// Result type for Lumen client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen client errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Render or texture backend error
    BackendError(String),

    /// Invalid resource (unknown shader, mesh, texture, etc.)
    InvalidResource(String),

    /// The image at `path` could not be decoded
    TextureLoadFailed { path: String },

    /// The decoded buffer of `path` could not be released after upload
    TextureReleaseFailed { path: String },
}

impl Error {
    /// Path of the texture that failed, if this is a texture error
    pub fn texture_path(&self) -> Option<&str> {
        match self {
            Error::TextureLoadFailed { path } | Error::TextureReleaseFailed { path } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::TextureLoadFailed { path } => write!(f, "Unable to load texture : \"{}\"", path),
            Error::TextureReleaseFailed { path } => {
                write!(f, "Unable to unload texture buffer : \"{}\"", path)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error (with file:line) and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("lumen::SkyboxRenderer", "Shader '{}' not found", name));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::lumen::Error::BackendError(message)
    }};
}

/// Log an error and return early with an `Error::BackendError`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
