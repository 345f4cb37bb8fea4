//! Crate-level error types.

use std::fmt;

/// Why a camera placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFault {
    /// A position, target or up component is NaN or infinite.
    NonFinite,
    /// The eye position coincides with the target.
    CoincidentTarget,
    /// The up vector has zero length.
    ZeroUp,
    /// The up vector is parallel to the view direction.
    UpParallelToView,
}

impl fmt::Display for GeometryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NonFinite => "non-finite component",
            Self::CoincidentTarget => "position equals target",
            Self::ZeroUp => "up vector has zero length",
            Self::UpParallelToView => "up vector is parallel to the view direction",
        };
        f.write_str(msg)
    }
}

/// Errors produced by the camrig crate.
#[derive(Debug)]
pub enum CameraError {
    /// Degenerate position/target/up at construction.
    InvalidGeometry(GeometryFault),
    /// A controller was attached without a camera.
    NullCamera,
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(fault) => {
                write!(f, "invalid camera geometry: {fault}")
            }
            Self::NullCamera => f.write_str("controller attached without a camera"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryFault> for CameraError {
    fn from(fault: GeometryFault) -> Self {
        Self::InvalidGeometry(fault)
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
