//! Failure taxonomy for position acquisition.
//!
//! Every failure path maps to exactly one kind plus a user-facing message.

use thiserror::Error;

/// Native failure codes reported by the host sensor
pub mod native_code {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;
    /// Reserved code surfaced by the capability check, never by the sensor itself
    pub const NOT_SUPPORTED: u16 = 4;
}

/// Classified failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    NotSupported,
    Unknown,
}

/// A classified acquisition failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PositionFailure {
    pub kind: PositionErrorKind,
    pub message: String,
}

/// Map a native sensor failure code to its classified failure.
///
/// Total over all inputs: unrecognized codes classify as `Unknown`.
pub fn classify(code: u16) -> PositionFailure {
    let (kind, message) = match code {
        native_code::PERMISSION_DENIED => (
            PositionErrorKind::PermissionDenied,
            "enable location access in environment settings",
        ),
        native_code::POSITION_UNAVAILABLE => (
            PositionErrorKind::PositionUnavailable,
            "unable to determine location",
        ),
        native_code::TIMEOUT => (PositionErrorKind::Timeout, "location request timed out"),
        native_code::NOT_SUPPORTED => (
            PositionErrorKind::NotSupported,
            "environment does not support location services",
        ),
        _ => (
            PositionErrorKind::Unknown,
            "an error occurred while retrieving location",
        ),
    };

    PositionFailure {
        kind,
        message: message.to_string(),
    }
}
