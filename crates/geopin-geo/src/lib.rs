//! Geopin position acquisition
//!
//! Wraps the host's callback-based location sensor into single-shot
//! request/response operations with a closed failure taxonomy.
//!
//! # Features
//! - Capability detection before any sensor call
//! - Field-wise merged request options with documented defaults
//! - First-resolution-wins guard against misbehaving sensors
//! - Deadline enforcement independent of the host sensor's timeout
//! - Exhaustive classification of native failure codes

pub mod error;
pub mod options;
pub mod position;
pub mod simulated;
pub mod source;

pub use error::{classify, native_code, PositionErrorKind, PositionFailure};
pub use options::{LocateOptions, LocateOverrides};
pub use position::GeoPosition;
pub use simulated::SimulatedSensor;
pub use source::{FixDelivery, PositionRequest, PositionSource, SensorBackend};
