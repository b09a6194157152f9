//! Single-shot position requests over the host sensor capability.
//!
//! The sensor is callback-based and non-deterministic; `PositionSource`
//! turns one sensor read into a request handle that settles exactly once.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::{classify, native_code, PositionFailure};
use crate::options::{LocateOptions, LocateOverrides};
use crate::position::GeoPosition;

/// Host-provided location capability
pub trait SensorBackend {
    /// Whether the capability is present in this environment
    fn is_supported(&self) -> bool;

    /// Issue one sensor read, settling `delivery` with the outcome.
    ///
    /// Backends settle at most once; extra settlements are ignored by the
    /// delivery guard.
    fn request(&mut self, options: &LocateOptions, delivery: FixDelivery);
}

#[derive(Debug)]
struct RequestSlot {
    outcome: Option<Result<GeoPosition, PositionFailure>>,
}

/// Write side of a pending request, handed to the sensor backend
#[derive(Clone)]
pub struct FixDelivery {
    slot: Arc<Mutex<RequestSlot>>,
}

impl FixDelivery {
    /// Settle with a fix. Ignored if the request already settled.
    pub fn resolve(&self, position: GeoPosition) {
        let mut slot = self.slot.lock().unwrap();
        if slot.outcome.is_none() {
            slot.outcome = Some(Ok(position));
        }
    }

    /// Settle with a native failure code. Ignored if the request already settled.
    pub fn reject(&self, code: u16) {
        let mut slot = self.slot.lock().unwrap();
        if slot.outcome.is_none() {
            slot.outcome = Some(Err(classify(code)));
        }
    }
}

/// Read side of a pending request
pub struct PositionRequest {
    slot: Arc<Mutex<RequestSlot>>,
    deadline: Instant,
    taken: bool,
}

impl PositionRequest {
    fn settled(now: Instant, outcome: Result<GeoPosition, PositionFailure>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(RequestSlot {
                outcome: Some(outcome),
            })),
            deadline: now,
            taken: false,
        }
    }

    /// Poll for the outcome. Yields the settled result at most once.
    ///
    /// An unsettled request past its deadline settles as `Timeout`; a sensor
    /// callback arriving after that is ignored.
    pub fn poll(&mut self, now: Instant) -> Option<Result<GeoPosition, PositionFailure>> {
        if self.taken {
            return None;
        }

        let mut slot = self.slot.lock().unwrap();
        if slot.outcome.is_none() && now >= self.deadline {
            slot.outcome = Some(Err(classify(native_code::TIMEOUT)));
        }

        let outcome = slot.outcome.clone();
        if outcome.is_some() {
            self.taken = true;
        }
        outcome
    }

    /// Whether the request has settled (outcome may not have been taken yet)
    pub fn is_settled(&self) -> bool {
        self.taken || self.slot.lock().unwrap().outcome.is_some()
    }
}

/// Single-shot request/response facade over the sensor capability
pub struct PositionSource<B: SensorBackend> {
    backend: B,
}

impl<B: SensorBackend> PositionSource<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Request one position fix.
    ///
    /// An absent capability fails immediately with `NotSupported` and no
    /// sensor call is attempted. Otherwise exactly one backend read is
    /// issued with the merged options. There is no retry here; retry is the
    /// caller's responsibility.
    pub fn request_position(
        &mut self,
        overrides: &LocateOverrides,
        now: Instant,
    ) -> PositionRequest {
        if !self.backend.is_supported() {
            tracing::warn!("location capability absent");
            return PositionRequest::settled(now, Err(classify(native_code::NOT_SUPPORTED)));
        }

        let options = overrides.resolve();
        let slot = Arc::new(Mutex::new(RequestSlot { outcome: None }));
        let request = PositionRequest {
            slot: Arc::clone(&slot),
            deadline: now + Duration::from_millis(options.timeout_ms),
            taken: false,
        };

        tracing::debug!(
            high_accuracy = options.enable_high_accuracy,
            timeout_ms = options.timeout_ms,
            maximum_age_ms = options.maximum_age_ms,
            "requesting position"
        );
        self.backend.request(&options, FixDelivery { slot });
        request
    }
}
