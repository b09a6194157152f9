//! Acquisition lifecycle.
//!
//! One controller owns one acquisition at a time. The host loop drives it
//! with explicit instants, so transitions are strictly sequential and fully
//! deterministic under test.

use std::time::{Duration, Instant};

use geopin_geo::{
    GeoPosition, LocateOverrides, PositionFailure, PositionRequest, PositionSource, SensorBackend,
};

/// Acquisition state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocateState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Delay before `Success` falls back to `Idle`
    pub success_reset_ms: u64,
    /// Delay before `Error` falls back to `Idle`
    pub error_reset_ms: u64,
    /// Sensor options for each acquisition
    pub locate: LocateOverrides,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            success_reset_ms: 2_000,
            error_reset_ms: 3_000,
            locate: LocateOverrides::default(),
        }
    }
}

/// Outcome of one acquisition, emitted exactly once
#[derive(Debug, Clone, PartialEq)]
pub enum LocateEvent {
    Located(GeoPosition),
    Failed(PositionFailure),
}

/// The locate-me state machine
pub struct LocateController<B: SensorBackend> {
    source: PositionSource<B>,
    config: ControllerConfig,
    state: LocateState,
    pending: Option<PositionRequest>,
    reset_at: Option<Instant>,
}

impl<B: SensorBackend> LocateController<B> {
    pub fn new(backend: B, config: ControllerConfig) -> Self {
        Self {
            source: PositionSource::new(backend),
            config,
            state: LocateState::Idle,
            pending: None,
            reset_at: None,
        }
    }

    pub fn state(&self) -> LocateState {
        self.state
    }

    /// Start an acquisition.
    ///
    /// Ignored while one is already in flight; at most one request exists per
    /// controller. From any settled state this cancels the pending auto-reset,
    /// so a stale reset can never regress a newer acquisition.
    pub fn trigger(&mut self, now: Instant) {
        if self.state == LocateState::Loading {
            tracing::debug!("acquisition already in flight");
            return;
        }

        self.reset_at = None;
        self.state = LocateState::Loading;
        self.pending = Some(self.source.request_position(&self.config.locate, now));
    }

    /// Advance the lifecycle.
    ///
    /// Settles the in-flight request when its outcome is ready and applies the
    /// auto-reset once its deadline passes. The settlement event is returned
    /// exactly once per acquisition.
    pub fn tick(&mut self, now: Instant) -> Option<LocateEvent> {
        if let Some(request) = self.pending.as_mut() {
            if let Some(outcome) = request.poll(now) {
                self.pending = None;
                return Some(self.settle(outcome, now));
            }
        }

        if let Some(reset_at) = self.reset_at {
            if now >= reset_at {
                self.reset_at = None;
                self.state = LocateState::Idle;
            }
        }

        None
    }

    fn settle(
        &mut self,
        outcome: Result<GeoPosition, PositionFailure>,
        now: Instant,
    ) -> LocateEvent {
        match outcome {
            Ok(position) => {
                self.state = LocateState::Success;
                self.reset_at = Some(now + Duration::from_millis(self.config.success_reset_ms));
                tracing::info!(lat = position.lat, lng = position.lng, "position acquired");
                LocateEvent::Located(position)
            }
            Err(failure) => {
                self.state = LocateState::Error;
                self.reset_at = Some(now + Duration::from_millis(self.config.error_reset_ms));
                tracing::warn!(%failure, "position acquisition failed");
                LocateEvent::Failed(failure)
            }
        }
    }
}
