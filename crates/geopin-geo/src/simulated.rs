//! Simulated sensor backend.
//!
//! Settles immediately with a scripted outcome. Used by the demo binary and
//! by tests that need full control over settlement.

use std::sync::{Arc, Mutex};

use crate::options::LocateOptions;
use crate::position::GeoPosition;
use crate::source::{FixDelivery, SensorBackend};

#[derive(Debug, Clone, Copy)]
enum Reading {
    Fix(GeoPosition),
    Failure(u16),
    /// Never settles; lets the request deadline fire
    Silent,
}

/// Scripted location sensor
pub struct SimulatedSensor {
    supported: bool,
    reading: Reading,
    requests: Arc<Mutex<u32>>,
    last_delivery: Arc<Mutex<Option<FixDelivery>>>,
}

impl SimulatedSensor {
    fn new(supported: bool, reading: Reading) -> Self {
        Self {
            supported,
            reading,
            requests: Arc::new(Mutex::new(0)),
            last_delivery: Arc::new(Mutex::new(None)),
        }
    }

    /// Sensor that resolves every read with `fix`
    pub fn with_fix(fix: GeoPosition) -> Self {
        Self::new(true, Reading::Fix(fix))
    }

    /// Sensor that rejects every read with a native failure code
    pub fn failing(code: u16) -> Self {
        Self::new(true, Reading::Failure(code))
    }

    /// Sensor that never answers
    pub fn silent() -> Self {
        Self::new(true, Reading::Silent)
    }

    /// Environment without the capability
    pub fn unsupported() -> Self {
        Self::new(false, Reading::Silent)
    }

    /// Shared handle to the number of reads issued so far
    pub fn request_counter(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.requests)
    }

    /// Shared handle to the most recent delivery, for scripting late callbacks
    pub fn delivery_probe(&self) -> Arc<Mutex<Option<FixDelivery>>> {
        Arc::clone(&self.last_delivery)
    }
}

impl SensorBackend for SimulatedSensor {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn request(&mut self, _options: &LocateOptions, delivery: FixDelivery) {
        *self.requests.lock().unwrap() += 1;
        *self.last_delivery.lock().unwrap() = Some(delivery.clone());

        match self.reading {
            Reading::Fix(fix) => delivery.resolve(fix),
            Reading::Failure(code) => delivery.reject(code),
            Reading::Silent => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LocateOverrides;
    use crate::source::PositionSource;
    use std::time::Instant;

    #[test]
    fn test_counts_requests() {
        let sensor = SimulatedSensor::with_fix(GeoPosition::new(1.0, 2.0));
        let counter = sensor.request_counter();
        let mut source = PositionSource::new(sensor);

        let now = Instant::now();
        source.request_position(&LocateOverrides::default(), now);
        source.request_position(&LocateOverrides::default(), now);

        assert_eq!(*counter.lock().unwrap(), 2);
    }
}
