//! Application wiring.
//!
//! Connects the acquisition controller to the map and to the caller-facing
//! callbacks: a fix recenters the map and replaces the live marker, a failure
//! surfaces its message. Each callback fires exactly once per acquisition and
//! never while the acquisition is still loading.

use std::time::Instant;

use geopin_geo::SensorBackend;
use geopin_map::{LatLng, MapBackend, MapHandle};

use crate::controller::{LocateController, LocateEvent, LocateState};
use crate::presentation::{project, ButtonVisual};

type LocationCallback = Box<dyn FnMut(f64, f64)>;
type ErrorCallback = Box<dyn FnMut(&str)>;

/// The locate-me affordance wired to a map
pub struct LocateApp<S: SensorBackend, M: MapBackend> {
    controller: LocateController<S>,
    map: MapHandle<M>,
    on_location_found: Option<LocationCallback>,
    on_error: Option<ErrorCallback>,
}

impl<S: SensorBackend, M: MapBackend> LocateApp<S, M> {
    pub fn new(controller: LocateController<S>, map: MapHandle<M>) -> Self {
        Self {
            controller,
            map,
            on_location_found: None,
            on_error: None,
        }
    }

    /// Called once per successful acquisition with `(lat, lng)`
    pub fn on_location_found(&mut self, callback: impl FnMut(f64, f64) + 'static) {
        self.on_location_found = Some(Box::new(callback));
    }

    /// Called once per failed acquisition with the user-facing message
    pub fn on_error(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_error = Some(Box::new(callback));
    }

    pub fn trigger(&mut self, now: Instant) {
        self.controller.trigger(now);
    }

    /// Drive the acquisition lifecycle and apply its outcome
    pub fn tick(&mut self, now: Instant) {
        match self.controller.tick(now) {
            Some(LocateEvent::Located(position)) => {
                self.map
                    .show_user_position(LatLng::new(position.lat, position.lng), position.accuracy);
                if let Some(callback) = self.on_location_found.as_mut() {
                    callback(position.lat, position.lng);
                }
            }
            Some(LocateEvent::Failed(failure)) => {
                if let Some(callback) = self.on_error.as_mut() {
                    callback(&failure.message);
                }
            }
            None => {}
        }
    }

    pub fn state(&self) -> LocateState {
        self.controller.state()
    }

    /// Visual for the locate button in the current state
    pub fn visual(&self) -> ButtonVisual {
        project(self.controller.state())
    }

    pub fn map(&self) -> &MapHandle<M> {
        &self.map
    }

    /// Tear the map down and stop. Consumes the app.
    pub fn shutdown(self) -> M {
        self.map.teardown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerConfig;
    use geopin_geo::{native_code, GeoPosition, SimulatedSensor};
    use geopin_map::{HeadlessBackend, MapConfig, Spot, FOCUS_ZOOM};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn sample_spots() -> Vec<Spot> {
        vec![Spot {
            name: "Pongour Falls".to_string(),
            description: "Seven-tiered waterfall".to_string(),
            coords: LatLng::new(11.6868, 108.3773),
        }]
    }

    fn app(sensor: SimulatedSensor) -> LocateApp<SimulatedSensor, HeadlessBackend> {
        let controller = LocateController::new(sensor, ControllerConfig::default());
        let backend = HeadlessBackend::new().with_container("map");
        let map = MapHandle::initialize(&MapConfig::default(), backend, &sample_spots()).unwrap();
        LocateApp::new(controller, map)
    }

    #[test]
    fn test_fix_reaches_map_and_callback_once() {
        let mut app = app(SimulatedSensor::with_fix(GeoPosition::with_accuracy(
            14.0583, 108.2772, 15.0,
        )));

        let found: Arc<Mutex<Vec<(f64, f64)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&found);
        app.on_location_found(move |lat, lng| sink.lock().unwrap().push((lat, lng)));

        let t0 = Instant::now();
        app.trigger(t0);
        assert_eq!(app.state(), LocateState::Loading);
        // Nothing surfaces while loading.
        assert!(found.lock().unwrap().is_empty());

        app.tick(t0);
        app.tick(t0 + Duration::from_millis(1));

        assert_eq!(*found.lock().unwrap(), vec![(14.0583, 108.2772)]);
        assert_eq!(app.map().viewport().center, LatLng::new(14.0583, 108.2772));
        assert_eq!(app.map().viewport().zoom, FOCUS_ZOOM);
        // One spot plus the singleton live marker.
        assert_eq!(app.map().marker_count(), 2);
    }

    #[test]
    fn test_repeated_fixes_keep_single_live_marker() {
        let mut app = app(SimulatedSensor::with_fix(GeoPosition::new(14.0583, 108.2772)));
        let t0 = Instant::now();

        app.trigger(t0);
        app.tick(t0);
        // Wait out the success reset, then acquire again.
        app.tick(t0 + Duration::from_millis(2_000));
        assert_eq!(app.state(), LocateState::Idle);
        app.trigger(t0 + Duration::from_millis(2_100));
        app.tick(t0 + Duration::from_millis(2_100));

        assert_eq!(app.map().marker_count(), 2);
    }

    #[test]
    fn test_failure_surfaces_message_once() {
        let mut app = app(SimulatedSensor::failing(native_code::PERMISSION_DENIED));

        let errors: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&errors);
        app.on_error(move |message| sink.lock().unwrap().push(message.to_string()));

        let t0 = Instant::now();
        app.trigger(t0);
        app.tick(t0);
        app.tick(t0 + Duration::from_millis(1));

        assert_eq!(
            *errors.lock().unwrap(),
            vec!["enable location access in environment settings".to_string()]
        );
        assert_eq!(app.state(), LocateState::Error);
        // The failed acquisition leaves the map untouched.
        assert_eq!(app.map().marker_count(), 1);
    }

    #[test]
    fn test_visual_tracks_state() {
        let mut app = app(SimulatedSensor::failing(native_code::TIMEOUT));
        let t0 = Instant::now();

        assert_eq!(app.visual().label, "Locate me");
        app.trigger(t0);
        assert_eq!(app.visual().label, "Locating");
        app.tick(t0);
        assert_eq!(app.visual().label, "Location failed");
    }

    #[test]
    fn test_shutdown_tears_map_down() {
        let app = app(SimulatedSensor::with_fix(GeoPosition::new(1.0, 2.0)));

        let backend = app.shutdown();

        assert!(backend.is_destroyed());
        assert_eq!(backend.marker_count(), 0);
    }
}
