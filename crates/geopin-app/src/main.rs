//! Geopin demo - Main Entry Point
//!
//! Runs one successful and one failed acquisition against the simulated
//! sensor and the headless map backend, logging every transition.

use std::time::{Duration, Instant};

use geopin_app::{ControllerConfig, LocateApp, LocateController};
use geopin_geo::{native_code, GeoPosition, SimulatedSensor};
use geopin_map::{spots_from_json, HeadlessBackend, MapConfig, MapHandle};
use tracing_subscriber::EnvFilter;

const SPOT_FEED: &str = r#"[
    {"name": "Pongour Falls", "description": "Seven-tiered waterfall near Da Lat", "coords": {"lat": 11.6868, "lng": 108.3773}},
    {"name": "Hoan Kiem Lake", "description": "Lake in central Hanoi", "coords": {"lat": 21.0287, "lng": 105.8524}},
    {"name": "Golden Bridge", "description": "Pedestrian bridge in the Ba Na hills", "coords": {"lat": 15.9954, "lng": 107.9966}}
]"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("starting geopin demo");

    let spots = spots_from_json(SPOT_FEED)?;

    // Successful acquisition.
    let sensor = SimulatedSensor::with_fix(GeoPosition::with_accuracy(14.0583, 108.2772, 15.0));
    run_acquisition("success", sensor, &spots)?;

    // Denied permission.
    let sensor = SimulatedSensor::failing(native_code::PERMISSION_DENIED);
    run_acquisition("permission denied", sensor, &spots)?;

    Ok(())
}

fn run_acquisition(
    scenario: &str,
    sensor: SimulatedSensor,
    spots: &[geopin_map::Spot],
) -> anyhow::Result<()> {
    tracing::info!(scenario, "running acquisition");

    let backend = HeadlessBackend::new().with_container("map");
    let map = MapHandle::initialize(&MapConfig::default(), backend, spots)?;
    let controller = LocateController::new(sensor, ControllerConfig::default());
    let mut app = LocateApp::new(controller, map);

    app.on_location_found(|lat, lng| tracing::info!(lat, lng, "location found"));
    app.on_error(|message| tracing::warn!(message, "location failed"));

    let t0 = Instant::now();
    app.trigger(t0);
    tracing::info!(label = app.visual().label, "button");

    app.tick(t0);
    tracing::info!(label = app.visual().label, "button");

    // Let the auto-reset fire.
    app.tick(t0 + Duration::from_millis(3_000));
    tracing::info!(label = app.visual().label, "button");

    let backend = app.shutdown();
    tracing::info!(
        scenario,
        destroyed = backend.is_destroyed(),
        "acquisition finished"
    );
    Ok(())
}
