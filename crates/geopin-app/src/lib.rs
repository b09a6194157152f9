//! Geopin application layer
//!
//! The locate-me affordance: a four-state acquisition lifecycle over the
//! position source, a pure state-to-visual projection, and the wiring that
//! feeds acquired positions into the map.

pub mod app;
pub mod controller;
pub mod presentation;

pub use app::LocateApp;
pub use controller::{ControllerConfig, LocateController, LocateEvent, LocateState};
pub use presentation::{project, ButtonVisual};
