//! Behavior for the planted-aquarium simulation engine: the effect
//! pipeline, every equipment controller and biochemical system, the
//! plant/fish processors, the alert registry, the action dispatcher, the
//! tick orchestrator, structured-logging glue, persistence and the
//! calibration harness. Declarative types live in `aquasim-schemas`.

pub mod alerts;
pub mod calibration;
pub mod dispatcher;
pub mod effects;
pub mod engine;
pub mod equipment;
pub mod error;
pub mod fish;
pub mod logger;
pub mod passive_resources;
pub mod persistence;
pub mod plants;
pub mod registry;
pub mod state;
pub mod systems;

pub use dispatcher::apply_action;
pub use engine::tick;
pub use error::AquaError;
pub use state::{create_simulation, Snapshot};

/// `checkAlerts(snapshot) -> {logs, alertState}` (§6), re-exported at the
/// crate root alongside the other three tick-driver entry points.
pub fn check_alerts(
    snapshot: &Snapshot,
    tunables: &aquasim_schemas::tunables::TunableConfig,
) -> (aquasim_schemas::alert::AlertState, Vec<aquasim_schemas::log::LogEntry>) {
    alerts::check_alerts(snapshot, tunables)
}
