use crate::state::Snapshot;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;

/// One tick-stamped row of the calibration harness's CSV trace. This is
/// distinct from the `tracing` diagnostics below and from the snapshot's
/// own `LogRing` — it exists purely so the harness (and `aquasim-app`) can
/// plot/inspect a run after the fact (§1 ambient stack "calibration
/// harness").
#[derive(Debug, Serialize)]
struct TraceRow {
    tick: u64,
    water_l: f64,
    temperature_c: f64,
    ammonia_ppm: f64,
    nitrite_ppm: f64,
    nitrate_ppm: f64,
    oxygen_mg_l: f64,
    co2_mg_l: f64,
    ph: f64,
    algae: f64,
    aob: f64,
    nob: f64,
    plant_count: usize,
    fish_count: usize,
    alerts_json: String,
}

pub struct TraceLogger {
    writer: Writer<fs::File>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), anyhow::Error> {
        let alerts_json = serde_json::to_string(&snapshot.alert_state)?;

        let row = TraceRow {
            tick: snapshot.tick,
            water_l: snapshot.resources.water,
            temperature_c: snapshot.resources.temperature,
            ammonia_ppm: snapshot.resources.ammonia_ppm(),
            nitrite_ppm: snapshot.resources.nitrite_ppm(),
            nitrate_ppm: snapshot.resources.nitrate_ppm(),
            oxygen_mg_l: snapshot.resources.oxygen,
            co2_mg_l: snapshot.resources.co2,
            ph: snapshot.resources.ph,
            algae: snapshot.resources.algae,
            aob: snapshot.resources.aob,
            nob: snapshot.resources.nob,
            plant_count: snapshot.plants.len(),
            fish_count: snapshot.fish.len(),
            alerts_json,
        };

        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Developer-facing diagnostics, separate from the snapshot's own
/// domain-facing `LogRing` (§1 ambient stack). The core never installs a
/// global subscriber itself — only emits spans/events — so embedding a
/// `tracing-subscriber` formatter is the host's decision.
pub fn trace_tick(snapshot: &Snapshot) {
    tracing::trace!(tick = snapshot.tick, plants = snapshot.plants.len(), fish = snapshot.fish.len(), "tick advanced");
}

pub fn debug_rejected_action(message: &str) {
    tracing::debug!(message, "action rejected");
}

pub fn warn_alert_transition(source: &str, message: &str) {
    tracing::warn!(source, message, "alert transitioned");
}

pub fn info_scenario_progress(tick: u64, step: &str) {
    tracing::info!(tick, step, "calibration scenario progress");
}
