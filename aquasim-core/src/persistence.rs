use aquasim_schemas::log::LogRing;
use aquasim_schemas::tunables::TunableConfig;
use serde::{Deserialize, Serialize};

use crate::error::AquaError;
use crate::state::Snapshot;

/// The schema version this build writes and accepts (§6 "Persisted state
/// format"). A mismatch is not an error — the host discards and
/// re-initializes (§7 "Structural corruption on load").
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// `{version, simulation: <Snapshot minus logs>, tunableConfig, ui}` (§6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub simulation: Snapshot,
    pub tunable_config: TunableConfig,
    pub ui: Option<serde_json::Value>,
}

/// The result of loading: each subsection is independently `None` if it
/// failed structural validation, rather than failing the whole load
/// (§6 "return null for that subsection only").
#[derive(Debug, Default)]
pub struct LoadedState {
    pub simulation: Option<Snapshot>,
    pub tunable_config: Option<TunableConfig>,
    pub ui: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    #[serde(default)]
    simulation: Option<serde_json::Value>,
    #[serde(default)]
    tunable_config: Option<serde_json::Value>,
    #[serde(default)]
    ui: Option<serde_json::Value>,
}

/// Strips logs (never persisted, §6) and wraps the snapshot for saving.
/// Debouncing the actual write is the host's concern (§6 "≈500 ms").
pub fn save(snapshot: &Snapshot, tunables: &TunableConfig, ui: Option<serde_json::Value>) -> PersistedState {
    let mut simulation = snapshot.clone();
    simulation.logs = LogRing::new(tunables.log_ring_capacity);
    PersistedState {
        version: CURRENT_SCHEMA_VERSION,
        simulation,
        tunable_config: *tunables,
        ui,
    }
}

pub fn save_to_json(snapshot: &Snapshot, tunables: &TunableConfig, ui: Option<serde_json::Value>) -> Result<String, AquaError> {
    let persisted = save(snapshot, tunables, ui);
    serde_json::to_string(&persisted).map_err(AquaError::from)
}

/// Loads and validates a persisted envelope (§6 "On load"). A version
/// mismatch discards everything; per-subsection parse failures null out
/// only that subsection.
pub fn load(raw: &str) -> Result<LoadedState, AquaError> {
    let envelope: RawEnvelope = serde_json::from_str(raw)?;

    if envelope.version != CURRENT_SCHEMA_VERSION {
        return Ok(LoadedState::default());
    }

    let simulation = envelope
        .simulation
        .and_then(|value| serde_json::from_value::<Snapshot>(value).ok());
    let tunable_config = envelope
        .tunable_config
        .and_then(|value| serde_json::from_value::<TunableConfig>(value).ok());

    Ok(LoadedState {
        simulation,
        tunable_config,
        ui: envelope.ui,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;

    #[test]
    fn round_trips_modulo_logs() {
        let config = SimulationConfig::new(100.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.logs.push(aquasim_schemas::log::LogEntry::new(
            0,
            "user",
            aquasim_schemas::log::Severity::Info,
            "hello",
        ));
        let tunables = TunableConfig::default();

        let json = save_to_json(&snap, &tunables, None).unwrap();
        let loaded = load(&json).unwrap();

        let mut expected = snap.clone();
        expected.logs = LogRing::new(tunables.log_ring_capacity);
        assert_eq!(loaded.simulation.unwrap(), expected);
        assert_eq!(loaded.tunable_config.unwrap(), tunables);
    }

    #[test]
    fn version_mismatch_discards_everything() {
        let raw = r#"{"version": 999, "simulation": {}, "tunable_config": {}, "ui": null}"#;
        let loaded = load(raw).unwrap();
        assert!(loaded.simulation.is_none());
        assert!(loaded.tunable_config.is_none());
    }

    #[test]
    fn corrupt_subsection_nulls_out_only_that_subsection() {
        let raw = format!(
            r#"{{"version": {}, "simulation": {{"not":"a snapshot"}}, "tunable_config": null, "ui": null}}"#,
            CURRENT_SCHEMA_VERSION
        );
        let loaded = load(&raw).unwrap();
        assert!(loaded.simulation.is_none());
        assert!(loaded.tunable_config.is_none());
    }
}
