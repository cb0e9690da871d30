use aquasim_schemas::alert::{AlertId, AlertState};
use aquasim_schemas::log::{LogEntry, Severity};
use aquasim_schemas::tunables::TunableConfig;

use crate::state::Snapshot;

/// `checkAlerts(snapshot) -> {logs, alertState}` (§6). Edge-triggered latch
/// per alert id: a warning is logged only on the ascending crossing, never
/// on a sustained-true or a false predicate (§4.7).
pub fn check_alerts(snapshot: &Snapshot, tunables: &TunableConfig) -> (AlertState, Vec<LogEntry>) {
    let mut next = snapshot.alert_state;
    let mut logs = Vec::new();

    for id in AlertId::ALL {
        let condition = predicate(id, snapshot, tunables);
        let was_set = snapshot.alert_state.get(id);

        if condition && !was_set {
            let text = message(id);
            crate::logger::warn_alert_transition(id.source(), text);
            logs.push(LogEntry::new(snapshot.tick, id.source(), Severity::Warning, text));
        }
        next.set(id, condition);
    }

    (next, logs)
}

fn predicate(id: AlertId, snapshot: &Snapshot, tunables: &TunableConfig) -> bool {
    let resources = &snapshot.resources;
    match id {
        AlertId::WaterLevelCritical => {
            snapshot.tank.capacity_l > 0.0
                && resources.water / snapshot.tank.capacity_l < tunables.alert_water_critical_fraction
        }
        AlertId::HighAlgae => resources.algae >= tunables.alert_high_algae,
        AlertId::HighAmmonia => resources.ammonia_ppm() > tunables.alert_high_ammonia_ppm,
        AlertId::HighNitrite => resources.nitrite_ppm() > tunables.alert_high_nitrite_ppm,
        AlertId::HighNitrate => resources.nitrate_ppm() > tunables.alert_high_nitrate_ppm,
        AlertId::LowOxygen => resources.oxygen < tunables.alert_low_oxygen_mg_l,
        AlertId::HighCo2 => resources.co2 > tunables.alert_high_co2_mg_l,
    }
}

fn message(id: AlertId) -> &'static str {
    match id {
        AlertId::WaterLevelCritical => "water level critical",
        AlertId::HighAlgae => "algae growth is high",
        AlertId::HighAmmonia => "ammonia is high",
        AlertId::HighNitrite => "nitrite is high",
        AlertId::HighNitrate => "nitrate is high",
        AlertId::LowOxygen => "oxygen is low",
        AlertId::HighCo2 => "CO2 is high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;

    #[test]
    fn alert_fires_once_then_stays_silent() {
        let config = SimulationConfig::new(100.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.water = 10.0;
        let tunables = TunableConfig::default();

        let (state1, logs1) = check_alerts(&snap, &tunables);
        assert_eq!(logs1.len(), 1);
        assert!(state1.water_level_critical);

        snap.alert_state = state1;
        let (state2, logs2) = check_alerts(&snap, &tunables);
        assert!(logs2.is_empty());
        assert!(state2.water_level_critical);
    }

    #[test]
    fn alert_clears_silently_then_refires() {
        let config = SimulationConfig::new(100.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.water = 10.0;
        let tunables = TunableConfig::default();

        let (state1, _) = check_alerts(&snap, &tunables);
        snap.alert_state = state1;

        snap.resources.water = 50.0;
        let (state2, logs2) = check_alerts(&snap, &tunables);
        assert!(logs2.is_empty());
        assert!(!state2.water_level_critical);

        snap.alert_state = state2;
        snap.resources.water = 10.0;
        let (state3, logs3) = check_alerts(&snap, &tunables);
        assert_eq!(logs3.len(), 1);
        assert!(state3.water_level_critical);
    }
}
