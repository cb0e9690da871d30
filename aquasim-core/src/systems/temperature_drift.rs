use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Newton-style drift of water temperature toward room temperature, rate
/// scaled inversely with tank volume (§4.5 "Temperature drift"). Passive
/// tier, applied after the heater has already reacted in the immediate
/// tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    if snapshot.tank.capacity_l <= 0.0 {
        return Vec::new();
    }

    let gap = snapshot.environment.room_temperature - snapshot.resources.temperature;
    let volume_factor =
        (tunables.temp_drift_reference_volume_l / snapshot.tank.capacity_l).powf(tunables.temp_drift_volume_exponent);
    let delta = gap * tunables.temp_drift_coefficient_per_hr * volume_factor;

    if delta == 0.0 {
        return Vec::new();
    }

    vec![Effect::new(Tier::Passive, ResourceKey::Temperature, delta, "temperature_drift")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;

    #[test]
    fn drifts_toward_room_temperature() {
        let config = SimulationConfig::new(100.0).with_room_temperature(20.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.temperature = 26.0;
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        assert_eq!(effects.len(), 1);
        assert!(effects[0].delta < 0.0);
    }

    #[test]
    fn smaller_tanks_drift_faster() {
        let tunables = TunableConfig::default();

        let small = SimulationConfig::new(20.0).with_room_temperature(20.0);
        let mut small_snap = crate::state::create_simulation(&small).unwrap();
        small_snap.resources.temperature = 26.0;

        let large = SimulationConfig::new(200.0).with_room_temperature(20.0);
        let mut large_snap = crate::state::create_simulation(&large).unwrap();
        large_snap.resources.temperature = 26.0;

        let small_delta = update(&small_snap, &tunables)[0].delta.abs();
        let large_delta = update(&large_snap, &tunables)[0].delta.abs();
        assert!(small_delta > large_delta);
    }
}
