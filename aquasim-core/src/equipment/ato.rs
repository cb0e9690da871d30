use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// ATO (auto top-off) controller (§4.4 "ATO"). Registry-compatible: no
/// state hint, just effects.
pub fn update(snapshot: &Snapshot, _tunables: &TunableConfig) -> Vec<Effect> {
    let ato = snapshot.equipment.ato;
    let tank = &snapshot.tank;
    if !ato.enabled || tank.capacity_l <= 0.0 {
        return Vec::new();
    }

    let fraction_full = snapshot.resources.water / tank.capacity_l;
    if fraction_full >= 0.99 {
        return Vec::new();
    }

    let water_delta = tank.capacity_l - snapshot.resources.water;
    let mut effects = vec![Effect::new(Tier::Immediate, ResourceKey::Water, water_delta, "ato")];

    // Mass-balance blend of tank temperature with the added top-off water.
    if snapshot.resources.water + water_delta > 0.0 {
        let new_temperature = (snapshot.resources.water * snapshot.resources.temperature
            + water_delta * snapshot.environment.tap_water_temperature)
            / (snapshot.resources.water + water_delta);
        let temp_delta = new_temperature - snapshot.resources.temperature;
        effects.push(Effect::new(Tier::Immediate, ResourceKey::Temperature, temp_delta, "ato"));
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::equipment::Ato;

    #[test]
    fn ato_tops_off_and_blends_temperature() {
        let config = SimulationConfig::new(100.0)
            .with_ato(Ato { enabled: true })
            .with_tap_water(10.0, 7.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.water = 50.0;
        snap.resources.temperature = 25.0;

        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        let water_delta: f64 = effects
            .iter()
            .filter(|e| e.resource == ResourceKey::Water)
            .map(|e| e.delta)
            .sum();
        assert_eq!(water_delta, 50.0);

        let temp_delta: f64 = effects
            .iter()
            .filter(|e| e.resource == ResourceKey::Temperature)
            .map(|e| e.delta)
            .sum();
        assert!(temp_delta < 0.0);
    }

    #[test]
    fn ato_idle_when_nearly_full() {
        let config = SimulationConfig::new(100.0).with_ato(Ato { enabled: true });
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.water = 99.5;
        let tunables = TunableConfig::default();
        assert!(update(&snap, &tunables).is_empty());
    }
}
