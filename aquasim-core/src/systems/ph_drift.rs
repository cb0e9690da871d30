use aquasim_schemas::equipment::HardscapeMaterial;
use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// pH drifts toward the tap-water target, biased by driftwood (lowers),
/// calcite (raises) and high CO2 (lowers, via carbonic acid) (§4.5 "pH
/// drift"). Passive tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    let target_drift = (snapshot.environment.tap_water_ph - snapshot.resources.ph) * tunables.ph_drift_rate_per_hr;

    let mut hardscape_bias = 0.0;
    for item in &snapshot.equipment.hardscape.items {
        hardscape_bias += match item.material {
            HardscapeMaterial::Driftwood => tunables.driftwood_ph_delta,
            HardscapeMaterial::Calcite => tunables.calcite_ph_delta,
            HardscapeMaterial::Inert => 0.0,
        };
    }

    let co2_excess = (snapshot.resources.co2 - tunables.co2_atmospheric_mg_per_l).max(0.0);
    let co2_bias = -co2_excess * tunables.co2_ph_sensitivity;

    let delta = target_drift + hardscape_bias + co2_bias;
    if delta == 0.0 {
        return Vec::new();
    }

    vec![Effect::new(Tier::Passive, ResourceKey::Ph, delta, "ph_drift")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::equipment::{Hardscape, HardscapeItem};

    #[test]
    fn driftwood_lowers_ph() {
        let mut hardscape = Hardscape::default();
        hardscape.items.push(HardscapeItem {
            surface_cm2: 50.0,
            material: HardscapeMaterial::Driftwood,
        });
        let config = SimulationConfig::new(50.0).with_hardscape(hardscape);
        let snap = crate::state::create_simulation(&config).unwrap();
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        assert!(effects[0].delta < 0.0);
    }

    #[test]
    fn high_co2_pulls_ph_down() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.co2 = 40.0;
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        assert!(effects[0].delta < 0.0);
    }
}
