use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::passive_resources::lid_multiplier;
use crate::state::Snapshot;

/// `water · baseRatePerDay/24 · 2^(|T_water - T_room| / doublingInterval) ·
/// lidMultiplier(lid)` (§4.5 "Evaporation"). Immediate tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    let lid = lid_multiplier(snapshot.equipment.lid.lid_type);
    if lid == 0.0 {
        return Vec::new();
    }

    let temp_gap = (snapshot.resources.temperature - snapshot.environment.room_temperature).abs();
    let rate_per_hour = snapshot.resources.water
        * (tunables.evaporation_base_rate_per_day / 24.0)
        * 2f64.powf(temp_gap / tunables.evaporation_temp_doubling_interval)
        * lid;

    if rate_per_hour <= 0.0 {
        return Vec::new();
    }

    vec![Effect::new(Tier::Immediate, ResourceKey::Water, -rate_per_hour, "evaporation")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::equipment::{Lid, LidType};

    #[test]
    fn sealed_lid_has_zero_evaporation() {
        let config = SimulationConfig::new(100.0).with_lid(Lid { lid_type: LidType::Sealed });
        let snap = crate::state::create_simulation(&config).unwrap();
        let tunables = TunableConfig::default();
        assert!(update(&snap, &tunables).is_empty());
    }

    #[test]
    fn open_lid_evaporates_water() {
        let config = SimulationConfig::new(100.0);
        let snap = crate::state::create_simulation(&config).unwrap();
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        assert_eq!(effects.len(), 1);
        assert!(effects[0].delta < 0.0);
    }
}
