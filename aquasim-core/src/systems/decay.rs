use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Uneaten food decays into waste and, for the oxidized remainder, gas
/// byproducts (§4.5 "Decay"). Passive tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    let food = snapshot.resources.food;
    if food <= 0.0 {
        return Vec::new();
    }

    let q10_factor = tunables
        .decay_q10
        .powf((snapshot.resources.temperature - 25.0) / 10.0);
    let decayed = food * tunables.decay_base_rate_per_hr * q10_factor;
    if decayed <= 0.0 {
        return Vec::new();
    }

    let waste_mass = decayed * tunables.decay_waste_fraction;
    let oxidized_mass = decayed - waste_mass;

    let mut effects = vec![
        Effect::new(Tier::Passive, ResourceKey::Food, -decayed, "decay"),
        Effect::new(Tier::Passive, ResourceKey::Waste, waste_mass, "decay"),
    ];

    if snapshot.resources.water > 0.0 && oxidized_mass > 0.0 {
        let gas_mass_per_l = oxidized_mass * tunables.decay_gas_exchange_per_gram / snapshot.resources.water;
        effects.push(Effect::new(Tier::Passive, ResourceKey::Co2, gas_mass_per_l, "decay"));
        effects.push(Effect::new(Tier::Passive, ResourceKey::Oxygen, -gas_mass_per_l, "decay"));
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;

    #[test]
    fn food_decays_into_waste_and_gas() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.food = 10.0;
        snap.resources.temperature = 25.0;
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);

        let food_delta: f64 = effects.iter().filter(|e| e.resource == ResourceKey::Food).map(|e| e.delta).sum();
        let waste_delta: f64 = effects.iter().filter(|e| e.resource == ResourceKey::Waste).map(|e| e.delta).sum();
        assert!(food_delta < 0.0);
        assert!(waste_delta > 0.0);
        assert!((-food_delta * tunables.decay_waste_fraction - waste_delta).abs() < 1e-9);
    }

    #[test]
    fn no_food_produces_no_effects() {
        let config = SimulationConfig::new(50.0);
        let snap = crate::state::create_simulation(&config).unwrap();
        let tunables = TunableConfig::default();
        assert!(update(&snap, &tunables).is_empty());
    }

    #[test]
    fn zero_water_suppresses_gas_side() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.food = 10.0;
        snap.resources.water = 0.0;
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        assert!(!effects.iter().any(|e| e.resource == ResourceKey::Co2));
        assert!(!effects.iter().any(|e| e.resource == ResourceKey::Oxygen));
    }
}
