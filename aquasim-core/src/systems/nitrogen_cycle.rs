use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Mineralization, AOB, NOB, spawning and logistic population dynamics
/// (§4.5 "Nitrogen cycle"). Passive tier. All reads are taken from the
/// pre-tier snapshot; effects on the same resource accumulate additively
/// once applied (§4.1 "Ordering within a tier").
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    let resources = &snapshot.resources;
    let mut effects = Vec::new();

    // 1. Mineralization: waste -> ammonia.
    let waste_consumed = resources.waste * tunables.waste_conversion_rate;
    if waste_consumed > 0.0 {
        let ammonia_produced = waste_consumed * tunables.waste_to_ammonia_ratio;
        effects.push(Effect::new(Tier::Passive, ResourceKey::Waste, -waste_consumed, "nitrogen_cycle"));
        effects.push(Effect::new(Tier::Passive, ResourceKey::Ammonia, ammonia_produced, "nitrogen_cycle"));
    }

    // 2. AOB: ammonia -> nitrite.
    let aob_capacity = resources.aob * tunables.aob_processing_rate * resources.water;
    let ammonia_processed = resources.ammonia.min(aob_capacity.max(0.0));
    if ammonia_processed > 0.0 {
        effects.push(Effect::new(Tier::Passive, ResourceKey::Ammonia, -ammonia_processed, "nitrogen_cycle"));
        effects.push(Effect::new(Tier::Passive, ResourceKey::Nitrite, ammonia_processed, "nitrogen_cycle"));
    }

    // 3. NOB: nitrite -> nitrate.
    let nob_capacity = resources.nob * tunables.nob_processing_rate * resources.water;
    let nitrite_processed = resources.nitrite.min(nob_capacity.max(0.0));
    if nitrite_processed > 0.0 {
        effects.push(Effect::new(Tier::Passive, ResourceKey::Nitrite, -nitrite_processed, "nitrogen_cycle"));
        effects.push(Effect::new(Tier::Passive, ResourceKey::Nitrate, nitrite_processed, "nitrogen_cycle"));
    }

    let ammonia_ppm = resources.ammonia_ppm();
    let nitrite_ppm = resources.nitrite_ppm();
    let max_bacteria = snapshot.max_bacteria_population(tunables);

    // 4. Spawning.
    if resources.aob == 0.0 && ammonia_ppm >= tunables.bacteria_spawn_threshold_ppm {
        effects.push(Effect::new(Tier::Passive, ResourceKey::Aob, tunables.bacteria_spawn_amount, "nitrogen_cycle"));
    }
    if resources.nob == 0.0 && nitrite_ppm >= tunables.bacteria_spawn_threshold_ppm {
        effects.push(Effect::new(Tier::Passive, ResourceKey::Nob, tunables.bacteria_spawn_amount, "nitrogen_cycle"));
    }

    // 5 & 6. Logistic growth/death, gated on the population's own food source.
    effects.push(Effect::new(
        Tier::Passive,
        ResourceKey::Aob,
        population_delta(resources.aob, ammonia_ppm, max_bacteria, tunables),
        "nitrogen_cycle",
    ));
    effects.push(Effect::new(
        Tier::Passive,
        ResourceKey::Nob,
        population_delta(resources.nob, nitrite_ppm, max_bacteria, tunables),
        "nitrogen_cycle",
    ));

    effects
}

fn population_delta(population: f64, food_ppm: f64, max_bacteria: f64, tunables: &TunableConfig) -> f64 {
    if food_ppm >= tunables.bacteria_food_threshold_ppm {
        if max_bacteria <= 0.0 {
            return 0.0;
        }
        population * tunables.bacteria_growth_rate * (1.0 - population / max_bacteria)
    } else {
        -population * tunables.bacteria_death_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;

    #[test]
    fn aob_spawns_once_ammonia_crosses_threshold() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.ammonia = 5.0; // 0.1 ppm at 50L, above default 0.05 threshold
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        let aob_delta: f64 = effects.iter().filter(|e| e.resource == ResourceKey::Aob).map(|e| e.delta).sum();
        assert!(aob_delta > 0.0);
    }

    #[test]
    fn mineralization_moves_waste_into_ammonia() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.waste = 10.0;
        let tunables = TunableConfig::default();
        let effects = update(&snap, &tunables);
        let waste_delta: f64 = effects.iter().filter(|e| e.resource == ResourceKey::Waste).map(|e| e.delta).sum();
        let ammonia_delta: f64 = effects.iter().filter(|e| e.resource == ResourceKey::Ammonia).map(|e| e.delta).sum();
        assert!(waste_delta < 0.0);
        assert!(ammonia_delta > 0.0);
    }

    #[test]
    fn population_declines_without_its_food_source() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        snap.resources.aob = 100.0;
        snap.resources.ammonia = 0.0;
        let tunables = TunableConfig::default();
        assert!(population_delta(snap.resources.aob, 0.0, snap.max_bacteria_population(&tunables), &tunables) < 0.0);
    }
}
