use aquasim_schemas::fish::Fish;
use aquasim_schemas::log::{LogEntry, Severity};
use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Metabolism, hunger, health and death mutate the fish collection directly
/// (§4.1 "fourth side-channel"; §4.5 "Fish metabolism"). Active tier.
pub struct FishProcessorOutput {
    pub effects: Vec<Effect>,
    pub fish: Vec<Fish>,
    pub logs: Vec<LogEntry>,
}

pub fn process(snapshot: &Snapshot, tunables: &TunableConfig) -> FishProcessorOutput {
    let resources = &snapshot.resources;
    let ammonia_ppm = resources.ammonia_ppm();
    let mut effects = Vec::new();
    let mut surviving = Vec::with_capacity(snapshot.fish.len());
    let mut logs = Vec::new();

    for fish in &snapshot.fish {
        let mut fish = *fish;
        let profile = fish.species.profile();

        if resources.water > 0.0 {
            let oxygen_delta = -(fish.mass_g * profile.oxygen_consumption_mg_per_g_hr / resources.water);
            effects.push(Effect::new(Tier::Active, ResourceKey::Oxygen, oxygen_delta, "fish"));
        }

        let desired_food = profile.food_consumption_g_per_day / 24.0;
        if resources.food > 0.0 {
            let consumed = desired_food.min(resources.food);
            effects.push(Effect::new(Tier::Active, ResourceKey::Food, -consumed, "fish"));
            effects.push(Effect::new(Tier::Active, ResourceKey::Waste, consumed * tunables.fish_waste_per_gram_food, "fish"));
            fish.hunger = (fish.hunger - tunables.fish_hunger_rate_per_hr).max(0.0);
        } else {
            fish.hunger = (fish.hunger + tunables.fish_hunger_rate_per_hr).min(100.0);
        }

        let stressed = fish.hunger > 50.0 || ammonia_ppm > profile.ammonia_stress_threshold_ppm;
        if stressed {
            fish.health -= tunables.fish_health_decline_rate_per_hr * (1.0 - profile.hardiness);
        } else {
            fish.health += tunables.fish_health_recovery_rate_per_hr * profile.hardiness;
        }
        fish.clamp_invariants();

        if fish.health <= tunables.fish_death_health_threshold {
            logs.push(LogEntry::new(
                snapshot.tick + 1,
                "fish",
                Severity::Warning,
                format!("fish {} died", fish.id),
            ));
        } else {
            surviving.push(fish);
        }
    }

    FishProcessorOutput {
        effects,
        fish: surviving,
        logs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::fish::FishSpecies;

    #[test]
    fn fed_fish_loses_hunger() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        let mut fish = Fish::new(0, FishSpecies::NeonTetra);
        fish.hunger = 50.0;
        snap.fish.push(fish);
        snap.resources.food = 10.0;
        let tunables = TunableConfig::default();
        let output = process(&snap, &tunables);
        assert_eq!(output.fish.len(), 1);
        assert!(output.fish[0].hunger < 50.0);
    }

    #[test]
    fn starved_unhealthy_fish_dies() {
        let config = SimulationConfig::new(50.0);
        let mut snap = crate::state::create_simulation(&config).unwrap();
        let mut fish = Fish::new(0, FishSpecies::NeonTetra);
        fish.health = 0.5;
        fish.hunger = 90.0;
        snap.fish.push(fish);
        let tunables = TunableConfig::default();
        let output = process(&snap, &tunables);
        assert!(output.fish.is_empty());
        assert_eq!(output.logs.len(), 1);
    }
}
