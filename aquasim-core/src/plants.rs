use aquasim_schemas::log::{LogEntry, Severity};
use aquasim_schemas::plant::Plant;
use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Growth, nutrient sufficiency, shedding and death mutate the plant
/// collection directly, not only the scalar pool — the "fourth
/// side-channel" alongside effects (§4.1). Active tier.
pub struct PlantProcessorOutput {
    pub effects: Vec<Effect>,
    pub plants: Vec<Plant>,
    pub logs: Vec<LogEntry>,
}

pub fn process(snapshot: &Snapshot, tunables: &TunableConfig) -> PlantProcessorOutput {
    let resources = &snapshot.resources;
    let wpl = resources.watts_per_liter();
    let mut effects = Vec::new();
    let mut surviving = Vec::with_capacity(snapshot.plants.len());
    let mut logs = Vec::new();

    for plant in &snapshot.plants {
        let mut plant = *plant;
        let profile = plant.species.profile();

        let co2_factor = resources.co2 / (resources.co2 + tunables.photosynthesis_co2_half_saturation_mg_l);
        let nitrate_ppm = resources.nitrate_ppm();
        let nitrate_factor = nitrate_ppm / (nitrate_ppm + profile.optimal_nitrate_ppm.max(1e-6));
        let photo_rate = tunables.photosynthesis_rate_coefficient * plant.size * wpl * co2_factor * nitrate_factor;

        let q10 = tunables.respiration_q10.powf((resources.temperature - 25.0) / 10.0);
        let resp_rate = tunables.respiration_rate_coefficient * plant.size * q10;

        effects.push(Effect::new(Tier::Active, ResourceKey::Oxygen, photo_rate - resp_rate, "plants"));
        effects.push(Effect::new(Tier::Active, ResourceKey::Co2, resp_rate - photo_rate, "plants"));

        let nutrient_draw = photo_rate * tunables.plant_biomass_to_nutrient_draw;
        effects.push(Effect::new(Tier::Active, ResourceKey::Nitrate, -nutrient_draw, "plants"));
        effects.push(Effect::new(
            Tier::Active,
            ResourceKey::Phosphate,
            -nutrient_draw * (profile.optimal_phosphate_ppm / profile.optimal_nitrate_ppm.max(1e-6)),
            "plants",
        ));
        effects.push(Effect::new(
            Tier::Active,
            ResourceKey::Potassium,
            -nutrient_draw * (profile.optimal_potassium_ppm / profile.optimal_nitrate_ppm.max(1e-6)),
            "plants",
        ));
        effects.push(Effect::new(
            Tier::Active,
            ResourceKey::Iron,
            -nutrient_draw * (profile.optimal_iron_ppm / profile.optimal_nitrate_ppm.max(1e-6)),
            "plants",
        ));

        let growth = photo_rate * profile.growth_rate_per_hr * 100.0;
        let headroom = 200.0 - plant.size;
        let applied_growth = growth.min(headroom.max(0.0));
        let overgrowth = (growth - applied_growth).max(0.0);
        plant.size += applied_growth;
        if overgrowth > 0.0 {
            effects.push(Effect::new(Tier::Active, ResourceKey::Waste, overgrowth * tunables.plant_shedding_waste_g, "plants"));
        }

        let sufficiency = [
            ratio(resources.nitrate_ppm(), profile.optimal_nitrate_ppm),
            ratio(resources.phosphate_ppm(), profile.optimal_phosphate_ppm),
            ratio(resources.potassium_ppm(), profile.optimal_potassium_ppm),
            ratio(resources.iron_ppm(), profile.optimal_iron_ppm),
        ];
        let limiting = sufficiency.iter().cloned().fold(f64::INFINITY, f64::min);

        if limiting >= 1.0 {
            plant.condition = (plant.condition + tunables.plant_condition_step_up).min(100.0);
        } else {
            plant.condition = (plant.condition - tunables.plant_condition_step_down).max(0.0);
        }

        if plant.condition < tunables.plant_shedding_threshold {
            plant.ticks_below_threshold += 1;
            effects.push(Effect::new(Tier::Active, ResourceKey::Waste, tunables.plant_shedding_waste_g, "plants"));
        } else {
            plant.ticks_below_threshold = 0;
        }

        plant.clamp_invariants();

        if plant.ticks_below_threshold >= tunables.plant_death_after_ticks {
            effects.push(Effect::new(Tier::Active, ResourceKey::Waste, tunables.plant_death_waste_g, "plants"));
            logs.push(LogEntry::new(
                snapshot.tick + 1,
                "plants",
                Severity::Warning,
                format!("plant {} died from sustained poor condition", plant.id),
            ));
        } else {
            surviving.push(plant);
        }
    }

    PlantProcessorOutput {
        effects,
        plants: surviving,
        logs,
    }
}

fn ratio(current_ppm: f64, optimal_ppm: f64) -> f64 {
    if optimal_ppm <= 0.0 {
        1.0
    } else {
        current_ppm / optimal_ppm
    }
}
