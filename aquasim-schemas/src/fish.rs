use serde::{Deserialize, Serialize};

/// Catalogue of stocked fish species and the static parameters fish
/// metabolism/health (§4.5 "Fish metabolism") reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FishSpecies {
    NeonTetra,
    Corydoras,
    Guppy,
    BettaSplendens,
    OtocinclusCatfish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishProfile {
    pub adult_mass_g: f64,
    pub initial_mass_g: f64,
    /// 0 (fragile) to 1 (hardy); scales how harshly health declines under
    /// stress and how low health must fall before death.
    pub hardiness: f64,
    pub oxygen_consumption_mg_per_g_hr: f64,
    pub food_consumption_g_per_day: f64,
    pub ammonia_stress_threshold_ppm: f64,
}

impl FishSpecies {
    pub fn profile(self) -> FishProfile {
        match self {
            FishSpecies::NeonTetra => FishProfile {
                adult_mass_g: 0.5,
                initial_mass_g: 0.2,
                hardiness: 0.45,
                oxygen_consumption_mg_per_g_hr: 0.5,
                food_consumption_g_per_day: 0.02,
                ammonia_stress_threshold_ppm: 0.02,
            },
            FishSpecies::Corydoras => FishProfile {
                adult_mass_g: 3.0,
                initial_mass_g: 1.0,
                hardiness: 0.7,
                oxygen_consumption_mg_per_g_hr: 0.35,
                food_consumption_g_per_day: 0.08,
                ammonia_stress_threshold_ppm: 0.03,
            },
            FishSpecies::Guppy => FishProfile {
                adult_mass_g: 0.6,
                initial_mass_g: 0.25,
                hardiness: 0.8,
                oxygen_consumption_mg_per_g_hr: 0.45,
                food_consumption_g_per_day: 0.03,
                ammonia_stress_threshold_ppm: 0.04,
            },
            FishSpecies::BettaSplendens => FishProfile {
                adult_mass_g: 2.5,
                initial_mass_g: 1.5,
                hardiness: 0.75,
                oxygen_consumption_mg_per_g_hr: 0.3,
                food_consumption_g_per_day: 0.05,
                ammonia_stress_threshold_ppm: 0.03,
            },
            FishSpecies::OtocinclusCatfish => FishProfile {
                adult_mass_g: 1.0,
                initial_mass_g: 0.4,
                hardiness: 0.3,
                oxygen_consumption_mg_per_g_hr: 0.4,
                food_consumption_g_per_day: 0.04,
                ammonia_stress_threshold_ppm: 0.015,
            },
        }
    }
}

/// A single stocked fish (§3 `fish`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub id: u64,
    pub species: FishSpecies,
    pub mass_g: f64,
    pub health: f64,
    pub hunger: f64,
}

impl Fish {
    pub fn new(id: u64, species: FishSpecies) -> Self {
        let profile = species.profile();
        Self {
            id,
            species,
            mass_g: profile.initial_mass_g,
            health: 100.0,
            hunger: 0.0,
        }
    }

    pub fn clamp_invariants(&mut self) {
        self.health = self.health.clamp(0.0, 100.0);
        self.hunger = self.hunger.clamp(0.0, 100.0);
        self.mass_g = self.mass_g.max(0.0);
    }
}
